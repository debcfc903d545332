//! Search, category filter, sort and clear-all controls above the catalog.

use leptos::prelude::*;

use crate::config::ALL_CATEGORIES;
use crate::state::catalog::{CatalogQuery, CatalogStore, SortKey};

const SORT_OPTIONS: [(SortKey, &str); 4] = [
    (SortKey::Id, "Sort: Default"),
    (SortKey::PriceAsc, "Price: Low to High"),
    (SortKey::PriceDesc, "Price: High to Low"),
    (SortKey::Name, "Name: A-Z"),
];

#[component]
pub fn CatalogControls(query: RwSignal<CatalogQuery>, categories: Memo<Vec<String>>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();

    view! {
        <div class="row g-2 mb-3 catalog-controls">
            <div class="col-md-5">
                <input
                    id="searchInput"
                    class="form-control"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.set_search(value));
                    }
                />
            </div>
            <div class="col-md-3">
                <select
                    id="categoryFilter"
                    class="form-select"
                    prop:value=move || query.with(|q| q.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.set_category(value));
                    }
                >
                    <option value=ALL_CATEGORIES>"All Categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let label = c.clone();
                                let value = c.clone();
                                let selected = move || query.with(|q| q.category == c);
                                view! { <option value=value selected=selected>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <div class="col-md-2">
                <select
                    id="sortSelect"
                    class="form-select"
                    on:change=move |ev| {
                        let key = SortKey::from_value(&event_target_value(&ev));
                        query.update(|q| q.set_sort(key));
                    }
                >
                    {SORT_OPTIONS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <option value={key.as_value()} selected=move || query.with(|q| q.sort == key)>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="col-md-2 d-grid">
                <button
                    id="clearAllBtn"
                    class="btn btn-outline-danger"
                    on:click=move |_| catalog.update(|store| store.clear_all())
                >
                    "Clear All"
                </button>
            </div>
        </div>
    }
}
