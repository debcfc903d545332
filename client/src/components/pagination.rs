//! Page-number strip under the catalog table.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::catalog::{CatalogPage, CatalogQuery};

/// CSS class for page link `n` when `current` is shown.
pub fn page_item_class(n: usize, current: usize) -> &'static str {
    if n == current { "page-item active" } else { "page-item" }
}

#[component]
pub fn Pagination(listing: Memo<CatalogPage>, query: RwSignal<CatalogQuery>) -> impl IntoView {
    view! {
        <nav aria-label="Product pages">
            <ul class="pagination justify-content-center" id="pagination">
                {move || {
                    let (current, total_pages) = listing.with(|l| (l.page, l.total_pages));
                    (1..=total_pages)
                        .map(|n| {
                            view! {
                                <li class=page_item_class(n, current)>
                                    <a
                                        class="page-link"
                                        href="#"
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            query.update(|q| q.go_to(n));
                                        }
                                    >
                                        {n}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </nav>
    }
}
