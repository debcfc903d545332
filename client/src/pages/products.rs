//! Products page: catalog editor, listing controls, table and pagination.
//!
//! DESIGN
//! ======
//! The form and listing controls are page-scoped signals, so navigating away
//! and back starts a fresh creating form on page one. The listing and the
//! category list are memos over the shared catalog store.

use leptos::prelude::*;

use crate::components::catalog_controls::CatalogControls;
use crate::components::pagination::Pagination;
use crate::components::product_editor::ProductEditor;
use crate::components::product_table::ProductTable;
use crate::state::catalog::{CatalogQuery, CatalogStore};
use crate::state::form::ProductForm;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();
    let form = RwSignal::new(ProductForm::default());
    let query = RwSignal::new(CatalogQuery::default());

    let listing = Memo::new(move |_| catalog.with(|store| store.query(&query.get())));
    let categories = Memo::new(move |_| catalog.with(|store| store.categories()));

    // Mutations can strand the tracked page or category; pull them back.
    Effect::new(move || {
        let categories = categories.get();
        let total_pages = listing.with(|l| l.total_pages);
        let mut next = query.get_untracked();
        let category_reset = next.retain_category(&categories);
        let page_clamped = next.clamp_page(total_pages);
        if category_reset || page_clamped {
            query.set(next);
        }
    });

    view! {
        <section class="products-page py-4">
            <h1 class="h3 mb-3">"Products"</h1>
            <ProductEditor form=form/>
            <CatalogControls query=query categories=categories/>
            <ProductTable listing=listing form=form/>
            <Pagination listing=listing query=query/>
        </section>
    }
}
