//! Catalog table for the current listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows dispatch their actions directly to the stores held in context: add to
//! cart writes the cart store, edit repoints the page's form, delete mutates
//! the catalog. The listing memo re-renders the body after each change.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use leptos::prelude::*;

use crate::state::cart::{CartStore, add_to_cart_by_id};
use crate::state::catalog::{CatalogPage, CatalogStore};
use crate::state::form::ProductForm;
use crate::state::product::Product;
use crate::util::format::{price_label, rating_stars};

/// Placeholder row text when `listing` has nothing to show.
pub fn empty_listing_notice(listing: &CatalogPage) -> Option<&'static str> {
    listing.items.is_empty().then_some("No products found.")
}

#[component]
pub fn ProductTable(listing: Memo<CatalogPage>, form: RwSignal<ProductForm>) -> impl IntoView {
    view! {
        <div class="table-responsive">
            <table class="table table-hover align-middle">
                <thead class="table-dark">
                    <tr>
                        <th>"ID"</th>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Category"</th>
                        <th>"Stock"</th>
                        <th>"Rating"</th>
                        <th>"Description"</th>
                        <th class="text-center">"Actions"</th>
                    </tr>
                </thead>
                <tbody id="tBody">
                    {move || {
                        let (notice, items) = listing.with(|l| (empty_listing_notice(l), l.items.clone()));
                        if let Some(notice) = notice {
                            view! {
                                <tr>
                                    <td colspan="9" class="text-center small text-muted">{notice}</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|product| view! { <ProductRow product=product form=form/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product, form: RwSignal<ProductForm>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();
    let cart = expect_context::<RwSignal<CartStore>>();
    let Product { id, name, price, image, category, stock, rating, description } = product;

    let on_add_to_cart = move |_| {
        catalog.with_untracked(|store| {
            cart.update(|cart| {
                if !add_to_cart_by_id(store, cart, id) {
                    leptos::logging::warn!("add to cart skipped: product {id} not found");
                }
            });
        });
    };
    let on_edit = move |_| {
        catalog.with_untracked(|store| {
            if let Some(product) = store.get(id) {
                form.update(|f| f.begin_edit(product));
            }
        });
    };
    let on_delete = move |_| {
        catalog.update(|store| {
            store.delete(id);
        });
    };

    view! {
        <tr>
            <td>{id}</td>
            <td>
                <img src=image class="product-img" alt=name.clone()/>
            </td>
            <td>{name}</td>
            <td>{price_label(price)}</td>
            <td>{category}</td>
            <td>{stock}</td>
            <td class="text-warning">{rating_stars(rating)}</td>
            <td class="small text-muted">{description.unwrap_or_default()}</td>
            <td class="text-center">
                <div class="btn-group" role="group">
                    <button class="btn btn-sm btn-success" title="Add to cart" on:click=on_add_to_cart>
                        <i class="fa fa-cart-plus"></i>
                    </button>
                    <button class="btn btn-sm btn-warning" on:click=on_edit>
                        "Edit"
                    </button>
                    <button class="btn btn-sm btn-danger" on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}
