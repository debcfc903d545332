//! Top navigation bar with the cart-count badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet, so the badge tracks the shared cart
//! signal on every page without explicit refresh calls.

use leptos::prelude::*;

use crate::state::cart::CartStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let count = move || cart.with(|c| c.item_count());

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-dark" id="mainNavbar">
            <div class="container">
                <a class="navbar-brand" href="/">"Storefront"</a>
                <div class="navbar-nav ms-auto">
                    <a class="nav-link" href="/">"Products"</a>
                    <a class="nav-link" href="/cart">
                        "Cart "
                        <span class="badge bg-warning text-dark nav-cart-count">{count}</span>
                    </a>
                </div>
            </div>
        </nav>
    }
}
