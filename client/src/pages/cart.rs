//! Cart page listing snapshot lines with quantity controls.

use leptos::prelude::*;

use crate::components::cart_table::CartTable;
use crate::state::cart::CartStore;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let is_empty = move || cart.with(|c| c.lines().is_empty());

    view! {
        <section class="cart-page py-4">
            <header class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3 mb-0">"Your Cart"</h1>
                <button
                    id="clearCartBtn"
                    class="btn btn-outline-danger"
                    disabled=is_empty
                    on:click=move |_| cart.update(|c| c.clear())
                >
                    "Clear Cart"
                </button>
            </header>
            <CartTable/>
        </section>
    }
}
