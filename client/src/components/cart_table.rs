//! Cart line table with quantity controls.
//!
//! Lines render from their own snapshot, so entries whose product has since
//! left the catalog still show their last-known name and price.

use leptos::prelude::*;

use crate::state::cart::{CartLine, CartStore};
use crate::util::format::price_label;

#[component]
pub fn CartTable() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();

    view! {
        <div class="table-responsive">
            <table class="table align-middle">
                <thead class="table-dark">
                    <tr>
                        <th>"#"</th>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Quantity"</th>
                        <th>"Total"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="cartBody">
                    {move || {
                        let lines = cart.with(|c| c.lines().to_vec());
                        if lines.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="text-center text-muted">"Cart is empty"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            lines
                                .into_iter()
                                .enumerate()
                                .map(|(i, line)| view! { <CartRow position={i + 1} line=line/> })
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
fn CartRow(position: usize, line: CartLine) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let total = price_label(line.line_total());
    let CartLine { id, name, price, quantity, image } = line;

    view! {
        <tr>
            <td>{position}</td>
            <td>
                <img src=image class="product-img" alt=name.clone()/>
            </td>
            <td>{name}</td>
            <td>{price_label(price)}</td>
            <td>
                <div class="btn-group btn-group-sm" role="group">
                    <button class="btn btn-outline-secondary" on:click=move |_| cart.update(|c| c.decrease(id))>
                        "-"
                    </button>
                    <span class="btn btn-light disabled">{quantity}</span>
                    <button class="btn btn-outline-secondary" on:click=move |_| cart.update(|c| c.increase(id))>
                        "+"
                    </button>
                </div>
            </td>
            <td>{total}</td>
            <td>
                <button class="btn btn-sm btn-danger" title="Remove" on:click=move |_| cart.update(|c| c.remove(id))>
                    "x"
                </button>
            </td>
        </tr>
    }
}
