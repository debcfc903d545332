//! Shopping cart lines persisted in the cart slot.
//!
//! DESIGN
//! ======
//! Each line snapshots the product's name, price and image when first added,
//! so lines keep rendering after the product is edited or deleted from the
//! catalog. Deleting a product never touches the cart.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::config::CART_KEY;
use crate::state::catalog::CatalogStore;
use crate::state::product::Product;
use crate::util::storage::{BrowserStorage, KvStore, load_json, save_json};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    /// Catalog id at the time the line was created; may no longer exist.
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

pub struct CartStore<S = BrowserStorage> {
    storage: S,
    lines: Vec<CartLine>,
}

impl<S: KvStore> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, lines: Vec::new() }
    }

    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    pub fn load(&mut self) {
        self.lines = load_json(&self.storage, CART_KEY).unwrap_or_default();
    }

    fn save(&self) {
        if let Err(e) = save_json(&self.storage, CART_KEY, &self.lines) {
            leptos::logging::warn!("cart save failed: {e}");
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total quantity across lines, shown in the navbar badge.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |total: u32, l| total.saturating_add(l.quantity))
    }

    /// Bump the line for `product`, or append one with quantity 1.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                id: product.id,
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
                image: product.image.clone(),
            });
        }
        self.save();
    }

    pub fn increase(&mut self, id: u32) {
        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return;
        };
        line.quantity = line.quantity.saturating_add(1);
        self.save();
    }

    /// Drop one unit; the last unit removes the line.
    pub fn decrease(&mut self, id: u32) {
        let Some(index) = self.lines.iter().position(|l| l.id == id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        self.save();
    }

    pub fn remove(&mut self, id: u32) {
        self.lines.retain(|l| l.id != id);
        self.save();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.save();
    }
}

/// Add catalog product `id` to `cart`. Returns `false` if the catalog has no
/// such product.
pub fn add_to_cart_by_id<C: KvStore, K: KvStore>(
    catalog: &CatalogStore<C>,
    cart: &mut CartStore<K>,
    id: u32,
) -> bool {
    let Some(product) = catalog.get(id) else {
        return false;
    };
    cart.add_product(product);
    true
}
