//! Product catalog store and its filtered, paged listing.
//!
//! DESIGN
//! ======
//! `CatalogStore` owns the product list and is the only writer of the
//! products slot. Every mutation persists the whole list before returning;
//! `load` is the only read. The listing (`query`) is a pure function of the
//! store and a [`CatalogQuery`], so views recompute it after any change.
//!
//! ERROR HANDLING
//! ==============
//! Absent ids are silent no-ops. Failed writes are logged and the in-memory
//! list stays authoritative until the next successful save.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::config::{ALL_CATEGORIES, PAGE_SIZE, PRODUCTS_KEY};
use crate::state::product::{CatalogError, Product, ProductDraft, default_products};
use crate::util::storage::{BrowserStorage, KvStore, Slot, read_slot, save_json};

/// Listing order selected in the sort control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    PriceAsc,
    PriceDesc,
    Name,
}

impl SortKey {
    /// Map a control value to a sort key; unknown values sort by id.
    pub fn from_value(value: &str) -> Self {
        match value {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name" => Self::Name,
            _ => Self::Id,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
        }
    }
}

/// Transient listing controls: search text, category, sort and page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: String,
    pub sort: SortKey,
    /// 1-based.
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_owned(),
            sort: SortKey::Id,
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Pull the tracked page back inside `1..=total_pages`.
    ///
    /// Returns `true` if the page changed.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.clamp(1, total_pages.max(1));
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }

    /// Fall back to all categories once the selected one has no products.
    ///
    /// Returns `true` if the filter was reset.
    pub fn retain_category(&mut self, categories: &[String]) -> bool {
        if self.category == ALL_CATEGORIES || categories.contains(&self.category) {
            return false;
        }
        self.set_category(ALL_CATEGORIES.to_owned());
        true
    }

    fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !product.name.to_lowercase().contains(&needle) {
            return false;
        }
        self.category == ALL_CATEGORIES || product.category == self.category
    }
}

/// One page of the filtered, sorted listing.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    /// Requested page after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Matching products across all pages.
    pub total: usize,
}

/// Number of pages needed for `total` rows (at least one).
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Case-insensitive comparison with a case-sensitive tiebreak, so the order
/// is total and stable across reloads.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

pub struct CatalogStore<S = BrowserStorage> {
    storage: S,
    products: Vec<Product>,
}

impl<S: KvStore> CatalogStore<S> {
    /// Empty store over `storage`; call [`CatalogStore::load`] to read the slot.
    pub fn new(storage: S) -> Self {
        Self { storage, products: Vec::new() }
    }

    /// Store loaded from `storage`.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Replace the in-memory list with the persisted snapshot, seeding the
    /// default products when the slot is missing or empty.
    ///
    /// A slot that fails to decode loads as empty and is left as stored.
    pub fn load(&mut self) {
        match read_slot::<Vec<Product>>(&self.storage, PRODUCTS_KEY) {
            Slot::Value(products) if !products.is_empty() => self.products = products,
            Slot::Malformed => {
                self.products = Vec::new();
                leptos::logging::warn!("catalog slot unreadable, not seeding defaults");
            }
            Slot::Value(_) | Slot::Missing => {
                self.products = default_products();
                self.save();
            }
        }
        leptos::logging::log!("catalog loaded: {} products", self.products.len());
    }

    fn save(&self) {
        if let Err(e) = save_json(&self.storage, PRODUCTS_KEY, &self.products) {
            leptos::logging::warn!("catalog save failed: {e}");
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn next_id(&self) -> Result<u32, CatalogError> {
        let max = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(CatalogError::IdsExhausted)
    }

    /// Append a product built from `draft` and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] without touching the catalog if
    /// the draft name fails validation, or [`CatalogError::IdsExhausted`] if
    /// the largest stored id is already `u32::MAX`.
    pub fn add(&mut self, draft: &ProductDraft) -> Result<u32, CatalogError> {
        let product = Product::from_draft(self.next_id()?, draft)?;
        let id = product.id;
        self.products.push(product);
        self.save();
        Ok(id)
    }

    /// Apply `draft` to product `id`.
    ///
    /// Returns `Ok(false)` when no such product exists.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] without touching the catalog if
    /// the draft name fails validation.
    pub fn update(&mut self, id: u32, draft: &ProductDraft) -> Result<bool, CatalogError> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        product.apply_draft(draft)?;
        self.save();
        Ok(true)
    }

    /// Remove product `id`. Returns `true` if it existed.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.save();
        self.products.len() != before
    }

    pub fn clear_all(&mut self) {
        self.products.clear();
        self.save();
    }

    /// Distinct categories present in the catalog, ascending.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn matching(&self, query: &CatalogQuery) -> Vec<&Product> {
        let mut list: Vec<&Product> = self.products.iter().filter(|p| query.matches(p)).collect();
        match query.sort {
            SortKey::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Name => list.sort_by(|a, b| compare_names(&a.name, &b.name)),
            SortKey::Id => list.sort_by_key(|p| p.id),
        }
        list
    }

    /// Pages the listing for `query` currently spans.
    pub fn page_count(&self, query: &CatalogQuery) -> usize {
        page_count(self.products.iter().filter(|p| query.matches(p)).count())
    }

    /// Filter, sort and page the catalog.
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        let list = self.matching(query);
        let total = list.len();
        let total_pages = page_count(total);
        let page = query.page.clamp(1, total_pages);
        let items = list
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        CatalogPage { items, page, total_pages, total }
    }
}
