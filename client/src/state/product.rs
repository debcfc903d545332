//! Product records and the form draft they are built from.
//!
//! DESIGN
//! ======
//! Drafts hold raw form text. Turning a draft into a [`Product`] is the one
//! place field constraints are enforced: the name is validated, and numeric
//! fields are parsed permissively and clamped into range instead of rejected.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::config::{DEFAULT_CATEGORY, DEFAULT_RATING, MAX_RATING, PLACEHOLDER_IMAGE};
use crate::util::parse::{parse_float_prefix, parse_int_prefix};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 _-]{3,60}$").expect("valid product name regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid product name: {0:?}")]
    InvalidName(String),
    #[error("no product ids left")]
    IdsExhausted,
}

/// A catalog entry as persisted in the products slot.
///
/// Numeric fields read back from storage are clamped into range rather than
/// rejected, since older snapshots may hold negative stock or out-of-range
/// ratings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "stored_price")]
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(deserialize_with = "stored_stock")]
    pub stock: u32,
    #[serde(deserialize_with = "stored_rating")]
    pub rating: u8,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw add/edit form values, not yet committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub stock: String,
    pub rating: String,
    pub description: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            image: String::new(),
            stock: String::new(),
            rating: DEFAULT_RATING.to_string(),
            description: String::new(),
        }
    }
}

/// Form inputs backed by a draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Category,
    Image,
    Stock,
    Rating,
    Description,
}

impl ProductDraft {
    /// Draft prefilled from an existing product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
            stock: product.stock.to_string(),
            rating: product.rating.to_string(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Category => &self.category,
            DraftField::Image => &self.image,
            DraftField::Stock => &self.stock,
            DraftField::Rating => &self.rating,
            DraftField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Price => &mut self.price,
            DraftField::Category => &mut self.category,
            DraftField::Image => &mut self.image,
            DraftField::Stock => &mut self.stock,
            DraftField::Rating => &mut self.rating,
            DraftField::Description => &mut self.description,
        }
    }
}

/// Trim `raw` and check it against the product name pattern.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidName`] if the trimmed name is not 3–60
/// letters, digits, spaces, hyphens or underscores.
pub fn validate_name(raw: &str) -> Result<String, CatalogError> {
    let name = raw.trim();
    if NAME_PATTERN.is_match(name) {
        Ok(name.to_owned())
    } else {
        Err(CatalogError::InvalidName(name.to_owned()))
    }
}

fn clamp_price(price: f64) -> f64 {
    if price.is_finite() { price.max(0.0) } else { 0.0 }
}

fn clamp_stock(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

/// Zero counts as "no rating given".
fn clamp_rating(n: i64) -> Option<u8> {
    (n != 0).then(|| u8::try_from(n.clamp(1, i64::from(MAX_RATING))).unwrap_or(DEFAULT_RATING))
}

fn coerce_price(raw: &str) -> f64 {
    parse_float_prefix(raw).map_or(0.0, clamp_price)
}

fn coerce_stock(raw: &str) -> u32 {
    parse_int_prefix(raw).map_or(0, clamp_stock)
}

fn coerce_rating(raw: &str) -> Option<u8> {
    parse_int_prefix(raw).and_then(clamp_rating)
}

fn stored_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0.0, clamp_price))
}

fn stored_stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.map_or(0, clamp_stock))
}

fn stored_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?
        .and_then(clamp_rating)
        .unwrap_or(DEFAULT_RATING))
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl Product {
    /// Build a new product with `id` from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] if the draft name fails validation.
    pub fn from_draft(id: u32, draft: &ProductDraft) -> Result<Self, CatalogError> {
        Ok(Self {
            id,
            name: validate_name(&draft.name)?,
            price: coerce_price(&draft.price),
            image: non_empty(&draft.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            category: non_empty(&draft.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            stock: coerce_stock(&draft.stock),
            rating: coerce_rating(&draft.rating).unwrap_or(DEFAULT_RATING),
            description: non_empty(&draft.description),
        })
    }

    /// Overwrite fields from `draft`, keeping the current image and rating
    /// when the draft leaves them empty. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] if the draft name fails validation.
    pub fn apply_draft(&mut self, draft: &ProductDraft) -> Result<(), CatalogError> {
        self.name = validate_name(&draft.name)?;
        self.price = coerce_price(&draft.price);
        self.category = non_empty(&draft.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
        if let Some(image) = non_empty(&draft.image) {
            self.image = image;
        }
        self.stock = coerce_stock(&draft.stock);
        if let Some(rating) = coerce_rating(&draft.rating) {
            self.rating = rating;
        }
        self.description = non_empty(&draft.description);
        Ok(())
    }
}

/// Products written to an empty catalog slot.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Gaming Laptop Pro".to_owned(),
            price: 1200.0,
            image: "images/laptopImage1.png".to_owned(),
            category: "Electronics".to_owned(),
            stock: 10,
            rating: 5,
            description: Some("16GB RAM, RTX 3060, 512GB SSD".to_owned()),
        },
        Product {
            id: 2,
            name: "Office Laptop Slim".to_owned(),
            price: 850.0,
            image: "images/laptopImage2.png".to_owned(),
            category: "Electronics".to_owned(),
            stock: 14,
            rating: 4,
            description: Some("i5, 8GB RAM, 256GB SSD".to_owned()),
        },
    ]
}
