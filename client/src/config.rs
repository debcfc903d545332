//! Storefront constants shared by stores and views.
//!
//! Slot keys match the layout written by earlier versions of the storefront,
//! so existing browser data keeps loading.

/// Storage slot holding the product catalog snapshot.
pub const PRODUCTS_KEY: &str = "pm_products";

/// Storage slot holding the cart lines.
pub const CART_KEY: &str = "pm_cart";

/// Rows shown per catalog page.
pub const PAGE_SIZE: usize = 6;

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";
pub const DEFAULT_CATEGORY: &str = "General";

/// Rating used when the form value does not parse.
pub const DEFAULT_RATING: u8 = 5;
pub const MAX_RATING: u8 = 5;

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";
