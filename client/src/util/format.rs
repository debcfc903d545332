//! Display formatting for prices and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::config::MAX_RATING;

/// Two-decimal price with a dollar sign (`12.5` → `"$12.50"`).
pub fn price_label(price: f64) -> String {
    format!("${price:.2}")
}

/// Filled stars for `rating`, padded with hollow stars up to the maximum.
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING);
    let mut out = "★".repeat(usize::from(filled));
    out.push_str(&"☆".repeat(usize::from(MAX_RATING - filled)));
    out
}
