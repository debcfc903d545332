//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and tables while reading/writing
//! shared store signals from Leptos context providers.

pub mod cart_table;
pub mod catalog_controls;
pub mod navbar;
pub mod pagination;
pub mod product_editor;
pub mod product_table;
