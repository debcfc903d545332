//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`catalog`, `cart`, `form`) so individual
//! components can depend on small focused models. Stores are plain Rust
//! structs wrapped in `RwSignal`s by the app root.

pub mod cart;
pub mod catalog;
pub mod form;
pub mod product;
