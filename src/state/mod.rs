//! Shopper state held for the lifetime of one page load.
//!
//! DESIGN
//! ======
//! The three product-id lists live together in [`collections::Collections`]
//! so the store can load and save them as one unit, while each list keeps
//! its own membership rules.

pub mod collections;

pub use collections::{Collections, ListError};
