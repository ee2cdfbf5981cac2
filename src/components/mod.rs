//! Leptos components mounted into the static page markup.
//!
//! ARCHITECTURE
//! ============
//! The pages ship their own HTML; components only render the pieces that
//! depend on runtime data (the catalog grid and notifications) and are
//! mounted into existing containers with `leptos::mount`.

pub mod notification;
pub mod product_card;
