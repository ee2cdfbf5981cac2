//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `input` holds pure string/number rules so they test natively; `dom`
//! isolates the `web-sys` lookups and listener plumbing the pages share.

#[cfg(feature = "csr")]
pub mod dom;
pub mod input;
