//! Integration layer
//!
//! Wires the terminal, the cart provider and the components into the
//! storefront application loop.

pub mod app;

pub use app::App;
