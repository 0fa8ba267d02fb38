//! # minicart - a mini cart panel for terminal storefronts
//!
//! A compact shopping cart summary (item count, subtotal, product listing,
//! checkout and edit actions) rendered with ratatui as an overlay panel.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): cart data, catalog, price formatting
//! - **Core** (`core`): callbacks and the [`core::talon::CartProvider`] seam
//!   through which the mini cart reads cart state and triggers mutations
//! - **Presentation** (`presentation`): the mini cart component, leaf widgets,
//!   and config-driven styles and key bindings
//! - **Infrastructure** (`infrastructure`): terminal, config, CLI, page
//!   scroll lock, and an in-memory cart provider
//! - **Integration** (`integration`): the storefront application loop
//!
//! ## Example Usage
//!
//! ```rust
//! use minicart::{
//!     domain::{cart::Money, catalog::CatalogProduct},
//!     infrastructure::cart_store::InMemoryCartProvider,
//! };
//!
//! let provider = InMemoryCartProvider::new("USD");
//! provider.add_item(&CatalogProduct::new("VA12-SI", "Tiki Mug", Money::new("USD", 12.5)));
//! assert_eq!(provider.total_quantity(), 1);
//! ```

pub mod action;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
#[doc(hidden)]
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
