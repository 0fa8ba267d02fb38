//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The mini cart and the storefront shell around it
//! - Reusable leaf widgets (button, icon, price, product listing)
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
