//! Infrastructure layer
//!
//! This module handles the outside world:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Scroll lock facility
//! - The in-memory cart provider used by the storefront binary

pub mod cart_store;
pub mod cli;
pub mod config;
pub mod scroll_lock;
pub mod tui;
