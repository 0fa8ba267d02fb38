//! Domain logic
//!
//! This module contains storefront domain types and helpers:
//! - Cart line items and money values
//! - The storefront catalog
//! - Price formatting
//! - Text processing utilities

pub mod cart;
pub mod catalog;
pub mod price;
pub mod text;
