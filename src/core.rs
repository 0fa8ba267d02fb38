//! Core contracts between the mini cart and its collaborators
//!
//! - Callbacks handed across component boundaries
//! - The cart provider ("talon") seam and the data it returns

pub mod callback;
pub mod talon;
