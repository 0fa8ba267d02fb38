//! Reusable leaf widgets

pub mod button;
pub mod icon;
pub mod price;
pub mod product_item;
pub mod product_listing;

pub use button::{Button, Priority};
pub use icon::{Icon, IconSrc};
pub use price::Price;
pub use product_item::ProductItem;
pub use product_listing::ProductListing;
