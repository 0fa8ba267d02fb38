//! The cart provider seam
//!
//! A [`CartProvider`] owns cart state and the asynchronous work that changes
//! it. The mini cart asks it for a [`MiniCartTalon`] on every render, handing
//! over the parent's setter and the fixed [`SHOPPING_BAG_OPERATIONS`].

use crate::{
    core::callback::{Callback, SetIsOpen},
    domain::cart::{CartError, LineItem, LineItemId, Money},
};

/// Names of the data operations a provider runs for the mini cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniCartOperations {
    pub queries: MiniCartQueries,
    pub mutations: MiniCartMutations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniCartQueries {
    pub mini_cart_query: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniCartMutations {
    pub remove_item_mutation: &'static str,
}

pub const SHOPPING_BAG_OPERATIONS: MiniCartOperations = MiniCartOperations {
    queries: MiniCartQueries {
        mini_cart_query: "MiniCartQuery",
    },
    mutations: MiniCartMutations {
        remove_item_mutation: "RemoveItemForMiniCart",
    },
};

/// Arguments handed to [`CartProvider::use_mini_cart`]
#[derive(Debug, Clone)]
pub struct MiniCartArgs {
    pub set_is_open: SetIsOpen,
    pub operations: MiniCartOperations,
}

/// Snapshot of cart state plus the callbacks that mutate it
#[derive(Debug, Clone, Default)]
pub struct MiniCartTalon {
    pub product_listings: Vec<LineItem>,
    pub loading: bool,
    pub error: Option<CartError>,
    pub total_quantity: u32,
    pub sub_total: Option<Money>,
    pub handle_remove_item: Callback<LineItemId>,
    pub handle_edit_cart: Callback<()>,
    pub handle_proceed_to_checkout: Callback<()>,
}

/// External state-and-operations provider for the mini cart
pub trait CartProvider {
    fn use_mini_cart(&self, args: MiniCartArgs) -> MiniCartTalon;
}

impl<P: CartProvider + ?Sized> CartProvider for Box<P> {
    fn use_mini_cart(&self, args: MiniCartArgs) -> MiniCartTalon {
        (**self).use_mini_cart(args)
    }
}
