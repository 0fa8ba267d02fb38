//! Test doubles for the cart provider seam

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};

use crate::{
    core::{
        callback::{Callback, SetIsOpen},
        talon::{CartProvider, MiniCartArgs, MiniCartOperations, MiniCartTalon},
    },
    domain::cart::{CartError, LineItem, LineItemId, Money},
};

/// Shared record of every callback a [`StubCartProvider`] handed out
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    removed: Arc<Mutex<Vec<LineItemId>>>,
    edit_cart: Arc<AtomicUsize>,
    checkout: Arc<AtomicUsize>,
    provider_calls: Arc<AtomicUsize>,
    operations: Arc<Mutex<Option<MiniCartOperations>>>,
}

impl CallLog {
    pub fn removed(&self) -> Vec<LineItemId> {
        self.removed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn edit_cart_count(&self) -> usize {
        self.edit_cart.load(Ordering::SeqCst)
    }

    pub fn checkout_count(&self) -> usize {
        self.checkout.load(Ordering::SeqCst)
    }

    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::SeqCst)
    }

    pub fn last_operations(&self) -> Option<MiniCartOperations> {
        *self
            .operations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Provider returning a fixed snapshot
#[derive(Debug, Clone)]
pub struct StubCartProvider {
    pub product_listings: Vec<LineItem>,
    pub loading: bool,
    pub error: Option<CartError>,
    pub total_quantity: u32,
    pub sub_total: Option<Money>,
    calls: CallLog,
}

impl StubCartProvider {
    /// Two line items, 3 units in total, subtotal USD 42.50
    pub fn ready() -> Self {
        Self {
            product_listings: vec![
                LineItem::new("1", "Tiki Mug", "VA-MUG", 1, Money::new("USD", 12.5)),
                LineItem::new("2", "Tote Bag", "VA-TOTE", 2, Money::new("USD", 15.0))
                    .with_option("Color", "Sand"),
            ],
            loading: false,
            error: None,
            total_quantity: 3,
            sub_total: Some(Money::new("USD", 42.5)),
            calls: CallLog::default(),
        }
    }

    pub fn empty() -> Self {
        Self {
            product_listings: Vec::new(),
            total_quantity: 0,
            sub_total: Some(Money::zero("USD")),
            ..Self::ready()
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.error = Some(CartError::Fetch {
            message: message.to_string(),
        });
        self
    }

    pub fn sub_total(mut self, sub_total: Option<Money>) -> Self {
        self.sub_total = sub_total;
        self
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

impl CartProvider for StubCartProvider {
    fn use_mini_cart(&self, args: MiniCartArgs) -> MiniCartTalon {
        self.calls.provider_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .operations
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(args.operations);

        let removed = Arc::clone(&self.calls.removed);
        let edit_cart = Arc::clone(&self.calls.edit_cart);
        let checkout = Arc::clone(&self.calls.checkout);
        MiniCartTalon {
            product_listings: self.product_listings.clone(),
            loading: self.loading,
            error: self.error.clone(),
            total_quantity: self.total_quantity,
            sub_total: self.sub_total.clone(),
            handle_remove_item: Callback::new(move |id| {
                removed
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(id);
            }),
            handle_edit_cart: Callback::new(move |_| {
                edit_cart.fetch_add(1, Ordering::SeqCst);
            }),
            handle_proceed_to_checkout: Callback::new(move |_| {
                checkout.fetch_add(1, Ordering::SeqCst);
            }),
        }
    }
}

/// A setter that records every value it receives
pub fn recording_setter() -> (Arc<Mutex<Vec<bool>>>, SetIsOpen) {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&values);
    let setter = Callback::new(move |open| {
        sink.lock().unwrap_or_else(PoisonError::into_inner).push(open);
    });
    (values, setter)
}
