//! In-memory cart provider
//!
//! Backs the storefront binary. Cart totals are computed here, and removals
//! run on a tokio task with a configurable latency so that the mini cart's
//! loading state is observable.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    core::{
        callback::Callback,
        talon::{CartProvider, MiniCartArgs, MiniCartTalon},
    },
    domain::{
        cart::{CartError, LineItem, LineItemId, Money},
        catalog::CatalogProduct,
    },
};

#[derive(Debug, Default)]
struct CartStore {
    currency: String,
    items: Vec<LineItem>,
    loading: bool,
    error: Option<CartError>,
    next_id: u64,
}

impl CartStore {
    fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    fn sub_total(&self) -> Money {
        let value = self.items.iter().map(|item| item.row_total().value).sum();
        Money::new(self.currency.clone(), value)
    }

    /// Lines are summed without conversion, so every product must share the
    /// cart's currency
    fn add(&mut self, product: &CatalogProduct) -> Result<(), CartError> {
        if product.price.currency != self.currency {
            return Err(CartError::CurrencyMismatch {
                sku: product.sku.clone(),
                expected: self.currency.clone(),
                found: product.price.currency.clone(),
            });
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.sku == product.sku) {
            item.quantity += 1;
            return Ok(());
        }
        self.next_id += 1;
        let id = LineItemId::new(self.next_id.to_string());
        self.items.push(product.to_line_item(id, 1));
        Ok(())
    }

    fn remove(&mut self, id: &LineItemId) -> Result<LineItem, CartError> {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(CartError::RemoveItem {
                id: id.clone(),
                message: "no such item in the cart".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryCartProvider {
    store: Arc<Mutex<CartStore>>,
    action_tx: Option<UnboundedSender<Action>>,
    latency: Duration,
}

impl InMemoryCartProvider {
    pub fn new(currency: impl Into<String>) -> Self {
        let store = CartStore {
            currency: currency.into(),
            ..Default::default()
        };
        Self {
            store: Arc::new(Mutex::new(store)),
            action_tx: None,
            latency: Duration::ZERO,
        }
    }

    /// Delay applied to removals when a tokio runtime is available
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn store(&self) -> MutexGuard<'_, CartStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, action: Action) {
        if let Some(tx) = &self.action_tx {
            if let Err(e) = tx.send(action) {
                tracing::warn!("cart provider could not notify the app: {e}");
            }
        }
    }

    pub fn add_item(&self, product: &CatalogProduct) {
        let result = self.store().add(product);
        match result {
            Ok(()) => {
                tracing::info!(sku = %product.sku, "added to cart");
                self.notify(Action::StatusMessage(format!("Added {} to cart", product.name)));
                self.notify(Action::CartChanged);
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.notify(Action::Error(e.to_string()));
            }
        }
    }

    pub fn remove_item(&self, id: LineItemId) {
        let runtime = tokio::runtime::Handle::try_current();
        match runtime {
            Ok(runtime) if !self.latency.is_zero() => {
                self.store().loading = true;
                self.notify(Action::CartChanged);
                let this = self.clone();
                runtime.spawn(async move {
                    tokio::time::sleep(this.latency).await;
                    this.finish_remove(&id);
                });
            }
            _ => self.finish_remove(&id),
        }
    }

    fn finish_remove(&self, id: &LineItemId) {
        let result = {
            let mut store = self.store();
            store.loading = false;
            let result = store.remove(id);
            if let Err(e) = &result {
                store.error = Some(e.clone());
            }
            result
        };
        match result {
            Ok(item) => {
                tracing::info!(sku = %item.sku, "removed from cart");
                self.notify(Action::StatusMessage(format!("Removed {} from cart", item.name)));
            }
            Err(e) => {
                tracing::error!("{e}");
                self.notify(Action::Error(e.to_string()));
            }
        }
        self.notify(Action::CartChanged);
    }

    /// Put the provider into the error state
    pub fn fail_with(&self, error: CartError) {
        self.store().error = Some(error);
        self.notify(Action::CartChanged);
    }

    pub fn clear_error(&self) {
        self.store().error = None;
        self.notify(Action::CartChanged);
    }

    pub fn total_quantity(&self) -> u32 {
        self.store().total_quantity()
    }

    pub fn items(&self) -> Vec<LineItem> {
        self.store().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.store().loading
    }

    fn navigate(&self, set_is_open: &Callback<bool>, path: &str) {
        set_is_open.emit(false);
        tracing::info!(path, "navigating away from the mini cart");
        self.notify(Action::Navigate(path.to_string()));
    }
}

impl CartProvider for InMemoryCartProvider {
    fn use_mini_cart(&self, args: MiniCartArgs) -> MiniCartTalon {
        tracing::trace!(
            query = args.operations.queries.mini_cart_query,
            mutation = args.operations.mutations.remove_item_mutation,
            "use_mini_cart"
        );
        let (product_listings, loading, error, total_quantity, sub_total) = {
            let store = self.store();
            (
                store.items.clone(),
                store.loading,
                store.error.clone(),
                store.total_quantity(),
                store.sub_total(),
            )
        };

        let remover = self.clone();
        let editor = self.clone();
        let edit_setter = args.set_is_open.clone();
        let checkout = self.clone();
        let checkout_setter = args.set_is_open;
        MiniCartTalon {
            product_listings,
            loading,
            error,
            total_quantity,
            sub_total: Some(sub_total),
            handle_remove_item: Callback::new(move |id| remover.remove_item(id)),
            handle_edit_cart: Callback::new(move |_| editor.navigate(&edit_setter, "/cart")),
            handle_proceed_to_checkout: Callback::new(move |_| {
                checkout.navigate(&checkout_setter, "/checkout")
            }),
        }
    }
}
