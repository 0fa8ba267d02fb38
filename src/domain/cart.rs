//! Cart domain types
//!
//! These are the values a cart provider hands to the mini cart. The mini cart
//! only reads them; totals and mutations belong to the provider.

use std::fmt;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Opaque identifier of a line item inside a cart
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An amount of money in a given ISO 4217 currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub currency: String,
    pub value: f64,
}

impl Money {
    pub fn new(currency: impl Into<String>, value: f64) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(currency, 0.0)
    }

    /// Multiply the amount by a quantity, keeping the currency
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.currency.clone(), self.value * f64::from(quantity))
    }
}

/// A configurable option chosen for a product (e.g. "Size: M")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOption {
    pub label: String,
    pub value: String,
}

impl ItemOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One product entry shown in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    /// Unit price
    pub price: Money,
    #[serde(default)]
    pub options: Vec<ItemOption>,
}

impl LineItem {
    pub fn new(
        id: impl Into<LineItemId>,
        name: impl Into<String>,
        sku: impl Into<String>,
        quantity: u32,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            quantity,
            price,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ItemOption::new(label, value));
        self
    }

    pub fn row_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Failure reported by a cart provider
///
/// The mini cart does not distinguish kinds: any error replaces the panel
/// with the error view.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CartError {
    #[snafu(display("Failed to fetch cart: {message}"))]
    Fetch { message: String },

    #[snafu(display("Failed to remove item {id}: {message}"))]
    RemoveItem { id: LineItemId, message: String },

    #[snafu(display("Cannot add {sku}: priced in {found}, the cart uses {expected}"))]
    CurrencyMismatch {
        sku: String,
        expected: String,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_row_total_multiplies_unit_price() {
        let item = LineItem::new("1", "Tiki Mug", "VA01", 3, Money::new("USD", 12.5));
        assert_eq!(item.row_total(), Money::new("USD", 37.5));
    }

    #[test]
    fn test_with_option_appends() {
        let item = LineItem::new("1", "Tee", "VT01", 1, Money::new("USD", 20.0))
            .with_option("Size", "M")
            .with_option("Color", "Blue");
        assert_eq!(
            item.options,
            vec![ItemOption::new("Size", "M"), ItemOption::new("Color", "Blue")]
        );
    }

    #[test]
    fn test_cart_error_display() {
        let err = CartError::Fetch {
            message: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch cart: timeout");

        let err = CartError::RemoveItem {
            id: LineItemId::new("42"),
            message: "gone".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to remove item 42: gone");

        let err = CartError::CurrencyMismatch {
            sku: "VA12-SI".to_string(),
            expected: "USD".to_string(),
            found: "EUR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot add VA12-SI: priced in EUR, the cart uses USD"
        );
    }

    #[test]
    fn test_line_item_id_display() {
        assert_eq!(LineItemId::from("abc").to_string(), "abc");
        assert_eq!(LineItemId::new("abc").as_str(), "abc");
    }
}
