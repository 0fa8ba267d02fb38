use serde::{Deserialize, Serialize};

use crate::domain::cart::{ItemOption, LineItem, LineItemId, Money};

/// A product offered on the storefront page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub sku: String,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub options: Vec<ItemOption>,
}

impl CatalogProduct {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ItemOption::new(label, value));
        self
    }

    pub fn to_line_item(&self, id: LineItemId, quantity: u32) -> LineItem {
        LineItem {
            id,
            name: self.name.clone(),
            sku: self.sku.clone(),
            quantity,
            price: self.price.clone(),
            options: self.options.clone(),
        }
    }
}

/// Products shown by the storefront binary
pub fn demo_catalog() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct::new("VA01-GO", "Silver Amor Bangle Set", Money::new("USD", 98.0)),
        CatalogProduct::new("VT12-LL", "Jillian Top", Money::new("USD", 58.0))
            .with_option("Fashion Size", "L")
            .with_option("Fashion Color", "Lily"),
        CatalogProduct::new("VSK03-KH", "Johanna Skirt", Money::new("USD", 78.0))
            .with_option("Fashion Size", "M"),
        CatalogProduct::new("VD07-PE", "Sylvia Midi Dress", Money::new("USD", 128.0)),
        CatalogProduct::new("VA12-SI", "Tiki Mug", Money::new("USD", 12.5)),
        CatalogProduct::new("VA20-TO", "Canvas Tote Bag", Money::new("USD", 15.0))
            .with_option("Color", "Sand"),
        CatalogProduct::new("VA33-CA", "Carmina Earrings", Money::new("USD", 48.0)),
        CatalogProduct::new("VSW01-FL", "Flora Sweater", Money::new("USD", 1080.0)),
    ]
}
