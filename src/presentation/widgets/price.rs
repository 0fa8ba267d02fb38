use ratatui::prelude::*;

use crate::domain::{cart::Money, price::format_price};

/// A formatted amount in a currency
#[derive(Debug, Clone, PartialEq)]
pub struct Price<'a> {
    currency_code: &'a str,
    value: f64,
    style: Style,
}

impl<'a> Price<'a> {
    pub fn new(currency_code: &'a str, value: f64) -> Self {
        Self {
            currency_code,
            value,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> String {
        format_price(self.currency_code, self.value)
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style)
    }
}

impl<'a> From<&'a Money> for Price<'a> {
    fn from(money: &'a Money) -> Self {
        Price::new(&money.currency, money.value)
    }
}

impl<'a> From<Price<'a>> for Span<'static> {
    fn from(price: Price<'a>) -> Self {
        price.span()
    }
}
