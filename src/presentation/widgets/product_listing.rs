//! Product listing
//!
//! The scrollable body of the mini cart: one [`ProductItem`] per line item.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    core::callback::Callback,
    domain::cart::{LineItem, LineItemId},
    presentation::widgets::product_item::ProductItem,
};

pub const EMPTY_CART_TEXT: &str = "There are no items in your cart.";

pub struct ProductListing<'a> {
    listings: &'a [LineItem],
    loading: bool,
    handle_remove_item: &'a Callback<LineItemId>,
    selected: Option<usize>,
    style: Style,
}

impl<'a> ProductListing<'a> {
    pub fn new(
        listings: &'a [LineItem],
        loading: bool,
        handle_remove_item: &'a Callback<LineItemId>,
    ) -> Self {
        Self {
            listings,
            loading,
            handle_remove_item,
            selected: None,
            style: Style::default(),
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Ask the provider to remove the item at `index`
    ///
    /// Refused while a cart operation is in flight.
    pub fn remove(&self, index: usize) -> bool {
        if self.loading {
            return false;
        }
        match self.listings.get(index) {
            Some(item) => {
                tracing::info!("removing {} from the cart", item.sku);
                self.handle_remove_item.emit(item.id.clone());
                true
            }
            None => false,
        }
    }
}

impl Widget for ProductListing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);

        if self.listings.is_empty() {
            if !self.loading {
                Paragraph::new(EMPTY_CART_TEXT)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
            }
            return;
        }

        let loading = self.loading;
        let items: Vec<_> = self
            .listings
            .iter()
            .map(|item| {
                let widget = ProductItem::new(item).loading(loading);
                let height = widget.height();
                (widget, height)
            })
            .collect();
        let item_count = items.len();

        let builder = ListBuilder::new(move |context| {
            let (mut item, height) = items[context.index].clone();
            item.highlight = context.is_selected;
            (item, height)
        });

        let mut state = ListState::default();
        state.select(self.selected);

        let list = ListView::new(builder, item_count).style(self.style);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
