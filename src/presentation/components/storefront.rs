//! Storefront page
//!
//! The catalog behind the mini cart. It stops reacting to scroll and add
//! actions while the page scroll lock is held by an open overlay.

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    action::Action,
    core::callback::Callback,
    domain::catalog::CatalogProduct,
    infrastructure::{scroll_lock::ScrollLock, tui::Frame},
    presentation::{components::Component, widgets::Price},
};

pub struct Storefront {
    catalog: Vec<CatalogProduct>,
    selected: usize,
    scroll_lock: ScrollLock,
    add_to_cart: Callback<CatalogProduct>,
}

impl Storefront {
    pub fn new(
        catalog: Vec<CatalogProduct>,
        scroll_lock: ScrollLock,
        add_to_cart: Callback<CatalogProduct>,
    ) -> Self {
        Self {
            catalog,
            selected: 0,
            scroll_lock,
            add_to_cart,
        }
    }

    pub fn selected(&self) -> Option<&CatalogProduct> {
        self.catalog.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    fn row(product: &CatalogProduct, highlight: bool) -> Paragraph<'static> {
        let mut name = Line::from(product.name.clone());
        if highlight {
            name = name.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        let mut detail = vec![Price::from(&product.price)
            .style(Style::default().fg(Color::Green))
            .span()];
        for option in &product.options {
            detail.push(Span::styled(
                format!("  {}: {}", option.label, option.value),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(vec![name, Line::from(detail)])
    }
}

impl Component for Storefront {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if self.scroll_lock.is_locked() {
            return Ok(None);
        }
        match action {
            Action::ScrollDown => {
                self.selected = (self.selected + 1).min(self.catalog.len().saturating_sub(1));
                Ok(Some(Action::Render))
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                Ok(Some(Action::Render))
            }
            Action::AddToCart => {
                if let Some(product) = self.selected() {
                    self.add_to_cart.emit(product.clone());
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [page, _status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);
        let block = Block::bordered().title(" Catalog ");

        let rows: Vec<_> = self
            .catalog
            .iter()
            .map(|product| (Self::row(product, false), Self::row(product, true)))
            .collect();
        let item_count = rows.len();
        let builder = ListBuilder::new(move |context| {
            let (plain, highlighted) = &rows[context.index];
            let row = if context.is_selected {
                highlighted.clone()
            } else {
                plain.clone()
            };
            (row, 3)
        });

        let mut state = ListState::default();
        state.select(Some(self.selected).filter(|_| item_count > 0));
        let list = ListView::new(builder, item_count).block(block);
        f.render_stateful_widget(list, page, &mut state);

        Ok(())
    }
}
