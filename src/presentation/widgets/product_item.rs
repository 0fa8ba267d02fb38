use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::{cart::LineItem, text::justify, text::truncate_to_width},
    presentation::widgets::price::Price,
};

/// One line item in the product listing
#[derive(Debug, Clone)]
pub struct ProductItem<'a> {
    item: &'a LineItem,
    pub highlight: bool,
    pub loading: bool,
}

impl<'a> ProductItem<'a> {
    pub fn new(item: &'a LineItem) -> Self {
        Self {
            item,
            highlight: false,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Rows taken in the list, including the blank separator row
    pub fn height(&self) -> u16 {
        if self.item.options.is_empty() {
            3
        } else {
            4
        }
    }

    fn options_text(&self) -> String {
        self.item
            .options
            .iter()
            .map(|option| format!("{}: {}", option.label, option.value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut name_style = Style::default().add_modifier(Modifier::BOLD);
        if self.highlight {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        let mut lines = vec![Line::styled(
            truncate_to_width(&self.item.name, width),
            name_style,
        )];
        if !self.item.options.is_empty() {
            lines.push(Line::styled(
                truncate_to_width(&self.options_text(), width),
                Style::default().fg(Color::Gray),
            ));
        }
        let price = Price::from(&self.item.price).text();
        lines.push(Line::raw(justify(
            &format!("Qty : {}", self.item.quantity),
            &price,
            width,
        )));
        lines
    }
}

impl Widget for ProductItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.loading {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        Paragraph::new(self.lines(area.width as usize))
            .style(style)
            .render(area, buf);
    }
}
