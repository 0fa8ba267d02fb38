use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::core::callback::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

/// A single-line, keyboard-activated button
#[derive(Debug, Clone)]
pub struct Button<'a> {
    content: Line<'a>,
    priority: Priority,
    style: Style,
    disabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            priority: Priority::default(),
            style: Style::default(),
            disabled: false,
            focused: false,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Invoke `on_click` once, unless the button is disabled
    pub fn click(&self, on_click: &Callback<()>) -> bool {
        if self.disabled {
            tracing::debug!("ignored click on disabled button");
            return false;
        }
        on_click.emit(());
        true
    }

    pub fn effective_style(&self) -> Style {
        let style = match self.priority {
            Priority::High => self.style.add_modifier(Modifier::BOLD),
            Priority::Normal | Priority::Low => self.style,
        };
        if self.disabled {
            style.fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.effective_style();
        buf.set_style(area, style);

        let row = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: 1,
            ..area
        };
        Paragraph::new(self.content)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use pretty_assertions::assert_eq;

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, Callback<()>) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        let callback = Callback::new(move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    #[test]
    fn test_click_enabled_fires_once() {
        let (count, on_click) = counter();
        let button = Button::new("OK");
        assert!(button.click(&on_click));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_click_disabled_does_nothing() {
        let (count, on_click) = counter();
        let button = Button::new("OK").disabled(true);
        assert!(!button.click(&on_click));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_effective_style() {
        let base = Style::default().fg(Color::White);
        assert_eq!(Button::new("x").style(base).effective_style(), base);
        assert!(Button::new("x")
            .priority(Priority::High)
            .effective_style()
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(Button::new("x")
            .focused(true)
            .effective_style()
            .add_modifier
            .contains(Modifier::REVERSED));

        let disabled = Button::new("x").style(base).focused(true).disabled(true);
        let style = disabled.effective_style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_centers_label() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        Button::new("OK").render(area, &mut buf);

        let line: String = (0..10).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(line, "    OK    ");
    }

    #[test]
    fn test_render_applies_style_to_whole_area() {
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        Button::new("A")
            .style(Style::default().bg(Color::Blue))
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Blue);
        assert_eq!(buf[(5, 0)].bg, Color::Blue);
    }
}
