use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::{action::Action, infrastructure::tui::Frame, presentation::components::Component};

pub const KEY_HINTS: &str = "a add · c cart · tab focus · enter select · d remove · q quit";

/// Bottom line: the latest message and a key hint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn set(&mut self, message: String, is_error: bool) {
        self.message = Some(message);
        self.is_error = is_error;
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::StatusMessage(message) => self.set(message, false),
            Action::Navigate(path) => self.set(format!("Navigated to {path}"), false),
            Action::Error(message) => self.set(message, true),
            _ => {}
        };
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [_, hints, message] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        f.render_widget(Clear, hints);
        f.render_widget(Clear, message);

        let hint_line = Paragraph::new(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::Gray).italic(),
        ))
        .style(Style::default().bg(Color::Black));
        f.render_widget(hint_line, hints);

        let text = match (&self.message, self.is_error) {
            (Some(m), true) => Span::styled(format!("[ERR] {m}"), Style::default().fg(Color::Red)),
            (Some(m), false) => Span::raw(m.clone()),
            (None, _) => Span::raw(""),
        };
        f.render_widget(Paragraph::new(text), message);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn line(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_update_keeps_latest_message() {
        let mut bar = StatusBar::default();
        bar.update(Action::StatusMessage("Added Tiki Mug to cart".into()))
            .expect("update");
        assert_eq!(bar.message(), Some("Added Tiki Mug to cart"));

        bar.update(Action::Navigate("/checkout".into())).expect("update");
        assert_eq!(bar.message(), Some("Navigated to /checkout"));
        assert!(!bar.is_error());

        bar.update(Action::Error("boom".into())).expect("update");
        assert_eq!(bar.message(), Some("boom"));
        assert!(bar.is_error());
    }

    #[test]
    fn test_other_actions_are_ignored() {
        let mut bar = StatusBar::default();
        assert_eq!(bar.update(Action::Tick).expect("update"), None);
        assert_eq!(bar, StatusBar::default());
    }

    #[test]
    fn test_draw_renders_bottom_two_lines() {
        let mut bar = StatusBar::default();
        bar.update(Action::Error("offline".into())).expect("update");

        let mut terminal = Terminal::new(TestBackend::new(80, 4)).expect("terminal");
        terminal
            .draw(|f| bar.draw(f, f.area()).expect("draw"))
            .expect("draw");
        let buffer = terminal.backend().buffer();

        assert!(line(buffer, 2).starts_with("a add"));
        assert!(line(buffer, 3).starts_with("[ERR] offline"));
        assert_eq!(line(buffer, 0).trim(), "");
    }
}
