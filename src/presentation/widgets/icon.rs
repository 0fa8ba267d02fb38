use ratatui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSrc {
    Lock,
    Trash,
    ShoppingBag,
}

impl IconSrc {
    pub fn glyph(self) -> &'static str {
        match self {
            IconSrc::Lock => "🔒",
            IconSrc::Trash => "🗑",
            IconSrc::ShoppingBag => "🛍",
        }
    }
}

/// A glyph with its own style, placed inline with other spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    src: IconSrc,
    style: Style,
}

impl Icon {
    pub fn new(src: IconSrc) -> Self {
        Self {
            src,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn span(self) -> Span<'static> {
        Span::styled(self.src.glyph(), self.style)
    }
}

impl From<Icon> for Span<'static> {
    fn from(icon: Icon) -> Self {
        icon.span()
    }
}
