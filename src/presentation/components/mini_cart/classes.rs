//! Style overrides for the mini cart
//!
//! Every region of the panel has a recognized key. A parent (or the config
//! file) may override any of them; an override replaces the built-in style
//! for that key rather than patching it.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

use crate::presentation::config::StyleDef;

fn style_override<'de, D>(deserializer: D) -> Result<Option<Style>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StyleDef>::deserialize(deserializer).map(|def| def.map(Style::from))
}

/// Optional per-key overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiniCartClasses {
    #[serde(default, deserialize_with = "style_override")]
    pub root: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub root_open: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub contents: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub contents_open: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub header: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub body: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub footer: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub price: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub checkout_button: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub checkout_icon: Option<Style>,
    #[serde(default, deserialize_with = "style_override")]
    pub edit_cart_button: Option<Style>,
}

impl MiniCartClasses {
    /// Fill the keys `self` leaves unset from `fallback`
    pub fn or(self, fallback: MiniCartClasses) -> MiniCartClasses {
        MiniCartClasses {
            root: self.root.or(fallback.root),
            root_open: self.root_open.or(fallback.root_open),
            contents: self.contents.or(fallback.contents),
            contents_open: self.contents_open.or(fallback.contents_open),
            header: self.header.or(fallback.header),
            body: self.body.or(fallback.body),
            footer: self.footer.or(fallback.footer),
            price: self.price.or(fallback.price),
            checkout_button: self.checkout_button.or(fallback.checkout_button),
            checkout_icon: self.checkout_icon.or(fallback.checkout_icon),
            edit_cart_button: self.edit_cart_button.or(fallback.edit_cart_button),
        }
    }
}

/// Concrete styles for every key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedClasses {
    pub root: Style,
    pub root_open: Style,
    pub contents: Style,
    pub contents_open: Style,
    pub header: Style,
    pub body: Style,
    pub footer: Style,
    pub price: Style,
    pub checkout_button: Style,
    pub checkout_icon: Style,
    pub edit_cart_button: Style,
}

impl Default for ResolvedClasses {
    fn default() -> Self {
        Self {
            // closed styles land on page cells, so they leave them untouched
            root: Style::new(),
            root_open: Style::new().bg(Color::Black),
            contents: Style::new(),
            contents_open: Style::new().fg(Color::White).bg(Color::Black),
            header: Style::new().add_modifier(Modifier::BOLD),
            body: Style::new(),
            footer: Style::new(),
            price: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            checkout_button: Style::new()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            checkout_icon: Style::new().fg(Color::Yellow),
            edit_cart_button: Style::new().fg(Color::LightBlue),
        }
    }
}

impl ResolvedClasses {
    pub fn root_for(&self, is_open: bool) -> Style {
        if is_open {
            self.root_open
        } else {
            self.root
        }
    }

    pub fn contents_for(&self, is_open: bool) -> Style {
        if is_open {
            self.contents_open
        } else {
            self.contents
        }
    }
}

/// Resolve `overrides` against `defaults`
pub fn merge_classes(defaults: &ResolvedClasses, overrides: &MiniCartClasses) -> ResolvedClasses {
    ResolvedClasses {
        root: overrides.root.unwrap_or(defaults.root),
        root_open: overrides.root_open.unwrap_or(defaults.root_open),
        contents: overrides.contents.unwrap_or(defaults.contents),
        contents_open: overrides.contents_open.unwrap_or(defaults.contents_open),
        header: overrides.header.unwrap_or(defaults.header),
        body: overrides.body.unwrap_or(defaults.body),
        footer: overrides.footer.unwrap_or(defaults.footer),
        price: overrides.price.unwrap_or(defaults.price),
        checkout_button: overrides.checkout_button.unwrap_or(defaults.checkout_button),
        checkout_icon: overrides.checkout_icon.unwrap_or(defaults.checkout_icon),
        edit_cart_button: overrides.edit_cart_button.unwrap_or(defaults.edit_cart_button),
    }
}
