//! Style strings
//!
//! Styles in the config file are written as `"[modifiers] [fg] [on bg]"`,
//! e.g. `"bold white on blue"`, `"dim"`, `"on rgb123"`.

use ratatui::style::{Color, Modifier, Style};
use serde::{de, Deserialize, Deserializer};

/// A [`Style`] that deserializes from a style string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDef(pub Style);

impl From<StyleDef> for Style {
    fn from(value: StyleDef) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for StyleDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_style(&s).map(StyleDef).map_err(de::Error::custom)
    }
}

pub fn parse_style(line: &str) -> Result<Style, String> {
    let lowered = line.to_lowercase();
    let (foreground, background) = match lowered.split_once("on ") {
        Some((fg, bg)) if fg.is_empty() || fg.ends_with(' ') => (fg.trim(), Some(bg.trim())),
        _ => (lowered.trim(), None),
    };

    let mut style = Style::default();
    let mut fg_words = Vec::new();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => fg_words.push(word),
        }
    }

    match fg_words.as_slice() {
        [] => {}
        [color] => style = style.fg(parse_color(color)?),
        _ => return Err(format!("Unexpected words in style: {line:?}")),
    }
    if let Some(bg) = background {
        style = style.bg(parse_color(bg)?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    let modifier = match word {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "slow_blink" | "blink" => Modifier::SLOW_BLINK,
        "rapid_blink" => Modifier::RAPID_BLINK,
        "reversed" | "reverse" => Modifier::REVERSED,
        "hidden" => Modifier::HIDDEN,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        _ => return None,
    };
    Some(modifier)
}

fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let color = match s {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => return parse_indexed_color(s),
    };
    Ok(color)
}

fn parse_indexed_color(s: &str) -> Result<Color, String> {
    if let Some(index) = s.strip_prefix("color") {
        return index
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| format!("Invalid indexed color: {s:?}"));
    }
    if let Some(level) = s.strip_prefix("gray") {
        // 24 gray levels live at indices 232..=255
        return match level.parse::<u8>() {
            Ok(level) if level < 24 => Ok(Color::Indexed(232 + level)),
            _ => Err(format!("Invalid gray level: {s:?}")),
        };
    }
    if let Some(rgb) = s.strip_prefix("rgb") {
        // each digit 0..=5 on the 6x6x6 color cube starting at 16
        let digits: Vec<u8> = rgb
            .chars()
            .filter_map(|c| c.to_digit(6).map(|d| d as u8))
            .collect();
        return match digits.as_slice() {
            [r, g, b] if rgb.len() == 3 => Ok(Color::Indexed(16 + 36 * r + 6 * g + b)),
            _ => Err(format!("Invalid rgb color: {s:?}")),
        };
    }
    Err(format!("Unknown color: {s:?}"))
}
