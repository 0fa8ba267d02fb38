//! Key bindings
//!
//! The config file maps key strings such as `"<q>"`, `"<Ctrl-c>"` or
//! `"<Shift-Tab>"` to [`Action`]s.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer};

use crate::action::Action;

#[derive(Clone, Debug, Default, Deref, DerefMut, PartialEq)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<&Action> {
        // terminals report Shift+Tab as BackTab with or without the modifier
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.0.get(&normalized).or_else(|| match key.code {
            KeyCode::BackTab => self.0.get(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            _ => None,
        })
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| parse_key_event(&key_str).map(|key| (key, action)))
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(de::Error::custom)?;
        Ok(KeyBindings(keybindings))
    }
}

/// Parse `"<Ctrl-c>"`-style notation into a [`KeyEvent`]
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Key must be wrapped in <>: {raw:?}"))?;

    let (modifiers, code) = extract_modifiers(inner);
    let code = parse_key_code(code).ok_or_else(|| format!("Unable to parse key: {raw:?}"))?;

    let modifiers = match code {
        // an uppercase letter implies shift
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers | KeyModifiers::SHIFT,
        KeyCode::BackTab => modifiers | KeyModifiers::SHIFT,
        _ => modifiers,
    };
    Ok(KeyEvent::new(code, modifiers))
}

fn extract_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lowered = current.to_ascii_lowercase();
        if lowered.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lowered.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lowered.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (modifiers, current)
}

fn parse_key_code(raw: &str) -> Option<KeyCode> {
    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => return None,
    };
    Some(code)
}
