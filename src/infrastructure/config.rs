use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::{components::mini_cart::MiniCartClasses, config::keybindings::KeyBindings},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Style overrides per component
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Styles {
    #[serde(default)]
    pub mini_cart: MiniCartClasses,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub panel_width: Option<u16>,
}

impl Config {
    /// Built-in defaults layered under the files in the user's config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_data_dir(), &utils::get_config_dir())
    }

    /// The embedded `.config/config.json5`
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load(data_dir: &Path, config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!("No user configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(*key)
                .or_insert_with(|| action.clone());
        }
        cfg.styles.mini_cart = cfg.styles.mini_cart.or(default_config.styles.mini_cart);
        if cfg.panel_width.is_none() {
            cfg.panel_width = default_config.panel_width;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Modifier, Style};

    use super::*;
    use crate::action::Action;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("minicart-config-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_defaults_parse() {
        let cfg = Config::defaults().expect("embedded config is valid");
        assert_eq!(cfg.panel_width, Some(44));
        assert_eq!(cfg.styles, Styles::default());
        assert_eq!(
            cfg.keybindings
                .get(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty())),
            Some(&Action::ToggleMiniCart)
        );
        assert_eq!(
            cfg.keybindings
                .get(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_load_without_user_files_matches_defaults() {
        let dir = scratch_dir("empty");
        let cfg = Config::load(&dir, &dir).expect("config loads");
        let defaults = Config::defaults().expect("defaults");

        assert_eq!(cfg.keybindings, defaults.keybindings);
        assert_eq!(cfg.panel_width, Some(44));
        assert_eq!(cfg.config._config_dir, dir);
    }

    #[test]
    fn test_user_file_overrides_styles_and_keys() {
        let dir = scratch_dir("user");
        fs::write(
            dir.join("config.json5"),
            r#"{
              "keybindings": { "<x>": "ToggleMiniCart" },
              "styles": { "mini_cart": { "price": "bold yellow", "root_open": "on blue" } },
              "panel_width": 50,
            }"#,
        )
        .expect("write config");

        let cfg = Config::load(&dir, &dir).expect("config loads");

        assert_eq!(cfg.panel_width, Some(50));
        assert_eq!(
            cfg.keybindings
                .get(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty())),
            Some(&Action::ToggleMiniCart)
        );
        // defaults are still merged in
        assert_eq!(
            cfg.keybindings
                .get(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.styles.mini_cart.price,
            Some(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        );
        assert_eq!(cfg.styles.mini_cart.root_open, Some(Style::default().bg(Color::Blue)));
        assert_eq!(cfg.styles.mini_cart.header, None);
    }

    #[test]
    fn test_unknown_style_key_is_rejected() {
        let dir = scratch_dir("unknown");
        fs::write(
            dir.join("config.json5"),
            r#"{ "styles": { "mini_cart": { "sidebar": "red" } } }"#,
        )
        .expect("write config");

        assert!(Config::load(&dir, &dir).is_err());
    }
}
