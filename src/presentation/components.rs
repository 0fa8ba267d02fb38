//! UI components
//!
//! Components own their local UI state and render through ratatui. The
//! storefront shell talks to them through [`Component`]; the mini cart is
//! driven with explicit props by its parent.

pub mod mini_cart;
pub mod status_bar;
pub mod storefront;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, infrastructure::config::Config, infrastructure::tui::Frame};

pub trait Component {
    #[allow(unused_variables)]
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}
