//! Terminal seam
//!
//! The app talks to the terminal only through [`TuiLike`], so the same loop
//! runs against crossterm ([`real::RealTui`]) or an in-memory backend in
//! tests ([`test::TestTui`]).

pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Input and timer events fed to the storefront loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Init,
    Error,
    Closed,
    Tick,
    Render,
    Key(KeyEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    /// Take over the terminal and start producing events
    fn enter(&mut self) -> Result<()>;
    /// Give the terminal back
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    /// Next event, or `None` once the source is exhausted
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
