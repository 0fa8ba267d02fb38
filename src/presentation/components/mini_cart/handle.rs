use std::sync::{Arc, Mutex, PoisonError};

use ratatui::layout::Rect;

/// Accessor to the rendered contents node of a mini cart
///
/// Parents keep a clone and query it after a draw, e.g. to measure the
/// panel. It is empty before the first render and while the error view is
/// shown.
#[derive(Debug, Clone, Default)]
pub struct MiniCartHandle {
    area: Arc<Mutex<Option<Rect>>>,
}

impl MiniCartHandle {
    pub fn area(&self) -> Option<Rect> {
        *self.area.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn height(&self) -> Option<u16> {
        self.area().map(|area| area.height)
    }

    pub fn width(&self) -> Option<u16> {
        self.area().map(|area| area.width)
    }

    pub(crate) fn set(&self, area: Option<Rect>) {
        *self.area.lock().unwrap_or_else(PoisonError::into_inner) = area;
    }
}
