use crate::{
    core::talon::MiniCartTalon,
    domain::cart::{CartError, Money},
};

/// What the mini cart shows for a provider snapshot
///
/// Precedence: an error wins over loading, loading wins over ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderState<'a> {
    Error(&'a CartError),
    Loading,
    Ready {
        total_quantity: u32,
        sub_total: &'a Money,
    },
}

impl<'a> RenderState<'a> {
    pub fn from_talon(talon: &'a MiniCartTalon) -> Self {
        match (&talon.error, talon.loading, &talon.sub_total) {
            (Some(error), _, _) => RenderState::Error(error),
            (None, true, _) | (None, false, None) => RenderState::Loading,
            (None, false, Some(sub_total)) => RenderState::Ready {
                total_quantity: talon.total_quantity,
                sub_total,
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderState::Error(_))
    }
}
