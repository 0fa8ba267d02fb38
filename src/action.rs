use serde::{Deserialize, Serialize};
use strum::Display;

/// Everything that flows through the app's action channel
///
/// Unit variants double as key binding targets in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),

    // Storefront
    ScrollUp,
    ScrollDown,
    AddToCart,

    // Mini cart
    ToggleMiniCart,
    SetMiniCartOpen(bool),
    FocusNext,
    FocusPrevious,
    Activate,
    RemoveItem,
    Close,
    Refresh,

    // Provider notifications
    CartChanged,
    Navigate(String),
    StatusMessage(String),
}
