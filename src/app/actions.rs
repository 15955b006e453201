//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState). Anything
//! that has to reach Zellij itself is returned as an [`Action`] and carried
//! out by the shim in `main.rs`.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,
}
