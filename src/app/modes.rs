//! Input mode state for the application.
//!
//! - **Normal**: keys move the sidebar cursor and operate facet widgets
//! - **Search**: keys edit the name query

/// Current input handling mode.
///
/// Determines how keys are interpreted and which footer hints are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Sidebar navigation and facet widgets.
    ///
    /// j/k move, space toggles, h/l adjust sliders or sort, s cycles sort,
    /// r resets filters, / searches, q quits.
    #[default]
    Normal,

    /// Typing into the name query.
    ///
    /// Printable keys append, backspace deletes, enter keeps the query and
    /// returns to normal mode, escape clears it.
    Search,
}
