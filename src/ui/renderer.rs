//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the application
//! state, then hand it to the layout matching the current mode.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a terminal of `rows` × `cols`.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; Zellij hands the plugin a blank pane on every render.
///
/// # Example
///
/// ```rust
/// use zcatalog::app::AppState;
/// use zcatalog::ui::{render, Theme};
///
/// let state = AppState::new(vec![], Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Chooses the search or normal layout. The empty state is drawn by either
/// in place of the card grid.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
