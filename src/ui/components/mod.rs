//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title and result summary
//! - [`footer`]: Keybinding hints
//! - [`search`]: Name query input box
//! - [`sidebar`]: Facet widgets (checkboxes, sliders, radio buttons)
//! - [`cards`]: Product card grid
//! - [`empty`]: Message shown in place of the card grid
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + Body + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Body + Footer
//!
//! where the body is the sidebar beside either the card grid or the empty
//! state.

mod cards;
mod empty;
mod footer;
mod header;
mod search;
mod sidebar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use cards::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use sidebar::render_sidebar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the sidebar and, beside it, the cards or the empty state.
fn render_body(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize, last_row: usize) {
    render_sidebar(row, &vm.sidebar, theme, last_row);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(row, empty, theme, cols);
    } else {
        render_cards(row, &vm.cards, theme, cols, last_row);
    }
}

/// Draws the bottom border and the footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1).max(1);
    let border_row = footer_start.saturating_sub(1).max(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the normal mode layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header title]
/// [Header summary]
/// [Border]
/// [Sidebar] │ [Cards or empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_body(current_row, vm, theme, cols, rows.saturating_sub(2));

    render_bottom(vm, theme, cols, rows);
}

/// Renders the search mode layout: the normal layout with the 3-line search
/// box between the header and the body.
pub fn render_search_mode(vm: &UIViewModel, search: &SearchBarInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_body(current_row, vm, theme, cols, rows.saturating_sub(2));

    render_bottom(vm, theme, cols, rows);
}
