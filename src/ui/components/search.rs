//! Search bar component renderer.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the name query input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Name: leather_   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// When the query is longer than the box, its tail is shown so the character
/// being typed stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " Name: ";
    let room = inner_width.saturating_sub(prefix.len() + 1);
    let query_len = display_len(&search.query);
    let query: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let search_text = truncate(&format!("{prefix}{query}_"), inner_width);
    let padding = inner_width.saturating_sub(display_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
