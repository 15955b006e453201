//! Header component renderer.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and the result summary below it.
///
/// Both lines are centered and padded to the full terminal width. The summary
/// is cut with an ellipsis on narrow terminals.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
///                 Ecommerce Product Catalog
///     Showing 9 of 12 products · Sort: Price (Low to High)
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_len(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    let summary = truncate(&header.summary, cols);
    let summary_len = display_len(&summary);
    let padding = cols.saturating_sub(summary_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{summary}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + summary_len)));
    print!("{}", Theme::reset());

    row + 2
}
