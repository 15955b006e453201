//! Empty state component renderer.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::layout::CARD_AREA_COL;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message in place of the card grid.
///
/// Shown when the catalog failed to load or is empty, and when no product
/// passes the current filters. The sidebar stays visible so the user can
/// widen the filters.
///
/// # Layout
///
/// ```text
/// [sidebar] │ [1 blank line]
/// [sidebar] │ [padding] MESSAGE [padding]
/// [sidebar] │ [padding] subtitle [padding]
/// ```
///
/// Both lines are centered within the card area.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let area = cols.saturating_sub(CARD_AREA_COL - 1);

    let message = truncate(&empty.message, area);
    let msg_len = display_len(&message);
    let msg_padding = area.saturating_sub(msg_len) / 2;

    position_cursor(row + 1, CARD_AREA_COL);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, area);
    let sub_len = display_len(&subtitle);
    let sub_padding = area.saturating_sub(sub_len) / 2;

    position_cursor(row + 2, CARD_AREA_COL);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", Theme::reset());
}
