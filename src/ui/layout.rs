//! Screen geometry shared by the view model and the components.
//!
//! ```text
//! col 1                 SIDEBAR_WIDTH │ CARD_AREA_COL
//! ┌ facet sidebar ┐                   │ ┌ card ┐ ┌ card ┐ ┌ card ┐
//! │               │                   │ └──────┘ └──────┘ └──────┘
//! ```

/// Width of the facet sidebar in columns.
pub const SIDEBAR_WIDTH: usize = 30;

/// First column of the card grid (after the sidebar and its separator).
pub const CARD_AREA_COL: usize = SIDEBAR_WIDTH + 2;

/// Cards per grid row.
pub const CARD_COLUMNS: usize = 3;

/// Blank columns between neighbouring cards.
pub const CARD_GAP: usize = 1;

/// Card height including borders: name, price, discount, rating, image.
pub const CARD_HEIGHT: usize = 7;

pub const MIN_CARD_WIDTH: usize = 12;

/// First body row: blank line, two header lines and the top border come
/// before it.
pub const BODY_TOP: usize = 5;

pub const SEARCH_BAR_HEIGHT: usize = 3;

/// Rows below the body: bottom border and footer.
const FOOTER_ROWS: usize = 2;

/// Rows available to the sidebar and the card grid.
#[must_use]
pub const fn body_rows(rows: usize, searching: bool) -> usize {
    let top = if searching {
        BODY_TOP + SEARCH_BAR_HEIGHT
    } else {
        BODY_TOP
    };
    rows.saturating_sub(top - 1 + FOOTER_ROWS)
}

/// How many cards fit on screen: whole grid rows only.
#[must_use]
pub const fn visible_cards(rows: usize, searching: bool) -> usize {
    body_rows(rows, searching) / CARD_HEIGHT * CARD_COLUMNS
}

/// Outer width of one card for a terminal `cols` wide.
#[must_use]
pub fn card_width(cols: usize) -> usize {
    let area = cols.saturating_sub(CARD_AREA_COL - 1);
    (area / CARD_COLUMNS)
        .saturating_sub(CARD_GAP)
        .max(MIN_CARD_WIDTH)
}

/// Characters of text that fit inside a card: borders plus one space of
/// padding on each side.
#[must_use]
pub fn card_text_width(cols: usize) -> usize {
    card_width(cols).saturating_sub(4)
}
