//! Product card grid renderer.
//!
//! Cards are laid out left to right, [`CARD_COLUMNS`] per row, to the right of
//! the sidebar. Each card is a bordered box:
//!
//! ```text
//! ┌───────────────────────┐
//! │ Wireless Headphones   │
//! │ Price: $199           │
//! │ Discount: 15%         │
//! │ Rating: 4.5           │
//! │ images/headphones.jpg │
//! └───────────────────────┘
//! ```

use crate::ui::helpers::{self, display_len, position_cursor, truncate};
use crate::ui::layout::{card_width, CARD_AREA_COL, CARD_COLUMNS, CARD_GAP, CARD_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Renders cards starting at `row`. Grid rows that would extend past
/// `last_row` are not drawn.
///
/// # Returns
///
/// The next available row position below the last grid row drawn.
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize, last_row: usize) -> usize {
    let width = card_width(cols);
    let mut current_row = row;
    let mut drawn = 0;

    for grid_row in cards.chunks(CARD_COLUMNS) {
        if current_row + CARD_HEIGHT - 1 > last_row {
            tracing::trace!(hidden = cards.len() - drawn, "card grid clipped");
            break;
        }
        drawn += grid_row.len();
        for (idx, card) in grid_row.iter().enumerate() {
            let col = CARD_AREA_COL + idx * (width + CARD_GAP);
            render_card(current_row, col, width, card, theme);
        }
        current_row += CARD_HEIGHT;
    }

    current_row
}

fn render_card(row: usize, col: usize, width: usize, card: &CardItem, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let text_width = width.saturating_sub(4);
    let border = Theme::fg(&theme.colors.card_border);

    position_cursor(row, col);
    print!("{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    position_cursor(row + 1, col);
    print!("{border}│{} ", Theme::reset());
    let name_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    print!("{name_style}");
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, &name_style);
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(text_width.saturating_sub(display_len(&card.name))));
    print!(" {border}│{}", Theme::reset());

    let details = [
        (format!("Price: {}", card.price), &theme.colors.price_fg),
        (format!("Discount: {}", card.discount), &theme.colors.text_normal),
        (format!("Rating: {}", card.rating), &theme.colors.text_normal),
        (card.image.clone(), &theme.colors.text_dim),
    ];
    for (offset, (text, color)) in details.iter().enumerate() {
        let text = truncate(text, text_width);
        position_cursor(row + 2 + offset, col);
        print!("{border}│{} ", Theme::reset());
        print!("{}{text}{}", Theme::fg(color), Theme::reset());
        print!("{}", " ".repeat(text_width.saturating_sub(display_len(&text))));
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(row + CARD_HEIGHT - 1, col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
