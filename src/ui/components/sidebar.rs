//! Facet sidebar renderer.
//!
//! Draws the filter widgets down the left edge: section headings, checkbox
//! rows for categories and colors, the two price sliders, and radio rows for
//! discount tiers and sort keys.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::layout::SIDEBAR_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FacetOption, Marker, SidebarLine};

/// Renders sidebar lines from `row` down and a vertical separator to the
/// right of them reaching `last_row`.
///
/// # Returns
///
/// The next available row position (row + number of lines)
///
/// # Layout
///
/// ```text
/// Category:                    │
///   [x] Electronics            │
/// Color:                       │
///   [ ] ■ Black                │
/// Price Range: $0 - $1000      │
///   ◀ Min: $0 ▶                │
/// Discount:                    │
///   (•) All                    │
/// ```
pub fn render_sidebar(row: usize, lines: &[SidebarLine], theme: &Theme, last_row: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        position_cursor(current_row, 1);
        match line {
            SidebarLine::Heading(text) => render_heading(text, theme),
            SidebarLine::Option(option) => render_option(option, theme),
        }
        current_row += 1;
    }

    print!("{}", Theme::fg(&theme.colors.border));
    for separator_row in row..=last_row {
        position_cursor(separator_row, SIDEBAR_WIDTH + 1);
        print!("│");
    }
    print!("{}", Theme::reset());

    current_row
}

fn render_heading(text: &str, theme: &Theme) {
    let text = truncate(text, SIDEBAR_WIDTH);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{text}");
    print!("{}", " ".repeat(SIDEBAR_WIDTH.saturating_sub(display_len(&text))));
    print!("{}", Theme::reset());
}

/// Renders one widget row. The cursor row is drawn in selection colors across
/// the full sidebar width.
fn render_option(option: &FacetOption, theme: &Theme) {
    let base = if option.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    let (marker, checked) = match option.marker {
        Marker::Checkbox(true) => ("[x]", true),
        Marker::Checkbox(false) => ("[ ]", false),
        Marker::Radio(true) => ("(•)", true),
        Marker::Radio(false) => ("( )", false),
        Marker::Slider => ("◀", false),
    };

    print!("  ");
    if checked && !option.is_cursor {
        print!("{}{marker}{base}", Theme::fg(&theme.colors.checked_fg));
    } else {
        print!("{marker}");
    }
    print!(" ");
    let mut used = 3 + display_len(marker);

    if let Some(swatch) = option.swatch {
        print!("{}■{base} ", Theme::fg(swatch));
        used += 2;
    }

    let suffix = if option.marker == Marker::Slider { " ▶" } else { "" };
    let room = SIDEBAR_WIDTH.saturating_sub(used + display_len(suffix));
    let label = truncate(&option.label, room);
    print!("{label}{suffix}");
    used += display_len(&label) + display_len(suffix);

    print!("{}", " ".repeat(SIDEBAR_WIDTH.saturating_sub(used)));
    print!("{}", Theme::reset());
}
