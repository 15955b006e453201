//! Shared rendering utilities.
//!
//! Everything here works on character indices rather than byte indices so
//! product names with multi-byte characters are cut and highlighted safely.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// Widths below 4 leave no room for the ellipsis, so the text is cut bare.
///
/// # Example
///
/// ```rust
/// use zcatalog::ui::helpers::truncate;
///
/// assert_eq!(truncate("Wireless Headphones", 8), "Wirel...");
/// assert_eq!(truncate("Laptop", 8), "Laptop");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max < 4 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Renders text with highlighted character ranges for name matches.
///
/// Ranges are `(start, end)` character indices, sorted and non-overlapping.
/// Ranges past the end of `text` are ignored. After each highlight the
/// `restore` sequence is printed so the surrounding style continues.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal: String = chars[current_pos..start].iter().collect();
        print!("{normal}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}
