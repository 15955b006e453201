//! Theme management and ANSI escape sequence generation.
//!
//! Themes are either built in (Catppuccin variants, compiled into the plugin)
//! or loaded from a TOML file named by the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! checked_fg = "#a6e3a1"
//! card_border = "#45475a"
//! price_fg = "#fab387"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcatalog::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Sidebar cursor row foreground.
    pub selection_fg: String,
    /// Sidebar cursor row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Dimmed text color (footer, headings, card details).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    pub search_bar_border: String,
    /// Name match highlight foreground.
    pub match_highlight_fg: String,
    /// Name match highlight background.
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Checked checkbox and selected radio marker color.
    pub checked_fg: String,

    /// Product card border color.
    pub card_border: String,
    /// Card price line color.
    pub price_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    ///
    /// ```rust
    /// use zcatalog::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Theme`] if the file cannot be read or is not a
    /// valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CatalogError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CatalogError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on
    /// malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::default().name, "catppuccin-mocha");
    }

    #[test]
    fn builtin_themes_color_cards() {
        for name in BUILTIN_THEMES {
            let colors = Theme::from_name(name).unwrap().colors;
            for hex in [&colors.card_border, &colors.price_fg] {
                assert!(hex.starts_with('#') && hex.len() == 7, "{name}: {hex}");
            }
        }
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("0000ff"), "\u{1b}[48;2;0;0;255m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file() {
        let builtin = include_str!("../../themes/catppuccin-frappe.toml");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(builtin.replace("catppuccin-frappe", "custom").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(CatalogError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(CatalogError::Theme(_))
        ));
    }
}
