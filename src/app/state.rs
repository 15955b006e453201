//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the immutable
//! catalog, the current [`FilterState`] and [`SortKey`], the derived
//! [`Projection`], and the sidebar cursor.
//!
//! # Architecture
//!
//! Facet selections are replaced wholesale. Every replacement goes through
//! [`AppState::apply_filter`] or [`AppState::apply_sort`], which recompute the
//! projection from scratch. View models are computed on demand from state
//! snapshots.
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::AppState;
//! use zcatalog::catalog::{EmbeddedCatalog, ProductSource};
//! use zcatalog::ui::Theme;
//!
//! let products = EmbeddedCatalog.load()?;
//! let state = AppState::new(products, Theme::default());
//! assert_eq!(state.projection.items.len(), 9);
//!
//! let viewmodel = state.compute_viewmodel(40, 120);
//! assert_eq!(viewmodel.cards.len(), 9);
//! # Ok::<(), zcatalog::CatalogError>(())
//! ```

use super::modes::InputMode;
use super::sidebar::{FacetRow, FacetSection};
use crate::catalog::{project, Projection};
use crate::domain::{FilterState, Product, SortKey};
use crate::ui::helpers::truncate;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FacetOption, FooterInfo, HeaderInfo, Marker, SearchBarInfo, SidebarLine,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Catalog page heading.
const TITLE: &str = "Ecommerce Product Catalog";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The catalog, in source order. Never reordered.
    pub products: Vec<Product>,

    /// Current facet selections.
    pub filter: FilterState,

    /// Current result ordering.
    pub sort: SortKey,

    /// First page of the filtered, sorted catalog.
    ///
    /// Recomputed by `refresh()` whenever `filter` or `sort` is replaced.
    pub projection: Projection,

    /// Sidebar widget rows, derived from the facet enumerations.
    pub rows: Vec<FacetRow>,

    /// Index of the sidebar cursor within `rows`.
    pub cursor: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Why the catalog could not be loaded, if it could not.
    pub load_error: Option<String>,
}

impl AppState {
    /// Creates state for `products` with default facets and computes the
    /// first projection.
    #[must_use]
    pub fn new(products: Vec<Product>, theme: Theme) -> Self {
        let mut state = Self {
            products,
            filter: FilterState::default(),
            sort: SortKey::default(),
            projection: Projection::default(),
            rows: FacetRow::all(),
            cursor: 0,
            input_mode: InputMode::Normal,
            theme,
            load_error: None,
        };
        state.refresh();
        state
    }

    /// Records a catalog load failure for the empty state.
    #[must_use]
    pub fn with_load_error(mut self, error: impl Into<String>) -> Self {
        self.load_error = Some(error.into());
        self
    }

    /// Recomputes the projection from the catalog, filter and sort key.
    pub fn refresh(&mut self) {
        self.projection = project(&self.products, &self.filter, self.sort);
    }

    /// Replaces the filter and recomputes. Returns `false` if nothing changed.
    pub fn apply_filter(&mut self, filter: FilterState) -> bool {
        if filter == self.filter {
            return false;
        }
        tracing::debug!(filter = ?filter, "filter replaced");
        self.filter = filter;
        self.refresh();
        true
    }

    /// Replaces the sort key and recomputes. Returns `false` if nothing changed.
    pub fn apply_sort(&mut self, sort: SortKey) -> bool {
        if sort == self.sort {
            return false;
        }
        tracing::debug!(sort = sort.slug(), "sort replaced");
        self.sort = sort;
        self.refresh();
        true
    }

    /// Moves the sidebar cursor down, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.rows.len();
    }

    /// Moves the sidebar cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.rows.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Row under the sidebar cursor.
    #[must_use]
    pub fn cursor_row(&self) -> Option<FacetRow> {
        self.rows.get(self.cursor).copied()
    }

    /// Computes a renderable view model for a terminal of `rows` × `cols`.
    ///
    /// Card text is truncated to the card width derived from `cols`. Only the
    /// cards whose grid rows fit in `rows` are included; the header counts
    /// the rest as hidden.
    ///
    /// # Sidebar Windowing
    ///
    /// When the sidebar does not fit, a window of lines is centered on the
    /// cursor row and shifted back if it would run past the end.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let searching = self.input_mode == InputMode::Search;
        let (lines, cursor_line) = self.sidebar_lines();
        let available_rows = layout::body_rows(rows, searching);

        let mut visible_start = if lines.len() <= available_rows {
            0
        } else {
            cursor_line.saturating_sub(available_rows / 2)
        };
        let visible_end = (visible_start + available_rows).min(lines.len());
        if visible_end - visible_start < available_rows && lines.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let sidebar = lines[visible_start..visible_end].to_vec();

        let matcher = if self.filter.query.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let text_width = layout::card_text_width(cols);
        let cards: Vec<CardItem> = self
            .projection
            .items
            .iter()
            .take(layout::visible_cards(rows, searching))
            .map(|product| self.compute_card(product, text_width, matcher.as_ref()))
            .collect();

        UIViewModel {
            header: self.compute_header(cards.len()),
            sidebar,
            cards,
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
        }
    }

    /// Builds every sidebar line and returns it with the index of the cursor
    /// line.
    fn sidebar_lines(&self) -> (Vec<SidebarLine>, usize) {
        let mut lines = Vec::with_capacity(self.rows.len() + 5);
        let mut cursor_line = 0;
        let mut section = None;

        for (idx, row) in self.rows.iter().enumerate() {
            if section != Some(row.section()) {
                section = Some(row.section());
                lines.push(SidebarLine::Heading(self.section_heading(row.section())));
            }
            if idx == self.cursor {
                cursor_line = lines.len();
            }
            lines.push(SidebarLine::Option(self.compute_option(*row, idx == self.cursor)));
        }

        (lines, cursor_line)
    }

    fn section_heading(&self, section: FacetSection) -> String {
        match section {
            FacetSection::Category => "Category:".to_string(),
            FacetSection::Color => "Color:".to_string(),
            FacetSection::Price => format!(
                "Price Range: ${} - ${}",
                self.filter.price.lo(),
                self.filter.price.hi()
            ),
            FacetSection::Discount => "Discount:".to_string(),
            FacetSection::Sort => "Sort by:".to_string(),
        }
    }

    fn compute_option(&self, row: FacetRow, is_cursor: bool) -> FacetOption {
        let (label, marker, swatch) = match row {
            FacetRow::Category(category) => (
                category.label().to_string(),
                Marker::Checkbox(self.filter.categories.contains(&category)),
                None,
            ),
            FacetRow::Color(color) => (
                color.label().to_string(),
                Marker::Checkbox(self.filter.colors.contains(&color)),
                Some(color.swatch()),
            ),
            FacetRow::PriceMin => (format!("Min: ${}", self.filter.price.lo()), Marker::Slider, None),
            FacetRow::PriceMax => (format!("Max: ${}", self.filter.price.hi()), Marker::Slider, None),
            FacetRow::Discount(tier) => (
                tier.label().to_string(),
                Marker::Radio(self.filter.discount == tier),
                None,
            ),
            FacetRow::Sort(key) => (key.label().to_string(), Marker::Radio(self.sort == key), None),
        };

        FacetOption {
            label,
            marker,
            is_cursor,
            swatch,
        }
    }

    /// Builds a card, truncating name and image to `text_width` characters.
    ///
    /// Highlight ranges are clipped to the visible part of the name.
    fn compute_card(&self, product: &Product, text_width: usize, matcher: Option<&SkimMatcherV2>) -> CardItem {
        let name = truncate(&product.name, text_width);
        let visible = name
            .chars()
            .zip(product.name.chars())
            .take_while(|(shown, original)| shown == original)
            .count();

        let highlight_ranges = matcher
            .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&product.name, m))
            .into_iter()
            .filter(|&(start, _)| start < visible)
            .map(|(start, end)| (start, end.min(visible)))
            .collect();

        CardItem {
            name,
            price: format!("${}", product.price),
            discount: format!("{}%", product.discount),
            rating: format!("{}", product.rating),
            image: truncate(&product.image, text_width),
            highlight_ranges,
        }
    }

    /// Coalesces fuzzy match indices of every query token into sorted,
    /// non-overlapping `(start, end)` character ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let lower = text.to_lowercase();
        let mut indices: Vec<usize> = self
            .filter
            .query
            .split_whitespace()
            .filter_map(|token| matcher.fuzzy_indices(&lower, &token.to_lowercase()))
            .flat_map(|(_score, idx)| idx)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    /// `shown` is the number of cards that fit on screen; page entries that
    /// do not fit are reported as hidden.
    fn compute_header(&self, shown: usize) -> HeaderInfo {
        let hidden = self.projection.items.len().saturating_sub(shown);
        let mut summary = format!("Showing {shown} of {} products", self.projection.matched);
        if hidden > 0 {
            summary.push_str(&format!(" ({hidden} hidden)"));
        }
        summary.push_str(&format!(" · Sort: {}", self.sort.label()));
        if self.input_mode == InputMode::Normal && !self.filter.query.trim().is_empty() {
            summary.push_str(&format!(" · Search: \"{}\"", self.filter.query.trim()));
        }

        HeaderInfo {
            title: TITLE.to_string(),
            summary,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  space: select  h/l: adjust  s: sort  r: reset  /: search  q: quit"
            }
            InputMode::Search => "Type to filter by name  Enter: keep query  ESC: clear search",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.products.is_empty() {
            return Some(EmptyState {
                message: "No products loaded".to_string(),
                subtitle: self
                    .load_error
                    .clone()
                    .unwrap_or_else(|| "The catalog is empty".to_string()),
            });
        }
        if self.projection.items.is_empty() {
            return Some(EmptyState {
                message: "No products match the current filters".to_string(),
                subtitle: "Press 'r' to reset filters".to_string(),
            });
        }
        None
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (self.input_mode == InputMode::Search).then(|| SearchBarInfo {
            query: self.filter.query.clone(),
        })
    }
}
