//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready strings and flags only; all
//! filtering and sorting has already happened.
//!
//! # Example
//!
//! ```rust
//! use zcatalog::ui::viewmodel::{CardItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Ecommerce Product Catalog".to_string(),
//!         summary: "Showing 1 of 1 products".to_string(),
//!     },
//!     sidebar: vec![],
//!     cards: vec![CardItem {
//!         name: "Laptop".to_string(),
//!         price: "$999".to_string(),
//!         discount: "20%".to_string(),
//!         rating: "4.6".to_string(),
//!         image: "laptop.jpg".to_string(),
//!         highlight_ranges: vec![],
//!     }],
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//! };
//! assert_eq!(vm.cards.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title and result summary.
    pub header: HeaderInfo,

    /// Visible sidebar lines (windowed around the cursor).
    pub sidebar: Vec<SidebarLine>,

    /// Product cards, at most one page, in sorted order.
    pub cards: Vec<CardItem>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Replaces the card grid when nothing can be shown.
    pub empty_state: Option<EmptyState>,

    /// Present while the user is typing a name query.
    pub search_bar: Option<SearchBarInfo>,
}

/// One line of the facet sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarLine {
    /// Section heading such as `Category:` or `Price Range: $0 - $1000`.
    Heading(String),
    /// Selectable widget row.
    Option(FacetOption),
}

/// Widget marker drawn in front of an option label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `[x]` / `[ ]`
    Checkbox(bool),
    /// `(•)` / `( )`
    Radio(bool),
    /// `◀ ▶`, adjusted with h/l.
    Slider,
}

/// Display information for a selectable sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub label: String,
    pub marker: Marker,
    /// Whether the sidebar cursor is on this row.
    pub is_cursor: bool,
    /// Hex color for the swatch drawn before color labels.
    pub swatch: Option<&'static str>,
}

/// Display information for one product card.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub name: String,
    /// Formatted price, e.g. `$199`.
    pub price: String,
    /// Formatted discount, e.g. `15%`.
    pub discount: String,
    pub rating: String,
    /// Image reference, shown as text.
    pub image: String,

    /// Character ranges of `name` matched by the name query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Result counts and active sort, e.g. `Showing 9 of 12 products · Sort: Price (Low to High)`.
    pub summary: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No products match the current filters").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}
