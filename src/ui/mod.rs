//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, sidebar, cards, search bar, footer
//! - [`layout`]: Sidebar and card grid geometry
//! - [`helpers`]: Cursor positioning, truncation, match highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, EmptyState, FacetOption, FooterInfo, HeaderInfo, Marker, SearchBarInfo, SidebarLine,
    UIViewModel,
};
