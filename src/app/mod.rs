//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → new FilterState / SortKey
//!                                        ↓
//!                     AppState::refresh (filter → sort → first page)
//!                                        ↓
//!                     compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode
//! - [`sidebar`]: Facet widget rows
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod sidebar;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use sidebar::{FacetRow, FacetSection};
pub use state::AppState;
