//! Catalog layer: where products come from and how they are narrowed down.
//!
//! # Modules
//!
//! - `source`: [`ProductSource`] trait and the embedded sample catalog
//! - `json`: JSON file product source
//! - `filter`: facet predicate ([`matches`], [`filter_products`])
//! - `ranking`: sort comparators ([`comparator`], [`sort_products`])
//! - `projection`: filter → sort → first page ([`project`])

pub mod filter;
pub mod json;
pub mod projection;
pub mod ranking;
pub mod source;

pub use filter::{filter_products, matches, ProductFilter};
pub use json::JsonCatalog;
pub use projection::{project, Projection, PAGE_SIZE};
pub use ranking::{comparator, sort_products, Comparator};
pub use source::{EmbeddedCatalog, ProductSource};
