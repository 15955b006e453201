//! Domain layer for the catalog plugin.
//!
//! Holds the product model, the facet selections a user can make, and the
//! crate error type. Nothing in here knows about Zellij or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`product`]: Product record with its category and color enumerations
//! - [`facets`]: Filter selections, discount tiers, price range, sort keys

pub mod error;
pub mod facets;
pub mod product;

pub use error::{CatalogError, Result};
pub use facets::{DiscountTier, FilterState, PriceRange, SortKey, PRICE_MAX, PRICE_MIN, PRICE_STEP};
pub use product::{Category, Color, Product};
