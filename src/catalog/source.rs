//! Product source abstraction.
//!
//! The catalog does not own its data: products come from a [`ProductSource`]
//! and are loaded once when the plugin starts. The trait is kept to the single
//! operation the application needs.

use crate::catalog::json;
use crate::domain::error::Result;
use crate::domain::Product;

/// Sample catalog compiled into the plugin.
const EMBEDDED_CATALOG: &str = include_str!("../../data/products.json");

/// Supplier of the static product list.
///
/// # Implementations
///
/// - [`EmbeddedCatalog`]: the sample catalog shipped with the plugin
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): a JSON document on disk
pub trait ProductSource {
    /// Returns every product, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document cannot be read or parsed.
    fn load(&self) -> Result<Vec<Product>>;

    /// Short human-readable description used in logs and empty states.
    fn describe(&self) -> String;
}

/// The sample catalog bundled at compile time.
///
/// # Examples
///
/// ```
/// use zcatalog::catalog::{EmbeddedCatalog, ProductSource};
///
/// let products = EmbeddedCatalog.load()?;
/// assert_eq!(products.len(), 12);
/// # Ok::<(), zcatalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl ProductSource for EmbeddedCatalog {
    fn load(&self) -> Result<Vec<Product>> {
        let _span = tracing::debug_span!("embedded_catalog_load").entered();
        json::parse_document(EMBEDDED_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_has_unique_ids() {
        let products = EmbeddedCatalog.load().unwrap();
        let ids: HashSet<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn embedded_catalog_is_well_formed() {
        for product in EmbeddedCatalog.load().unwrap() {
            assert!(product.price >= 0.0, "{} has a negative price", product.name);
            assert!((0.0..=100.0).contains(&product.discount), "{} discount out of range", product.name);
            assert!(!product.image.is_empty());
        }
    }
}
