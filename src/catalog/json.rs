//! JSON file product source.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! [ { "id": 1, "name": "Laptop", "category": "Electronics", "color": "Gray",
//!     "price": 999, "discount": 20, "rating": 4.6, "image": "laptop.jpg" } ]
//! ```
//!
//! or the versioned envelope:
//!
//! ```json
//! { "version": 1, "products": [ ... ] }
//! ```

use crate::catalog::source::ProductSource;
use crate::domain::error::{CatalogError, Result};
use crate::domain::Product;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// Newest envelope version this reader understands.
const SUPPORTED_VERSION: u64 = 1;

/// Parses a catalog document from a JSON string.
///
/// Products are decoded one at a time so a bad record is reported by its
/// position and the offending value.
///
/// # Errors
///
/// Returns [`CatalogError::Source`] if the text is not JSON, is neither an
/// array nor an envelope, carries a missing or unsupported `version`, or
/// contains a product that does not decode.
pub fn parse_document(contents: &str) -> Result<Vec<Product>> {
    let document: Value = serde_json::from_str(contents)
        .map_err(|e| CatalogError::Source(format!("failed to parse catalog JSON: {e}")))?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut envelope) => {
            let version = envelope
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| CatalogError::Source("catalog envelope has no numeric version".to_string()))?;
            if version > SUPPORTED_VERSION {
                return Err(CatalogError::Source(format!(
                    "unsupported catalog version {version} (max {SUPPORTED_VERSION})"
                )));
            }
            match envelope.remove("products") {
                None => Vec::new(),
                Some(Value::Array(records)) => records,
                Some(_) => {
                    return Err(CatalogError::Source(
                        "catalog envelope field `products` is not an array".to_string(),
                    ))
                }
            }
        }
        _ => {
            return Err(CatalogError::Source(
                "catalog document must be an array or a versioned envelope".to_string(),
            ))
        }
    };

    let products = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            Product::deserialize(record)
                .map_err(|e| CatalogError::Source(format!("product #{}: {e}", idx + 1)))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(product_count = products.len(), "parsed catalog document");
    Ok(products)
}

/// Catalog stored as a JSON file.
///
/// The file is read on every [`load`](ProductSource::load); the plugin calls
/// it once at startup.
///
/// # Examples
///
/// ```no_run
/// use zcatalog::catalog::{JsonCatalog, ProductSource};
///
/// let catalog = JsonCatalog::new("/host/catalog.json");
/// let products = catalog.load()?;
/// # Ok::<(), zcatalog::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ProductSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Product>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let products = parse_document(&contents)?;

        tracing::debug!(product_count = products.len(), "catalog file loaded");
        Ok(products)
    }

    fn describe(&self) -> String {
        crate::infrastructure::strip_host_prefix(&self.file_path.to_string_lossy())
    }
}
