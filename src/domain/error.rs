//! Error types for the catalog plugin.
//!
//! Evaluating filters and sorting never fails. Errors only come from the edges:
//! loading a catalog file, reading a theme, or parsing configuration.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use zcatalog::CatalogError;
///
/// fn load() -> Result<(), CatalogError> {
///     Err(CatalogError::Source("catalog document is empty".to_string()))
/// }
///
/// assert!(load().unwrap_err().to_string().contains("empty"));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product source could not produce a product list.
    ///
    /// Covers malformed JSON documents and unsupported format versions.
    #[error("Catalog source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
