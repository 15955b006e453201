//! zcatalog: a Zellij plugin for browsing a product catalog.
//!
//! The plugin shows a catalog as a grid of product cards next to a sidebar of
//! facet widgets:
//! - Category and color checkboxes (empty selection means "any")
//! - A price range slider pair over `$0`–`$1000` in steps of `$10`
//! - Discount tier and sort key radio buttons
//! - Fuzzy name search
//!
//! Every change replaces the filter or sort key wholesale and recomputes the
//! first page (nine cards) from the unchanged catalog.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Facet sidebar rows                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ UI Layer (ui/)        │   │ Catalog Layer (catalog/)  │
//! │ - Rendering           │   │ - Product sources         │
//! │ - Theming             │   │ - Filter predicate        │
//! │ - Components          │   │ - Sort comparators        │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability Layers      │
//! │  - Products and facets (domain/)                    │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OTLP file tracing (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcatalog::{handle_event, initialize, Config, Event};
//! use zcatalog::domain::DiscountTier;
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SetDiscount(DiscountTier::TwentyOrMore))?;
//! assert!(state.projection.items.iter().all(|p| p.discount >= 20.0));
//! # Ok::<(), zcatalog::CatalogError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CatalogError, Result};
pub use ui::Theme;

use catalog::{EmbeddedCatalog, JsonCatalog, ProductSource};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zcatalog.wasm" {
///     catalog_file "~/shop/products.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the built-in sample catalog.
    ///
    /// `~` and relative paths resolve against the host home directory.
    pub catalog_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zcatalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/shop/products.json".to_string());
    /// map.insert("theme".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/shop/products.json"));
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: get("catalog_file"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Theme`] if `theme_file` cannot be loaded
    /// - [`CatalogError::Config`] if `theme` names no built-in theme
    pub fn theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::resolve_host_path(file));
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                CatalogError::Config(format!(
                    "unknown theme '{name}', expected one of {}",
                    ui::theme::BUILTIN_THEMES.join(", ")
                ))
            }),
            None => Ok(Theme::default()),
        }
    }

    /// The product source selected by `catalog_file`.
    #[must_use]
    pub fn source(&self) -> Box<dyn ProductSource> {
        match &self.catalog_file {
            Some(path) => Box::new(JsonCatalog::new(infrastructure::resolve_host_path(path))),
            None => Box::new(EmbeddedCatalog),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Loads the theme and the catalog. Neither failure is fatal: a bad theme
/// falls back to the default, and a catalog that cannot be loaded leaves the
/// state empty with the error shown in place of the cards.
///
/// ```rust
/// use zcatalog::{initialize, Config};
///
/// let config = Config {
///     catalog_file: Some("/no/such/catalog.json".to_string()),
///     ..Default::default()
/// };
/// let state = initialize(&config);
/// assert!(state.products.is_empty());
/// assert!(state.load_error.is_some());
/// ```
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let source = config.source();
    match source.load() {
        Ok(products) => {
            tracing::debug!(
                source = %source.describe(),
                product_count = products.len(),
                "catalog loaded"
            );
            AppState::new(products, theme)
        }
        Err(e) => {
            tracing::warn!(source = %source.describe(), error = %e, "failed to load catalog");
            AppState::new(vec![], theme).with_load_error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_is_default_config() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn all_keys_are_read() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/p.json"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "/t.toml"),
            ("trace_level", "debug"),
            ("unrelated", "x"),
        ]));
        assert_eq!(config.catalog_file.as_deref(), Some("~/p.json"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_theme_is_config_error() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.theme(), Err(CatalogError::Config(_))));

        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn default_config_loads_sample_catalog() {
        let state = initialize(&Config::default());
        assert_eq!(state.products.len(), 12);
        assert!(state.load_error.is_none());
    }

    #[test]
    fn catalog_file_replaces_sample() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 1, "name": "Desk Lamp", "category": "Electronics", "color": "White", "price": 35, "discount": 10, "rating": 4.1, "image": "lamp.jpg"}]"#,
        )
        .unwrap();

        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.projection.items[0].name, "Desk Lamp");
    }

    #[test]
    fn broken_catalog_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let config = Config {
            catalog_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(state.products.is_empty());
        assert!(state.load_error.unwrap().contains("Catalog source error"));
    }
}
