//! The display pipeline: filter, sort a copy, keep the first page.

use super::filter::filter_products;
use super::ranking::sort_products;
use crate::domain::{FilterState, Product, SortKey};

/// Number of product cards shown at once. There is no pagination.
pub const PAGE_SIZE: usize = 9;

/// Result of running the pipeline over a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// At most [`PAGE_SIZE`] products, in comparator order.
    pub items: Vec<Product>,
    /// How many products passed the filter before truncation.
    pub matched: usize,
    /// Size of the catalog the projection was computed from.
    pub total: usize,
}

/// Filters `products` by `filter`, sorts the survivors by `sort` and keeps the
/// first [`PAGE_SIZE`].
///
/// `products` is never reordered; sorting happens on a vector of references.
///
/// # Examples
///
/// ```
/// use zcatalog::catalog::{project, EmbeddedCatalog, ProductSource, PAGE_SIZE};
/// use zcatalog::domain::{FilterState, SortKey};
///
/// let products = EmbeddedCatalog.load()?;
/// let page = project(&products, &FilterState::default(), SortKey::PriceLowToHigh);
/// assert_eq!(page.items.len(), PAGE_SIZE);
/// assert_eq!(page.matched, products.len());
/// # Ok::<(), zcatalog::CatalogError>(())
/// ```
#[must_use]
pub fn project(products: &[Product], filter: &FilterState, sort: SortKey) -> Projection {
    let _span = tracing::debug_span!("project",
        total_products = products.len(),
        sort = sort.slug()
    )
    .entered();

    let mut matched = filter_products(products, filter);
    sort_products(&mut matched, sort);

    let projection = Projection {
        matched: matched.len(),
        total: products.len(),
        items: matched.into_iter().take(PAGE_SIZE).cloned().collect(),
    };

    tracing::debug!(
        matched = projection.matched,
        shown = projection.items.len(),
        "pipeline recomputed"
    );

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Color, DiscountTier};

    fn catalog(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| {
                #[allow(clippy::cast_precision_loss)]
                let price = (n - id) as f64 * 10.0;
                Product::new(id, format!("item {id}"), Category::Shoes, Color::Black, price)
                    .with_discount(if id <= 10 { 20.0 } else { 0.0 })
            })
            .collect()
    }

    #[test]
    fn truncates_to_page_size() {
        let products = catalog(12);
        let filter = FilterState::default().with_discount(DiscountTier::TwentyOrMore);
        let page = project(&products, &filter, SortKey::PriceLowToHigh);

        assert_eq!(page.matched, 10);
        assert_eq!(page.total, 12);
        assert_eq!(page.items.len(), PAGE_SIZE);
        assert!(page.items.windows(2).all(|w| w[0].price <= w[1].price));
        // Cheapest discounted item is id 10; id 1 is the most expensive and gets cut.
        assert_eq!(page.items[0].id, 10);
        assert!(page.items.iter().all(|p| p.id != 1));
    }

    #[test]
    fn short_results_are_not_padded() {
        let products = catalog(4);
        let page = project(&products, &FilterState::default(), SortKey::PriceHighToLow);
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn empty_catalog_projects_to_nothing() {
        let page = project(&[], &FilterState::default(), SortKey::default());
        assert_eq!(page, Projection::default());
    }

    #[test]
    fn source_order_survives_projection() {
        let products = catalog(12);
        let before: Vec<u64> = products.iter().map(|p| p.id).collect();
        let _ = project(&products, &FilterState::default(), SortKey::PriceLowToHigh);
        let after: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }
}
