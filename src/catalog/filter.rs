//! Product filter predicate.
//!
//! A product is shown only if it passes every clause:
//!
//! 1. **Category**: no category selected, or the product's category is selected
//! 2. **Color**: no color selected, or the product's color is selected
//! 3. **Price**: `lo <= price <= hi`
//! 4. **Discount**: tier is `All`, or `discount >= threshold`
//! 5. **Name query**: empty query, or every token fuzzy-matches the name
//!
//! The name clause uses the Skim algorithm; each whitespace-separated token
//! must match on its own, so `"run sho"` finds "Running Shoes".

use crate::domain::{FilterState, Product};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Filter predicate prepared for one [`FilterState`].
///
/// Tokenizes the query and builds the fuzzy matcher once, so testing a whole
/// catalog does not repeat that work per product.
pub struct ProductFilter<'a> {
    state: &'a FilterState,
    tokens: Vec<String>,
    matcher: Option<SkimMatcherV2>,
}

impl<'a> ProductFilter<'a> {
    #[must_use]
    pub fn new(state: &'a FilterState) -> Self {
        let tokens: Vec<String> = state
            .query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        Self {
            state,
            tokens,
            matcher,
        }
    }

    /// Returns `true` iff `product` passes every clause.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let state = self.state;

        let category_ok = state.categories.is_empty() || state.categories.contains(&product.category);
        let color_ok = state.colors.is_empty() || state.colors.contains(&product.color);
        let price_ok = state.price.contains(product.price);
        let discount_ok = state.discount.admits(product.discount);

        category_ok && color_ok && price_ok && discount_ok && self.name_matches(&product.name)
    }

    fn name_matches(&self, name: &str) -> bool {
        self.matcher.as_ref().map_or(true, |m| {
            let name_lower = name.to_lowercase();
            self.tokens
                .iter()
                .all(|token| m.fuzzy_match(&name_lower, token).is_some())
        })
    }
}

impl std::fmt::Debug for ProductFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductFilter")
            .field("state", &self.state)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

/// Single-product form of the predicate.
///
/// # Examples
///
/// ```
/// use zcatalog::catalog::matches;
/// use zcatalog::domain::{Category, Color, DiscountTier, FilterState, Product};
///
/// let shoe = Product::new(1, "Running Shoes", Category::Shoes, Color::Red, 119.0).with_discount(12.0);
/// assert!(matches(&shoe, &FilterState::default()));
/// assert!(!matches(&shoe, &FilterState::default().with_discount(DiscountTier::FifteenOrMore)));
/// ```
#[must_use]
pub fn matches(product: &Product, state: &FilterState) -> bool {
    ProductFilter::new(state).matches(product)
}

/// Returns the products that pass `state`, in source order.
#[must_use]
pub fn filter_products<'p>(products: &'p [Product], state: &FilterState) -> Vec<&'p Product> {
    let filter = ProductFilter::new(state);
    products.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Color, DiscountTier, PriceRange};

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Laptop", Category::Electronics, Color::Gray, 999.0).with_discount(20.0),
            Product::new(2, "Denim Jacket", Category::Clothing, Color::Blue, 79.0).with_discount(35.0),
            Product::new(3, "Running Shoes", Category::Shoes, Color::Red, 119.0).with_discount(12.0),
            Product::new(4, "Cotton T-Shirt", Category::Clothing, Color::White, 19.0).with_discount(5.0),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn default_state_admits_everything() {
        let products = sample();
        assert_eq!(filter_products(&products, &FilterState::default()).len(), products.len());
    }

    #[test]
    fn category_clause_is_a_union_within_the_facet() {
        let products = sample();
        let state = FilterState::default()
            .toggle_category(Category::Clothing)
            .toggle_category(Category::Shoes);
        assert_eq!(ids(&filter_products(&products, &state)), vec![2, 3, 4]);
    }

    #[test]
    fn facets_combine_as_a_conjunction() {
        let products = sample();
        let state = FilterState::default()
            .toggle_category(Category::Clothing)
            .toggle_color(Color::White);
        assert_eq!(ids(&filter_products(&products, &state)), vec![4]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let products = sample();
        let state = FilterState::default().with_price(PriceRange::new(79, 119));
        assert_eq!(ids(&filter_products(&products, &state)), vec![2, 3]);
    }

    #[test]
    fn discount_tier_is_a_minimum() {
        let products = sample();
        let state = FilterState::default().with_discount(DiscountTier::TwentyOrMore);
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 2]);
    }

    #[test]
    fn query_tokens_must_all_match() {
        let products = sample();
        assert_eq!(ids(&filter_products(&products, &FilterState::default().with_query("run sho"))), vec![3]);
        assert!(filter_products(&products, &FilterState::default().with_query("laptop zzz")).is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let products = sample();
        assert_eq!(ids(&filter_products(&products, &FilterState::default().with_query("DENIM"))), vec![2]);
    }

    #[test]
    fn unselected_values_fail_when_facet_is_active() {
        let laptop = &sample()[0];
        assert!(!matches(laptop, &FilterState::default().toggle_color(Color::Black)));
    }
}
