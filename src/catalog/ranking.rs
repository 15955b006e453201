//! Sort comparators for the product listing.
//!
//! Each [`SortKey`] maps to a comparator over two products. Prices, ratings
//! and discounts are `f64`, compared with [`f64::total_cmp`] so the ordering
//! is total even for unusual values. The relative order of products with an
//! equal primary key is not part of the contract.

use crate::domain::{Product, SortKey};
use std::cmp::Ordering;

/// Comparator signature returned by [`comparator`].
pub type Comparator = fn(&Product, &Product) -> Ordering;

fn by_price_ascending(a: &Product, b: &Product) -> Ordering {
    a.price.total_cmp(&b.price)
}

fn by_price_descending(a: &Product, b: &Product) -> Ordering {
    b.price.total_cmp(&a.price)
}

fn by_rating_descending(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_discount_descending(a: &Product, b: &Product) -> Ordering {
    b.discount.total_cmp(&a.discount)
}

/// Returns the ordering function for `key`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use zcatalog::catalog::comparator;
/// use zcatalog::domain::{Category, Color, Product, SortKey};
///
/// let cheap = Product::new(1, "Tee", Category::Clothing, Color::White, 19.0);
/// let pricey = Product::new(2, "Laptop", Category::Electronics, Color::Gray, 999.0);
///
/// assert_eq!(comparator(SortKey::PriceLowToHigh)(&cheap, &pricey), Ordering::Less);
/// assert_eq!(comparator(SortKey::PriceHighToLow)(&cheap, &pricey), Ordering::Greater);
/// ```
#[must_use]
pub fn comparator(key: SortKey) -> Comparator {
    match key {
        SortKey::PriceLowToHigh => by_price_ascending,
        SortKey::PriceHighToLow => by_price_descending,
        SortKey::RatingHighToLow => by_rating_descending,
        SortKey::DiscountHighToLow => by_discount_descending,
    }
}

/// Sorts a slice of product references in place by `key`.
///
/// Only the references are reordered; the products they point at are not
/// touched.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    let cmp = comparator(key);
    products.sort_by(|a, b| cmp(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Color};

    fn product(id: u64, price: f64, rating: f64, discount: f64) -> Product {
        Product::new(id, format!("p{id}"), Category::Electronics, Color::Black, price)
            .with_rating(rating)
            .with_discount(discount)
    }

    fn sorted_ids(products: &[Product], key: SortKey) -> Vec<u64> {
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, key);
        refs.iter().map(|p| p.id).collect()
    }

    #[test]
    fn each_key_orders_by_its_attribute() {
        let products = vec![
            product(1, 50.0, 3.0, 10.0),
            product(2, 10.0, 5.0, 0.0),
            product(3, 90.0, 4.0, 40.0),
        ];

        assert_eq!(sorted_ids(&products, SortKey::PriceLowToHigh), vec![2, 1, 3]);
        assert_eq!(sorted_ids(&products, SortKey::PriceHighToLow), vec![3, 1, 2]);
        assert_eq!(sorted_ids(&products, SortKey::RatingHighToLow), vec![2, 3, 1]);
        assert_eq!(sorted_ids(&products, SortKey::DiscountHighToLow), vec![3, 1, 2]);
    }

    #[test]
    fn ties_still_respect_the_primary_key() {
        let products = vec![
            product(1, 20.0, 0.0, 0.0),
            product(2, 10.0, 0.0, 0.0),
            product(3, 20.0, 0.0, 0.0),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, SortKey::PriceLowToHigh);

        assert_eq!(refs[0].id, 2);
        assert!(refs.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn source_slice_is_not_reordered() {
        let products = vec![product(1, 30.0, 0.0, 0.0), product(2, 10.0, 0.0, 0.0)];
        let _ = sorted_ids(&products, SortKey::PriceLowToHigh);
        assert_eq!(products[0].id, 1);
    }
}
