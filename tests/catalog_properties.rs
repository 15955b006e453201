//! Property tests for the filter → sort → page pipeline.

use proptest::prelude::*;
use std::collections::BTreeSet;
use zcatalog::catalog::{comparator, filter_products, project, sort_products, PAGE_SIZE};
use zcatalog::domain::{
    Category, Color, DiscountTier, FilterState, PriceRange, Product, SortKey, PRICE_MAX,
};

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn tier() -> impl Strategy<Value = DiscountTier> {
    prop::sample::select(DiscountTier::ALL.to_vec())
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn product() -> impl Strategy<Value = (Category, Color, u32, u32, u32)> {
    (category(), color(), 0u32..=1000, 0u32..=60, 0u32..=50)
}

/// Catalog with sequential ids; prices are whole dollars, ratings tenths.
fn catalog(max: usize) -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product(), 0..max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cat, col, price, discount, rating))| {
                Product::new(i as u64 + 1, format!("Item {i}"), cat, col, f64::from(price))
                    .with_discount(f64::from(discount))
                    .with_rating(f64::from(rating) / 10.0)
            })
            .collect()
    })
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::collection::btree_set(category(), 0..=3),
        prop::collection::btree_set(color(), 0..=6),
        0u32..=PRICE_MAX,
        0u32..=PRICE_MAX,
        tier(),
    )
        .prop_map(|(categories, colors, a, b, discount)| FilterState {
            categories,
            colors,
            price: PriceRange::new(a, b),
            discount,
            query: String::new(),
        })
}

fn ids(products: &[&Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn identity_filter_keeps_everything(products in catalog(40)) {
        let kept = filter_products(&products, &FilterState::default());
        prop_assert_eq!(kept.len(), products.len());
    }

    #[test]
    fn discount_tier_is_a_threshold(products in catalog(40), tier in tier()) {
        let filter = FilterState::default().with_discount(tier);
        let kept: BTreeSet<u64> = filter_products(&products, &filter).iter().map(|p| p.id).collect();
        for p in &products {
            let expected = tier.threshold().map_or(true, |t| p.discount >= t);
            prop_assert_eq!(kept.contains(&p.id), expected);
        }
    }

    #[test]
    fn price_bounds_are_inclusive(products in catalog(40), a in 0u32..=1000, b in 0u32..=1000) {
        let range = PriceRange::new(a, b);
        prop_assert!(range.lo() <= range.hi() && range.hi() <= PRICE_MAX);

        let filter = FilterState::default().with_price(range);
        let kept: BTreeSet<u64> = filter_products(&products, &filter).iter().map(|p| p.id).collect();
        for p in &products {
            let inside = f64::from(range.lo()) <= p.price && p.price <= f64::from(range.hi());
            prop_assert_eq!(kept.contains(&p.id), inside);
        }
    }

    #[test]
    fn every_kept_product_passes_all_clauses(products in catalog(40), filter in filter_state()) {
        for p in filter_products(&products, &filter) {
            prop_assert!(filter.categories.is_empty() || filter.categories.contains(&p.category));
            prop_assert!(filter.colors.is_empty() || filter.colors.contains(&p.color));
            prop_assert!(filter.price.contains(p.price));
            prop_assert!(filter.discount.admits(p.discount));
        }
    }

    #[test]
    fn price_directions_reverse_each_other(prices in prop::collection::btree_set(0u32..=1000, 0..30)) {
        let products: Vec<Product> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Product::new(i as u64, "p", Category::Shoes, Color::Red, f64::from(price)))
            .collect();

        let mut asc: Vec<&Product> = products.iter().collect();
        sort_products(&mut asc, SortKey::PriceLowToHigh);
        let mut desc: Vec<&Product> = products.iter().collect();
        sort_products(&mut desc, SortKey::PriceHighToLow);

        let mut reversed = ids(&desc);
        reversed.reverse();
        prop_assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn page_is_first_nine_in_order(products in catalog(30), filter in filter_state(), key in sort_key()) {
        let projection = project(&products, &filter, key);
        let matched = filter_products(&products, &filter).len();

        prop_assert_eq!(projection.matched, matched);
        prop_assert_eq!(projection.total, products.len());
        prop_assert_eq!(projection.items.len(), matched.min(PAGE_SIZE));

        let cmp = comparator(key);
        for pair in projection.items.windows(2) {
            prop_assert_ne!(cmp(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn rating_sort_pages_the_full_descending_order(products in catalog(30)) {
        let projection = project(&products, &FilterState::default(), SortKey::RatingHighToLow);

        let mut ratings: Vec<f64> = products.iter().map(|p| p.rating).collect();
        ratings.sort_by(|a, b| b.total_cmp(a));
        ratings.truncate(PAGE_SIZE);

        let shown: Vec<f64> = projection.items.iter().map(|p| p.rating).collect();
        prop_assert_eq!(shown, ratings);
    }

    #[test]
    fn projection_leaves_catalog_untouched(products in catalog(30), key in sort_key()) {
        let before = products.clone();
        let _ = project(&products, &FilterState::default(), key);
        prop_assert_eq!(products, before);
    }

    #[test]
    fn double_toggle_is_identity(filter in filter_state(), cat in category(), col in color()) {
        prop_assert_eq!(filter.toggle_category(cat).toggle_category(cat), filter.clone());
        prop_assert_eq!(filter.toggle_color(col).toggle_color(col), filter);
    }

    #[test]
    fn slider_steps_stay_in_bounds(a in 0u32..=1000, b in 0u32..=1000, steps in -150i32..150) {
        let range = PriceRange::new(a, b);
        for moved in [range.step_lo(steps), range.step_hi(steps)] {
            prop_assert!(moved.lo() <= moved.hi());
            prop_assert!(moved.hi() <= PRICE_MAX);
        }
    }
}

#[test]
fn ten_of_twelve_passing_shows_nine() {
    let products: Vec<Product> = (0..12)
        .map(|i| {
            let discount = if i < 10 { 25.0 } else { 5.0 };
            Product::new(i, format!("Item {i}"), Category::Clothing, Color::Blue, f64::from(i as u32) * 10.0)
                .with_discount(discount)
        })
        .collect();
    let filter = FilterState::default().with_discount(DiscountTier::TwentyOrMore);

    let projection = project(&products, &filter, SortKey::PriceHighToLow);
    assert_eq!(projection.matched, 10);
    assert_eq!(projection.items.len(), 9);
    let shown: Vec<u64> = projection.items.iter().map(|p| p.id).collect();
    assert_eq!(shown, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
}
