//! Facet selections and sort order.
//!
//! [`FilterState`] holds the user's current facet selections. Every mutation
//! takes `&self` and returns a fresh value, so the previous state is never
//! touched. The closed enumerations ([`DiscountTier`], [`SortKey`]) together
//! with the clamping [`PriceRange`] constructor make out-of-domain selections
//! unrepresentable.

use super::product::{Category, Color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lowest selectable price.
pub const PRICE_MIN: u32 = 0;

/// Highest selectable price.
pub const PRICE_MAX: u32 = 1000;

/// Increment applied by one slider step.
pub const PRICE_STEP: u32 = 10;

/// Closed price interval `[lo, hi]` with `PRICE_MIN <= lo <= hi <= PRICE_MAX`.
///
/// Deserialized values pass through [`PriceRange::new`], so stored bounds are
/// clamped and ordered like any other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PriceBounds")]
pub struct PriceRange {
    lo: u32,
    hi: u32,
}

/// Unchecked wire form of [`PriceRange`].
#[derive(Deserialize)]
struct PriceBounds {
    lo: u32,
    hi: u32,
}

impl From<PriceBounds> for PriceRange {
    fn from(bounds: PriceBounds) -> Self {
        Self::new(bounds.lo, bounds.hi)
    }
}

impl PriceRange {
    /// Builds a range, clamping both bounds into `[0, 1000]` and swapping them
    /// if they arrive out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcatalog::domain::PriceRange;
    ///
    /// let range = PriceRange::new(1200, 300);
    /// assert_eq!((range.lo(), range.hi()), (300, 1000));
    /// ```
    #[must_use]
    pub fn new(lo: u32, hi: u32) -> Self {
        let lo = lo.clamp(PRICE_MIN, PRICE_MAX);
        let hi = hi.clamp(PRICE_MIN, PRICE_MAX);
        Self {
            lo: lo.min(hi),
            hi: lo.max(hi),
        }
    }

    #[must_use]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    #[must_use]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        f64::from(self.lo) <= price && price <= f64::from(self.hi)
    }

    /// Moves the lower bound by `delta` slider steps, never past `hi`.
    #[must_use]
    pub fn step_lo(self, delta: i32) -> Self {
        let lo = Self::stepped(self.lo, delta).min(self.hi);
        Self { lo, hi: self.hi }
    }

    /// Moves the upper bound by `delta` slider steps, never below `lo`.
    #[must_use]
    pub fn step_hi(self, delta: i32) -> Self {
        let hi = Self::stepped(self.hi, delta).max(self.lo);
        Self { lo: self.lo, hi }
    }

    fn stepped(value: u32, delta: i32) -> u32 {
        let moved = i64::from(value) + i64::from(delta) * i64::from(PRICE_STEP);
        let clamped = moved.clamp(i64::from(PRICE_MIN), i64::from(PRICE_MAX));
        u32::try_from(clamped).unwrap_or(PRICE_MAX)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            lo: PRICE_MIN,
            hi: PRICE_MAX,
        }
    }
}

/// Minimum-discount tier selected with the discount radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiscountTier {
    #[default]
    All,
    TenOrMore,
    FifteenOrMore,
    TwentyOrMore,
    TwentyFiveOrMore,
    ThirtyOrMore,
}

impl DiscountTier {
    /// Every tier, in radio group order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::TenOrMore,
        Self::FifteenOrMore,
        Self::TwentyOrMore,
        Self::TwentyFiveOrMore,
        Self::ThirtyOrMore,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::TenOrMore => "10% or more",
            Self::FifteenOrMore => "15% or more",
            Self::TwentyOrMore => "20% or more",
            Self::TwentyFiveOrMore => "25% or more",
            Self::ThirtyOrMore => "30% or more",
        }
    }

    /// Minimum discount percentage, or `None` for [`DiscountTier::All`].
    #[must_use]
    pub const fn threshold(self) -> Option<f64> {
        match self {
            Self::All => None,
            Self::TenOrMore => Some(10.0),
            Self::FifteenOrMore => Some(15.0),
            Self::TwentyOrMore => Some(20.0),
            Self::TwentyFiveOrMore => Some(25.0),
            Self::ThirtyOrMore => Some(30.0),
        }
    }

    #[must_use]
    pub fn admits(self, discount: f64) -> bool {
        self.threshold().map_or(true, |min| discount >= min)
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiscountTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| format!("unknown discount tier: {s}"))
    }
}

/// Result ordering selected with the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
    DiscountHighToLow,
}

impl SortKey {
    /// Every sort key, in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::RatingHighToLow,
        Self::DiscountHighToLow,
    ];

    /// Stable identifier (`price-low-to-high`, ...).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "price-low-to-high",
            Self::PriceHighToLow => "price-high-to-low",
            Self::RatingHighToLow => "rating-high-to-low",
            Self::DiscountHighToLow => "discount-high-to-low",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "Price (Low to High)",
            Self::PriceHighToLow => "Price (High to Low)",
            Self::RatingHighToLow => "Rating (High to Low)",
            Self::DiscountHighToLow => "Discount (High to Low)",
        }
    }

    /// Next key in dropdown order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous key in dropdown order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == s || k.label() == s)
            .ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

/// Current facet selections.
///
/// Empty `categories`/`colors` sets and an empty `query` impose no
/// restriction. The default value admits every product.
///
/// # Examples
///
/// ```
/// use zcatalog::domain::{Category, FilterState};
///
/// let original = FilterState::default();
/// let toggled = original.toggle_category(Category::Electronics);
/// assert!(toggled.categories.contains(&Category::Electronics));
/// assert_eq!(toggled.toggle_category(Category::Electronics), original);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub categories: BTreeSet<Category>,
    pub colors: BTreeSet<Color>,
    pub price: PriceRange,
    pub discount: DiscountTier,
    #[serde(default)]
    pub query: String,
}

impl FilterState {
    #[must_use]
    pub fn toggle_category(&self, category: Category) -> Self {
        let mut categories = self.categories.clone();
        if !categories.remove(&category) {
            categories.insert(category);
        }
        Self {
            categories,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn toggle_color(&self, color: Color) -> Self {
        let mut colors = self.colors.clone();
        if !colors.remove(&color) {
            colors.insert(color);
        }
        Self {
            colors,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_price(&self, price: PriceRange) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_discount(&self, discount: DiscountTier) -> Self {
        Self {
            discount,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// True when no facet restricts the result set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.colors.is_empty()
            && self.price == PriceRange::default()
            && self.discount == DiscountTier::All
            && self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_ranges_are_clamped() {
        let range: PriceRange = serde_json::from_str(r#"{"lo":900,"hi":5}"#).unwrap();
        assert_eq!((range.lo(), range.hi()), (5, 900));

        let state: FilterState = serde_json::from_str(
            r#"{"categories":[],"colors":[],"price":{"lo":5000,"hi":9000},"discount":"All"}"#,
        )
        .unwrap();
        assert_eq!(state.price, PriceRange::new(1000, 1000));
        assert!(state.price.hi() <= PRICE_MAX);
    }

    #[test]
    fn price_range_orders_and_clamps() {
        let range = PriceRange::new(500, 20);
        assert_eq!((range.lo(), range.hi()), (20, 500));

        let range = PriceRange::new(2000, 5000);
        assert_eq!((range.lo(), range.hi()), (1000, 1000));
    }

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::new(100, 200);
        assert!(range.contains(100.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(99.99));
        assert!(!range.contains(200.01));
    }

    #[test]
    fn slider_steps_stay_ordered_and_in_bounds() {
        let range = PriceRange::new(0, 20);
        assert_eq!(range.step_lo(-1).lo(), 0);
        assert_eq!(range.step_lo(1).lo(), 10);
        assert_eq!(range.step_lo(5).lo(), 20);

        let range = PriceRange::new(990, 1000);
        assert_eq!(range.step_hi(1).hi(), 1000);
        assert_eq!(range.step_hi(-3).hi(), 990);
    }

    #[test]
    fn discount_thresholds_match_labels() {
        let thresholds: Vec<Option<f64>> = DiscountTier::ALL.iter().map(|t| t.threshold()).collect();
        assert_eq!(
            thresholds,
            vec![None, Some(10.0), Some(15.0), Some(20.0), Some(25.0), Some(30.0)]
        );
        assert!(DiscountTier::TwentyOrMore.admits(20.0));
        assert!(!DiscountTier::TwentyOrMore.admits(19.5));
        assert!(DiscountTier::All.admits(0.0));
    }

    #[test]
    fn discount_labels_round_trip() {
        for tier in DiscountTier::ALL {
            assert_eq!(tier.label().parse::<DiscountTier>(), Ok(tier));
        }
        assert!("5% or more".parse::<DiscountTier>().is_err());
    }

    #[test]
    fn sort_key_parses_slug_and_label() {
        assert_eq!("rating-high-to-low".parse::<SortKey>(), Ok(SortKey::RatingHighToLow));
        assert_eq!("Price (High to Low)".parse::<SortKey>(), Ok(SortKey::PriceHighToLow));
        assert!("name-a-to-z".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_key_cycles_both_ways() {
        assert_eq!(SortKey::DiscountHighToLow.next(), SortKey::PriceLowToHigh);
        assert_eq!(SortKey::PriceLowToHigh.prev(), SortKey::DiscountHighToLow);
        for key in SortKey::ALL {
            assert_eq!(key.next().prev(), key);
        }
    }

    #[test]
    fn mutations_leave_the_original_untouched() {
        let original = FilterState::default();
        let next = original
            .toggle_color(Color::Red)
            .with_discount(DiscountTier::ThirtyOrMore)
            .with_price(PriceRange::new(10, 90));

        assert!(original.is_unrestricted());
        assert!(!next.is_unrestricted());
        assert!(next.colors.contains(&Color::Red));
        assert_eq!(next.discount, DiscountTier::ThirtyOrMore);
    }

    #[test]
    fn whitespace_query_is_unrestricted() {
        assert!(FilterState::default().with_query("   ").is_unrestricted());
        assert!(!FilterState::default().with_query("tee").is_unrestricted());
    }
}
