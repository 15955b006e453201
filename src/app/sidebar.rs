//! Facet widget rows shown in the sidebar.
//!
//! Every row is derived from the closed enumerations in
//! [`crate::domain`], so the widget set can only ever produce valid
//! selections.

use crate::domain::{Category, Color, DiscountTier, SortKey};

/// Group a facet row belongs to. Each group gets a heading in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSection {
    Category,
    Color,
    Price,
    Discount,
    Sort,
}

/// One selectable sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetRow {
    /// Category checkbox.
    Category(Category),
    /// Color checkbox with swatch.
    Color(Color),
    /// Lower price slider thumb.
    PriceMin,
    /// Upper price slider thumb.
    PriceMax,
    /// Discount radio button.
    Discount(DiscountTier),
    /// Sort radio button.
    Sort(SortKey),
}

impl FacetRow {
    /// Every row, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcatalog::app::FacetRow;
    ///
    /// let rows = FacetRow::all();
    /// assert_eq!(rows.len(), 21);
    /// assert_eq!(rows[9], FacetRow::PriceMin);
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        Category::ALL
            .into_iter()
            .map(Self::Category)
            .chain(Color::ALL.into_iter().map(Self::Color))
            .chain([Self::PriceMin, Self::PriceMax])
            .chain(DiscountTier::ALL.into_iter().map(Self::Discount))
            .chain(SortKey::ALL.into_iter().map(Self::Sort))
            .collect()
    }

    #[must_use]
    pub const fn section(self) -> FacetSection {
        match self {
            Self::Category(_) => FacetSection::Category,
            Self::Color(_) => FacetSection::Color,
            Self::PriceMin | Self::PriceMax => FacetSection::Price,
            Self::Discount(_) => FacetSection::Discount,
            Self::Sort(_) => FacetSection::Sort,
        }
    }
}
