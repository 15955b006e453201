//! Product domain model.
//!
//! A [`Product`] is a read-only catalog record. Its category and color come
//! from closed enumerations so that facet selections can never name a value
//! the catalog does not know about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Shoes,
}

impl Category {
    /// Every category, in sidebar order.
    pub const ALL: [Self; 3] = [Self::Electronics, Self::Clothing, Self::Shoes];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Shoes => "Shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Blue,
    Silver,
    Gray,
    White,
    Red,
}

impl Color {
    /// Every color, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Black,
        Self::Blue,
        Self::Silver,
        Self::Gray,
        Self::White,
        Self::Red,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Silver => "Silver",
            Self::Gray => "Gray",
            Self::White => "White",
            Self::Red => "Red",
        }
    }

    /// Hex value used to draw the color swatch next to the checkbox.
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::Blue => "#0000ff",
            Self::Silver => "#c0c0c0",
            Self::Gray => "#808080",
            Self::White => "#ffffff",
            Self::Red => "#ff0000",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown color: {s}"))
    }
}

/// A catalog product.
///
/// Products are supplied by a [`ProductSource`](crate::catalog::ProductSource)
/// and never modified afterwards. `price` is non-negative, `discount` is a
/// percentage in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use zcatalog::domain::{Category, Color, Product};
///
/// let product = Product::new(1, "Headphones", Category::Electronics, Color::Black, 199.0);
/// assert_eq!(product.discount, 0.0);
/// assert!(product.image.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub color: Color,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Creates a product with no discount, no rating and no image.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, category: Category, color: Color, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            color,
            price,
            discount: 0.0,
            rating: 0.0,
            image: String::new(),
        }
    }

    #[must_use]
    pub const fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
