//! Bookable activities and their classification.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Identifier of an activity within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub u32);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative price in dollars.
///
/// # Examples
///
/// ```
/// use penguin_planner::domain::Price;
///
/// let price = Price::new(25.0).unwrap();
/// assert_eq!(price.to_string(), "$25.00");
/// assert_eq!(Price::FREE.to_string(), "Free");
///
/// assert!(Price::new(-1.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// A price of zero.
    pub const FREE: Price = Price(0.0);

    /// Create a price, rejecting negative or non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidPrice(amount));
        }
        Ok(Price(amount))
    }

    /// Returns the amount in dollars.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the activity costs nothing.
    pub fn is_free(&self) -> bool {
        self.0 == 0.0
    }

    /// Price for a party of `count` people.
    pub fn times(&self, count: u32) -> Price {
        Price(self.0 * f64::from(count))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_free() {
            f.write_str("Free")
        } else {
            write!(f, "${:.2}", self.0)
        }
    }
}

/// A review rating between 0 and 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Highest possible rating.
    pub const MAX: f64 = 5.0;

    /// Create a rating, rejecting values outside 0-5.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidRating(value));
        }
        Ok(Rating(value))
    }

    /// Returns the rating value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Number of filled stars (the rating rounded down).
    pub fn filled_stars(&self) -> u8 {
        self.0.floor() as u8
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// The single category an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Food,
    Indoor,
    Outdoor,
}

impl ActivityCategory {
    /// Every category, in display order.
    pub const ALL: [ActivityCategory; 3] = [
        ActivityCategory::Food,
        ActivityCategory::Indoor,
        ActivityCategory::Outdoor,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Food => "Food",
            ActivityCategory::Indoor => "Indoor",
            ActivityCategory::Outdoor => "Outdoor",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityCategory {
    type Err = DomainError;

    /// Parse a category label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// Descriptive tags. An activity may carry any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTag {
    Cafe,
    Sports,
    Adventure,
    Gaming,
    Dining,
    Entertainment,
}

impl ActivityTag {
    /// Every tag, in display order.
    pub const ALL: [ActivityTag; 6] = [
        ActivityTag::Cafe,
        ActivityTag::Sports,
        ActivityTag::Adventure,
        ActivityTag::Gaming,
        ActivityTag::Dining,
        ActivityTag::Entertainment,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityTag::Cafe => "Café",
            ActivityTag::Sports => "Sports",
            ActivityTag::Adventure => "Adventure",
            ActivityTag::Gaming => "Gaming",
            ActivityTag::Dining => "Dining",
            ActivityTag::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityTag {
    type Err = DomainError;

    /// Parse a tag label, ignoring case. `cafe` is accepted for `Café`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("cafe") {
            return Ok(ActivityTag::Cafe);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == s.to_lowercase())
            .ok_or_else(|| DomainError::UnknownTag(s.to_string()))
    }
}

/// A set of tags. Ordered so iteration and serialization are stable.
pub type TagSet = BTreeSet<ActivityTag>;

/// A bookable activity from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub price: Price,
    pub rating: Rating,
    pub category: ActivityCategory,
    pub tags: TagSet,
    pub description: String,
    /// Asset name of the cover image
    pub image: String,
}

impl Activity {
    /// Create an activity with no description or image.
    pub fn new(
        id: ActivityId,
        title: impl Into<String>,
        price: Price,
        rating: Rating,
        category: ActivityCategory,
        tags: impl IntoIterator<Item = ActivityTag>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            rating,
            category,
            tags: tags.into_iter().collect(),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image asset name.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Returns true if the activity carries at least one of `tags`.
    pub fn has_any_tag(&self, tags: &TagSet) -> bool {
        !self.tags.is_disjoint(tags)
    }
}
