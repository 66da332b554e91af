//! Penguin customization: the points shop and the wardrobe.

mod shop;
mod wardrobe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use shop::{Points, ShopError, ShopItem, affordable_in, sample_shop};
pub use wardrobe::{Outfit, Wardrobe, sample_outfits};

/// Slot an outfit is worn in. One outfit per category can be equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutfitCategory {
    Hats,
    Clothes,
    Accessories,
}

impl OutfitCategory {
    /// Every category, in display order.
    pub const ALL: [OutfitCategory; 3] = [
        OutfitCategory::Hats,
        OutfitCategory::Clothes,
        OutfitCategory::Accessories,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OutfitCategory::Hats => "Hats",
            OutfitCategory::Clothes => "Clothes",
            OutfitCategory::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for OutfitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown outfit category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outfit category: {0}")]
pub struct UnknownOutfitCategory(String);

impl FromStr for OutfitCategory {
    type Err = UnknownOutfitCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOutfitCategory(s.to_string()))
    }
}
