//! Owned outfits and what the penguin is wearing.

use std::collections::HashMap;

use serde::Serialize;

use super::OutfitCategory;

/// An outfit the player can wear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outfit {
    pub name: String,
    pub image: String,
    pub category: OutfitCategory,
    pub owned: bool,
}

impl Outfit {
    /// Create an owned outfit.
    pub fn owned(name: impl Into<String>, image: impl Into<String>, category: OutfitCategory) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            category,
            owned: true,
        }
    }
}

/// Outfits a player has, and the one equipped in each category.
#[derive(Debug, Clone, Default)]
pub struct Wardrobe {
    outfits: Vec<Outfit>,
    /// Index into `outfits`, per category
    equipped: HashMap<OutfitCategory, usize>,
}

impl Wardrobe {
    /// A wardrobe with nothing equipped.
    pub fn new(outfits: Vec<Outfit>) -> Self {
        Self {
            outfits,
            equipped: HashMap::new(),
        }
    }

    /// Outfits in `category`, in wardrobe order.
    pub fn outfits_in(&self, category: OutfitCategory) -> impl Iterator<Item = &Outfit> {
        self.outfits.iter().filter(move |o| o.category == category)
    }

    /// The outfit equipped in `category`, if any.
    pub fn equipped(&self, category: OutfitCategory) -> Option<&Outfit> {
        self.equipped.get(&category).map(|&i| &self.outfits[i])
    }

    /// Returns true if the named outfit is the one equipped in its category.
    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped.values().any(|&i| self.outfits[i].name == name)
    }

    /// Equip the named outfit, or take it off if it is already equipped.
    ///
    /// Equipping replaces whatever was worn in the same category. Returns
    /// false if the wardrobe has no owned outfit by that name.
    pub fn toggle(&mut self, name: &str) -> bool {
        let Some(index) = self
            .outfits
            .iter()
            .position(|o| o.owned && o.name == name)
        else {
            return false;
        };

        let category = self.outfits[index].category;
        if self.equipped.get(&category) == Some(&index) {
            self.equipped.remove(&category);
        } else {
            self.equipped.insert(category, index);
        }
        true
    }
}

/// Starter outfits every player owns.
pub fn sample_outfits() -> Vec<Outfit> {
    use OutfitCategory::*;
    vec![
        Outfit::owned("Party Hat", "party-hat", Hats),
        Outfit::owned("Crown", "crown", Hats),
        Outfit::owned("T-Shirt", "tshirt", Clothes),
        Outfit::owned("Hoodie", "hoodie", Clothes),
        Outfit::owned("Sunglasses", "sunglasses", Accessories),
        Outfit::owned("Bowtie", "bowtie", Accessories),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_by_category_in_order() {
        let wardrobe = Wardrobe::new(sample_outfits());
        let hats: Vec<_> = wardrobe
            .outfits_in(OutfitCategory::Hats)
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(hats, vec!["Party Hat", "Crown"]);
    }

    #[test]
    fn toggle_equips_then_unequips() {
        let mut wardrobe = Wardrobe::new(sample_outfits());
        assert!(wardrobe.toggle("Crown"));
        assert_eq!(wardrobe.equipped(OutfitCategory::Hats).unwrap().name, "Crown");
        assert!(wardrobe.is_equipped("Crown"));

        assert!(wardrobe.toggle("Crown"));
        assert!(wardrobe.equipped(OutfitCategory::Hats).is_none());
        assert!(!wardrobe.is_equipped("Crown"));
    }

    #[test]
    fn one_outfit_per_category() {
        let mut wardrobe = Wardrobe::new(sample_outfits());
        wardrobe.toggle("Party Hat");
        wardrobe.toggle("Hoodie");
        wardrobe.toggle("Crown");

        assert_eq!(wardrobe.equipped(OutfitCategory::Hats).unwrap().name, "Crown");
        assert_eq!(
            wardrobe.equipped(OutfitCategory::Clothes).unwrap().name,
            "Hoodie"
        );
        assert!(!wardrobe.is_equipped("Party Hat"));
    }

    #[test]
    fn unknown_or_unowned_outfits_are_ignored() {
        let mut outfits = sample_outfits();
        outfits.push(Outfit {
            owned: false,
            ..Outfit::owned("Royal Crown", "crown-premium", OutfitCategory::Hats)
        });
        let mut wardrobe = Wardrobe::new(outfits);

        assert!(!wardrobe.toggle("Top Hat"));
        assert!(!wardrobe.toggle("Royal Crown"));
        assert!(wardrobe.equipped(OutfitCategory::Hats).is_none());
    }
}
