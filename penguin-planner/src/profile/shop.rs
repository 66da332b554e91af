//! The points shop.

use serde::Serialize;
use tracing::info;

use super::OutfitCategory;

/// Reward points earned from activities.
pub type Points = u32;

/// Errors from shop transactions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    /// The balance does not cover the price
    #[error("{item} costs {price} points, only {balance} available")]
    InsufficientPoints {
        item: String,
        price: Points,
        balance: Points,
    },
}

/// An outfit for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopItem {
    pub name: String,
    pub image: String,
    pub category: OutfitCategory,
    pub price: Points,
}

impl ShopItem {
    /// Create a shop item.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        category: OutfitCategory,
        price: Points,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            category,
            price,
        }
    }

    /// Returns true if `balance` covers the price.
    pub fn can_afford(&self, balance: Points) -> bool {
        balance >= self.price
    }

    /// Buy the item, returning the balance left over.
    pub fn purchase(&self, balance: Points) -> Result<Points, ShopError> {
        let left = balance
            .checked_sub(self.price)
            .ok_or_else(|| ShopError::InsufficientPoints {
                item: self.name.clone(),
                price: self.price,
                balance,
            })?;
        info!(item = %self.name, price = self.price, left, "Purchased shop item");
        Ok(left)
    }
}

/// Items in `category`, each paired with whether `balance` covers it.
pub fn affordable_in(
    items: &[ShopItem],
    category: OutfitCategory,
    balance: Points,
) -> Vec<(&ShopItem, bool)> {
    items
        .iter()
        .filter(|i| i.category == category)
        .map(|i| (i, i.can_afford(balance)))
        .collect()
}

/// Premium outfits on sale.
pub fn sample_shop() -> Vec<ShopItem> {
    vec![
        ShopItem::new("Royal Crown", "crown-premium", OutfitCategory::Hats, 500),
        ShopItem::new("Winter Coat", "winter-coat", OutfitCategory::Clothes, 300),
        ShopItem::new("Gold Chain", "gold-chain", OutfitCategory::Accessories, 400),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affordability_is_inclusive() {
        let crown = &sample_shop()[0];
        assert!(crown.can_afford(500));
        assert!(crown.can_afford(1250));
        assert!(!crown.can_afford(499));
    }

    #[test]
    fn purchase_deducts_price() {
        let coat = &sample_shop()[1];
        assert_eq!(coat.purchase(1250), Ok(950));
        assert_eq!(coat.purchase(300), Ok(0));
    }

    #[test]
    fn purchase_fails_without_enough_points() {
        let chain = &sample_shop()[2];
        let err = chain.purchase(399).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientPoints {
                item: "Gold Chain".into(),
                price: 400,
                balance: 399
            }
        );
        assert_eq!(
            err.to_string(),
            "Gold Chain costs 400 points, only 399 available"
        );
    }

    #[test]
    fn listing_filters_by_category() {
        let items = sample_shop();
        let hats = affordable_in(&items, OutfitCategory::Hats, 450);
        assert_eq!(hats.len(), 1);
        assert_eq!(hats[0].0.name, "Royal Crown");
        assert!(!hats[0].1);

        let clothes = affordable_in(&items, OutfitCategory::Clothes, 450);
        assert!(clothes[0].1);
    }
}
