//! Activity filtering.
//!
//! An activity passes a filter when it matches the selected category (if
//! any), carries at least one of the selected tags (if any), and is priced
//! within the selected range. Filtering is stable: matches keep their
//! catalog order.

use tracing::debug;

use crate::domain::{Activity, ActivityCategory, ActivityTag, Price, TagSet};

/// An inclusive price range. The upper bound may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    lower: f64,
    upper: f64,
}

impl PriceRange {
    /// Every price.
    pub const ANY: PriceRange = PriceRange {
        lower: 0.0,
        upper: f64::INFINITY,
    };

    /// Create a range. Inverted bounds are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use penguin_planner::selection::PriceRange;
    ///
    /// let range = PriceRange::new(50.0, 10.0);
    /// assert_eq!(range.lower(), 10.0);
    /// assert_eq!(range.upper(), 50.0);
    /// ```
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower > upper {
            debug!(lower, upper, "Swapping inverted price range");
            return Self {
                lower: upper,
                upper: lower,
            };
        }
        Self { lower, upper }
    }

    /// Prices from zero up to and including `ceiling`.
    pub fn up_to(ceiling: f64) -> Self {
        Self::new(0.0, ceiling)
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if `price` lies within the range, bounds included.
    pub fn contains(&self, price: Price) -> bool {
        (self.lower..=self.upper).contains(&price.amount())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

/// The combined category, tag and price filter applied to the catalog.
///
/// The default criteria match every activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<ActivityCategory>,
    /// Empty means no tag restriction
    pub tags: TagSet,
    pub price: PriceRange,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to a single category.
    pub fn in_category(mut self, category: ActivityCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Require at least one of the given tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = ActivityTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Restrict to a price range.
    pub fn priced(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Select `category`, or clear the selection if it is already selected.
    pub fn toggle_category(&mut self, category: ActivityCategory) {
        if self.category == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category);
        }
    }

    /// Add `tag` to the selection, or remove it if already present.
    pub fn toggle_tag(&mut self, tag: ActivityTag) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }

    /// Returns true if the activity satisfies every clause.
    pub fn matches(&self, activity: &Activity) -> bool {
        let category_match = self.category.is_none_or(|c| c == activity.category);
        let tag_match = self.tags.is_empty() || activity.has_any_tag(&self.tags);
        let price_match = self.price.contains(activity.price);
        category_match && tag_match && price_match
    }
}

/// Return the activities matching `criteria`, in their original order.
pub fn filter_activities<'a>(
    activities: &'a [Activity],
    criteria: &FilterCriteria,
) -> Vec<&'a Activity> {
    activities.iter().filter(|a| criteria.matches(a)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ActivityId, Rating};
    use proptest::prelude::*;

    fn category() -> impl Strategy<Value = ActivityCategory> {
        prop::sample::select(ActivityCategory::ALL.to_vec())
    }

    fn tag_set() -> impl Strategy<Value = TagSet> {
        prop::collection::btree_set(prop::sample::select(ActivityTag::ALL.to_vec()), 0..4)
    }

    fn activities() -> impl Strategy<Value = Vec<Activity>> {
        prop::collection::vec((0.0..150.0f64, category(), tag_set()), 0..20).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (price, category, tags))| {
                    Activity::new(
                        ActivityId(i as u32),
                        format!("Activity {i}"),
                        Price::new(price).unwrap(),
                        Rating::new(4.0).unwrap(),
                        category,
                        tags,
                    )
                })
                .collect()
        })
    }

    fn criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::option::of(category()),
            tag_set(),
            0.0..150.0f64,
            0.0..150.0f64,
        )
            .prop_map(|(category, tags, a, b)| FilterCriteria {
                category,
                tags,
                price: PriceRange::new(a, b),
            })
    }

    proptest! {
        /// Output is an order-preserving subsequence of the input
        #[test]
        fn result_is_ordered_subsequence(activities in activities(), criteria in criteria()) {
            let result = filter_activities(&activities, &criteria);
            let mut remaining = activities.iter();
            for kept in &result {
                prop_assert!(remaining.any(|a| a.id == kept.id));
            }
        }

        /// Every kept activity satisfies each clause, every dropped one fails one
        #[test]
        fn result_satisfies_every_clause(activities in activities(), criteria in criteria()) {
            let result = filter_activities(&activities, &criteria);
            for a in &activities {
                let kept = result.iter().any(|r| r.id == a.id);
                let category_ok = criteria.category.is_none_or(|c| c == a.category);
                let tags_ok = criteria.tags.is_empty() || !a.tags.is_disjoint(&criteria.tags);
                let price_ok = criteria.price.lower() <= a.price.amount()
                    && a.price.amount() <= criteria.price.upper();
                prop_assert_eq!(kept, category_ok && tags_ok && price_ok);
            }
        }

        /// Filtering twice gives the same result as filtering once
        #[test]
        fn idempotent(activities in activities(), criteria in criteria()) {
            let once: Vec<Activity> = filter_activities(&activities, &criteria)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Activity> = filter_activities(&once, &criteria)
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(once, twice);
        }

        /// Default criteria are the identity
        #[test]
        fn any_is_identity(activities in activities()) {
            let result = filter_activities(&activities, &FilterCriteria::any());
            prop_assert_eq!(result.len(), activities.len());
            for (kept, original) in result.iter().zip(&activities) {
                prop_assert_eq!(*kept, original);
            }
        }
    }
}
