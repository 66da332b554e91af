//! JSON catalog files.
//!
//! A catalog file lists activities, stations and availability:
//!
//! ```json
//! {
//!   "activities": [
//!     { "id": 1, "title": "Singapore Zoo", "price": 48.0, "rating": 4.6,
//!       "category": "outdoor", "tags": ["entertainment", "adventure"] }
//!   ],
//!   "stations": [ { "name": "Jurong East", "line": "NS/EW", "ordinal": 1 } ],
//!   "availability": [ { "day_offset": 1, "total": 20, "remaining": 5 } ]
//! }
//! ```
//!
//! Availability records give either an absolute `date` (`YYYY-MM-DD`, at
//! midnight) or a `day_offset` relative to the load time.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Deserialize;
use tracing::info;

use crate::domain::{
    Activity, ActivityCategory, ActivityId, ActivityTag, AvailabilitySlot, Price, Rating,
};

use super::{Catalog, CatalogError, StationLineBuilder};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    activities: Vec<ActivityRecord>,
    #[serde(default)]
    stations: Vec<StationRecord>,
    #[serde(default)]
    availability: Vec<SlotRecord>,
}

#[derive(Debug, Deserialize)]
struct ActivityRecord {
    id: u32,
    title: String,
    price: f64,
    rating: f64,
    category: ActivityCategory,
    #[serde(default)]
    tags: Vec<ActivityTag>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}

#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    line: String,
    ordinal: u32,
}

#[derive(Debug, Deserialize)]
struct SlotRecord {
    date: Option<NaiveDate>,
    day_offset: Option<i64>,
    total: u32,
    remaining: u32,
}

impl ActivityRecord {
    fn into_activity(self) -> Result<Activity, CatalogError> {
        let price = Price::new(self.price)?;
        let rating = Rating::new(self.rating)?;
        Ok(Activity::new(
            ActivityId(self.id),
            self.title,
            price,
            rating,
            self.category,
            self.tags,
        )
        .with_description(self.description)
        .with_image(self.image))
    }
}

impl SlotRecord {
    fn into_slot(self, index: usize, now: NaiveDateTime) -> Result<AvailabilitySlot, CatalogError> {
        let at = match (self.date, self.day_offset) {
            (Some(date), _) => date.and_time(NaiveTime::MIN),
            (None, Some(days)) => TimeDelta::try_days(days)
                .and_then(|offset| now.checked_add_signed(offset))
                .ok_or(CatalogError::DateOutOfRange { index })?,
            (None, None) => return Err(CatalogError::MissingDate { index }),
        };
        Ok(AvailabilitySlot::new(at, self.total, self.remaining)?)
    }
}

impl Catalog {
    /// Parse a catalog from JSON text. Relative dates are resolved against `now`.
    pub fn from_json(json: &str, now: NaiveDateTime) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let activities = file
            .activities
            .into_iter()
            .map(ActivityRecord::into_activity)
            .collect::<Result<Vec<_>, _>>()?;

        let stations = file
            .stations
            .into_iter()
            .fold(StationLineBuilder::new(), |b, s| {
                b.add(&s.name, &s.line, s.ordinal)
            })
            .build()?;

        let slots = file
            .availability
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.into_slot(i, now))
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(activities, stations, slots)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>, now: NaiveDateTime) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json, now)?;
        info!(
            path = %path.display(),
            activities = catalog.activities().len(),
            stations = catalog.stations().len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}
