//! Immutable catalogs loaded at startup.
//!
//! A catalog holds the activities, the MRT stations used by the dice
//! planner, and the booking slots. It is built once, either from the
//! built-in sample data or from a JSON file, and never mutated.

mod error;
mod file;
mod sample;

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Activity, ActivityId, AvailabilitySlot, DomainError, LineCode, Station};

pub use error::CatalogError;
pub use sample::{ns_line, sample_activities, sample_availability};

/// Activities, stations and availability, fixed for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<Activity>,
    stations: Vec<Station>,
    slots: Vec<AvailabilitySlot>,
}

impl Catalog {
    /// Assemble a catalog. Activity identifiers must be unique.
    pub fn new(
        activities: Vec<Activity>,
        stations: Vec<Station>,
        slots: Vec<AvailabilitySlot>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(activities.len());
        for activity in &activities {
            if !seen.insert(activity.id) {
                return Err(CatalogError::DuplicateActivity(activity.id));
            }
        }

        debug!(
            activities = activities.len(),
            stations = stations.len(),
            slots = slots.len(),
            "Catalog assembled"
        );

        Ok(Self {
            activities,
            stations,
            slots,
        })
    }

    /// All activities, in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// All stations, in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All availability slots, in date order as listed.
    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    /// Look up an activity by identifier.
    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Look up a station by name, ignoring case.
    pub fn station_named(&self, name: &str) -> Option<&Station> {
        let name = name.trim();
        self.stations
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// The station the dice planner starts from.
    ///
    /// There is no location service, so this is the first station listed.
    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }
}

/// Builder for a line of stations.
///
/// Ordinals must strictly increase in the order stations are added.
///
/// # Example
///
/// ```
/// use penguin_planner::catalog::StationLineBuilder;
///
/// let stations = StationLineBuilder::new()
///     .add("Jurong East", "NS/EW", 1)
///     .add("Bukit Batok", "NS", 2)
///     .build()
///     .unwrap();
/// assert_eq!(stations.len(), 2);
///
/// // Out-of-order ordinals are rejected
/// let result = StationLineBuilder::new()
///     .add("Bukit Batok", "NS", 2)
///     .add("Jurong East", "NS/EW", 1)
///     .build();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Default)]
pub struct StationLineBuilder {
    entries: Vec<(String, String, u32)>,
}

impl StationLineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn add(mut self, name: &str, line: &str, ordinal: u32) -> Self {
        self.entries
            .push((name.to_string(), line.to_string(), ordinal));
        self
    }

    /// Validate line codes and ordering, and build the stations.
    pub fn build(self) -> Result<Vec<Station>, CatalogError> {
        let mut stations: Vec<Station> = Vec::with_capacity(self.entries.len());

        for (name, line, ordinal) in self.entries {
            let previous = stations.last().map(|s| s.ordinal);
            if let Some(previous) = previous.filter(|&p| ordinal <= p) {
                return Err(DomainError::OrdinalNotIncreasing {
                    name,
                    ordinal,
                    previous,
                }
                .into());
            }

            let line = match LineCode::parse(&line) {
                Ok(line) => line,
                Err(source) => return Err(CatalogError::LineCode { name, source }),
            };

            stations.push(Station::new(name, line, ordinal));
        }

        Ok(stations)
    }
}
