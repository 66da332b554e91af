//! The map planner's day itinerary.
//!
//! An [`Itinerary`] keeps planned activities ordered by start time and the
//! list of friends collaborating on the plan. Between consecutive
//! activities there is a [`Leg`]: the free time a [`TravelInfo`] has to fit
//! into.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where new activities are placed until the user moves them.
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    latitude: 1.3521,
    longitude: 103.8198,
};

/// Length of an activity added by name.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// An activity placed on the day's plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedActivity {
    pub name: String,
    pub location: Coordinate,
    pub duration_minutes: u32,
    pub start: NaiveDateTime,
    pub participants: Vec<String>,
}

impl PlannedActivity {
    /// Create a planned activity.
    pub fn new(
        name: impl Into<String>,
        location: Coordinate,
        duration_minutes: u32,
        start: NaiveDateTime,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            duration_minutes,
            start,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// How long the activity lasts.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }

    /// When the activity finishes: start plus duration.
    pub fn end(&self) -> NaiveDateTime {
        self.start
            .checked_add_signed(self.duration())
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// How to get from one activity to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Mrt,
    Bus,
    Walk,
}

impl TransportMode {
    /// Every mode.
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Mrt,
        TransportMode::Bus,
        TransportMode::Walk,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Mrt => "MRT",
            TransportMode::Bus => "Bus",
            TransportMode::Walk => "Walk",
        }
    }

    /// SF Symbol for the mode.
    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Mrt => "train.side.front.car",
            TransportMode::Bus => "bus",
            TransportMode::Walk => "figure.walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownTransportMode(String);

impl FromStr for TransportMode {
    type Err = UnknownTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTransportMode(s.to_string()))
    }
}

/// A journey between two places.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelInfo {
    pub duration_minutes: u32,
    pub mode: TransportMode,
    pub route: Vec<Coordinate>,
}

impl TravelInfo {
    /// How long the journey takes.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// The gap between one planned activity ending and the next starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Index of the earlier activity
    pub from: usize,
    /// Index of the later activity
    pub to: usize,
    /// Free time between them. Negative when they overlap.
    pub gap: Duration,
}

impl Leg {
    /// Returns true if the journey takes no longer than the free time.
    pub fn fits(&self, travel: &TravelInfo) -> bool {
        travel.duration() <= self.gap
    }
}

/// A day's plan and the people planning it.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    activities: Vec<PlannedActivity>,
    collaborators: Vec<String>,
}

impl Itinerary {
    /// An empty plan shared with `collaborators`.
    pub fn new(collaborators: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            activities: Vec::new(),
            collaborators: collaborators.into_iter().map(Into::into).collect(),
        }
    }

    /// Planned activities, ordered by start time.
    pub fn activities(&self) -> &[PlannedActivity] {
        &self.activities
    }

    /// Collaborator names, in the order they were added.
    pub fn collaborators(&self) -> &[String] {
        &self.collaborators
    }

    /// Add an activity, keeping the plan ordered by start time.
    ///
    /// An activity starting at the same time as existing ones goes after them.
    pub fn add(&mut self, activity: PlannedActivity) {
        let at = self
            .activities
            .partition_point(|a| a.start <= activity.start);
        self.activities.insert(at, activity);
    }

    /// Add an hour-long activity for the viewer, starting at `start`.
    ///
    /// Empty names are ignored. Returns true if the activity was added.
    pub fn add_named(&mut self, name: &str, start: NaiveDateTime) -> bool {
        if name.is_empty() {
            return false;
        }
        self.add(PlannedActivity::new(
            name,
            DEFAULT_LOCATION,
            DEFAULT_DURATION_MINUTES,
            start,
            ["You"],
        ));
        true
    }

    /// Remove the activity at `index`.
    pub fn remove(&mut self, index: usize) -> Option<PlannedActivity> {
        (index < self.activities.len()).then(|| self.activities.remove(index))
    }

    /// Add a collaborator. Empty names are ignored; repeats are kept.
    pub fn add_collaborator(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.collaborators.push(name.to_string());
        true
    }

    /// Remove every collaborator with this exact name. Returns how many went.
    pub fn remove_collaborator(&mut self, name: &str) -> usize {
        let before = self.collaborators.len();
        self.collaborators.retain(|c| c != name);
        let removed = before - self.collaborators.len();
        debug!(name, removed, "Collaborator removed");
        removed
    }

    /// Gaps between consecutive activities.
    pub fn legs(&self) -> Vec<Leg> {
        self.activities
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Leg {
                from: i,
                to: i + 1,
                gap: pair[1].start.signed_duration_since(pair[0].end()),
            })
            .collect()
    }
}

/// The sample day out in Singapore, on `date`.
pub fn sample_itinerary(date: NaiveDate) -> Itinerary {
    let at = |hour, minute| {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("sample times are valid");
        date.and_time(time)
    };

    let mut itinerary = Itinerary::new(["John", "Sarah", "Mike"]);
    itinerary.add(PlannedActivity::new(
        "Universal Studios",
        Coordinate {
            latitude: 1.2540,
            longitude: 103.8238,
        },
        240,
        at(10, 0),
        ["You", "John", "Sarah"],
    ));
    itinerary.add(PlannedActivity::new(
        "Marina Bay Sands Lunch",
        Coordinate {
            latitude: 1.2847,
            longitude: 103.8610,
        },
        90,
        at(14, 30),
        ["You", "John", "Sarah", "Mike"],
    ));
    itinerary.add(PlannedActivity::new(
        "Gardens by the Bay",
        Coordinate {
            latitude: 1.2816,
            longitude: 103.8636,
        },
        180,
        at(16, 0),
        ["You", "Sarah"],
    ));
    itinerary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        date().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn names(itinerary: &Itinerary) -> Vec<&str> {
        itinerary.activities().iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn end_is_start_plus_duration() {
        let plan = sample_itinerary(date());
        let studios = &plan.activities()[0];
        assert_eq!(studios.end(), at(14, 0));
        assert_eq!(plan.activities()[1].end(), at(16, 0));
    }

    #[test]
    fn activities_stay_ordered_by_start() {
        let mut plan = sample_itinerary(date());
        plan.add_named("Breakfast", at(8, 0));
        plan.add_named("Night Safari", at(19, 30));
        plan.add_named("Coffee", at(14, 30));

        assert_eq!(
            names(&plan),
            vec![
                "Breakfast",
                "Universal Studios",
                "Marina Bay Sands Lunch",
                "Coffee",
                "Gardens by the Bay",
                "Night Safari"
            ]
        );
    }

    #[test]
    fn named_activity_defaults() {
        let mut plan = Itinerary::default();
        assert!(plan.add_named("Hawker Centre", at(12, 0)));

        let added = &plan.activities()[0];
        assert_eq!(added.duration_minutes, 60);
        assert_eq!(added.location, DEFAULT_LOCATION);
        assert_eq!(added.participants, vec!["You"]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut plan = sample_itinerary(date());
        assert!(!plan.add_named("", at(12, 0)));
        assert_eq!(plan.activities().len(), 3);
    }

    #[test]
    fn remove_by_index() {
        let mut plan = sample_itinerary(date());
        let removed = plan.remove(1).unwrap();
        assert_eq!(removed.name, "Marina Bay Sands Lunch");
        assert_eq!(names(&plan), vec!["Universal Studios", "Gardens by the Bay"]);
        assert!(plan.remove(2).is_none());
    }

    #[test]
    fn collaborators_add_and_remove_all_matching() {
        let mut plan = sample_itinerary(date());
        assert!(!plan.add_collaborator(""));
        assert!(plan.add_collaborator("Sarah"));
        assert_eq!(plan.collaborators(), ["John", "Sarah", "Mike", "Sarah"]);

        assert_eq!(plan.remove_collaborator("Sarah"), 2);
        assert_eq!(plan.collaborators(), ["John", "Mike"]);
        assert_eq!(plan.remove_collaborator("Priya"), 0);
    }

    #[test]
    fn legs_measure_free_time() {
        let plan = sample_itinerary(date());
        let legs = plan.legs();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].gap, Duration::minutes(30));
        assert_eq!(legs[1].gap, Duration::zero());
    }

    #[test]
    fn overlapping_activities_have_negative_gap() {
        let mut plan = Itinerary::default();
        plan.add_named("Brunch", at(10, 0));
        plan.add_named("Museum", at(10, 30));
        assert_eq!(plan.legs()[0].gap, Duration::minutes(-30));
    }

    #[test]
    fn travel_fits_within_gap() {
        let legs = sample_itinerary(date()).legs();
        let mrt = TravelInfo {
            duration_minutes: 25,
            mode: TransportMode::Mrt,
            route: vec![],
        };
        let walk = TravelInfo {
            duration_minutes: 5,
            mode: TransportMode::Walk,
            route: vec![],
        };

        assert!(legs[0].fits(&mrt));
        assert!(!legs[1].fits(&mrt));
        assert!(!legs[1].fits(&walk));
        assert!(legs[1].fits(&TravelInfo {
            duration_minutes: 0,
            ..walk
        }));
    }

    #[test]
    fn parse_transport_mode() {
        assert_eq!("mrt".parse(), Ok(TransportMode::Mrt));
        assert_eq!(" Walk ".parse(), Ok(TransportMode::Walk));
        assert_eq!(TransportMode::Bus.icon(), "bus");
        assert_eq!(
            "ferry".parse::<TransportMode>(),
            Err(UnknownTransportMode("ferry".into()))
        );
    }
}
