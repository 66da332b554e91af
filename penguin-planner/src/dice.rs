//! Dice planner.
//!
//! Roll a die and ride that many stops down the line from the current
//! station. Rolls that run past the terminus stop there.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::domain::Station;
use crate::selection::resolve_destination;

/// Roll a die with `faces` faces, returning a value in `1..=faces`.
///
/// A die with no faces behaves like a one-sided die.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, faces: u32) -> u32 {
    rng.gen_range(1..=faces.max(1))
}

/// The outcome of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRoll {
    pub stops: u32,
    pub origin: Station,
    pub destination: Station,
}

/// Resolves dice rolls against a line of stations.
#[derive(Debug, Clone)]
pub struct DicePlanner<'a> {
    stations: &'a [Station],
    origin: &'a Station,
    faces: u32,
}

impl<'a> DicePlanner<'a> {
    /// Create a planner starting from the first station of the line.
    ///
    /// Returns `None` if there are no stations.
    pub fn new(stations: &'a [Station], faces: u32) -> Option<Self> {
        let origin = stations.first()?;
        Some(Self {
            stations,
            origin,
            faces,
        })
    }

    /// Start from a different station.
    pub fn from_station(mut self, origin: &'a Station) -> Self {
        self.origin = origin;
        self
    }

    /// The station rolls are counted from.
    pub fn origin(&self) -> &Station {
        self.origin
    }

    /// Ride a fixed number of stops.
    pub fn take(&self, stops: u32) -> DiceRoll {
        // `stations` is non-empty by construction, so a destination always exists
        let destination = resolve_destination(self.stations, self.origin, stops)
            .unwrap_or(self.origin)
            .clone();

        DiceRoll {
            stops,
            origin: self.origin.clone(),
            destination,
        }
    }

    /// Roll the die and ride that many stops.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceRoll {
        let stops = roll_die(rng, self.faces);
        let roll = self.take(stops);
        debug!(
            stops,
            origin = %roll.origin.name,
            destination = %roll.destination.name,
            "Rolled dice"
        );
        roll
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        /// Every roll lands on a face of the die
        #[test]
        fn roll_within_faces(seed in any::<u64>(), faces in 1u32..=20) {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = roll_die(&mut rng, faces);
            prop_assert!((1..=faces).contains(&value));
        }
    }
}
