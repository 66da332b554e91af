//! Station-offset lookup for the dice planner.

use tracing::debug;

use crate::domain::Station;

/// Find the station `stops` stops beyond `from`.
///
/// The target is the station whose ordinal equals `from.ordinal + stops`.
/// If no station has that ordinal, the last station in `stations` is
/// returned instead: rolls that run off the end of the line stop at the
/// terminus. Returns `None` only when `stations` is empty.
///
/// # Examples
///
/// ```
/// use penguin_planner::domain::{LineCode, Station};
/// use penguin_planner::selection::resolve_destination;
///
/// let ns = LineCode::parse("NS").unwrap();
/// let stations = vec![
///     Station::new("Jurong East", ns.clone(), 1),
///     Station::new("Bukit Batok", ns.clone(), 2),
///     Station::new("Bukit Gombak", ns, 3),
/// ];
///
/// let dest = resolve_destination(&stations, &stations[0], 2).unwrap();
/// assert_eq!(dest.name, "Bukit Gombak");
///
/// // Past the end of the line
/// let dest = resolve_destination(&stations, &stations[0], 5).unwrap();
/// assert_eq!(dest.name, "Bukit Gombak");
/// ```
pub fn resolve_destination<'a>(
    stations: &'a [Station],
    from: &Station,
    stops: u32,
) -> Option<&'a Station> {
    let target = from.ordinal.saturating_add(stops);

    stations
        .iter()
        .find(|s| s.ordinal == target)
        .or_else(|| {
            debug!(
                from = %from.name,
                stops,
                target,
                "No station at target ordinal, clamping to end of line"
            );
            stations.last()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCode;

    fn ns_line() -> Vec<Station> {
        let ns = LineCode::parse("NS").unwrap();
        [
            "Jurong East",
            "Bukit Batok",
            "Bukit Gombak",
            "Choa Chu Kang",
            "Yew Tee",
            "Kranji",
            "Marsiling",
            "Woodlands",
        ]
        .into_iter()
        .zip(1..)
        .map(|(name, ordinal)| Station::new(name, ns.clone(), ordinal))
        .collect()
    }

    #[test]
    fn six_stops_from_jurong_east() {
        let stations = ns_line();
        let dest = resolve_destination(&stations, &stations[0], 6).unwrap();
        assert_eq!(dest.name, "Marsiling");
        assert_eq!(dest.ordinal, 7);
    }

    #[test]
    fn every_die_face_from_the_start() {
        let stations = ns_line();
        for stops in 1..=6 {
            let dest = resolve_destination(&stations, &stations[0], stops).unwrap();
            assert_eq!(dest.ordinal, 1 + stops);
        }
    }

    #[test]
    fn past_the_end_clamps_to_last_station() {
        let stations = ns_line();
        let dest = resolve_destination(&stations, &stations[0], 10).unwrap();
        assert_eq!(dest.name, "Woodlands");
        assert_eq!(dest.ordinal, 8);
    }

    #[test]
    fn clamp_uses_input_order_not_highest_ordinal() {
        let ns = LineCode::parse("NS").unwrap();
        let stations = vec![
            Station::new("Woodlands", ns.clone(), 8),
            Station::new("Jurong East", ns.clone(), 1),
            Station::new("Kranji", ns, 6),
        ];
        let dest = resolve_destination(&stations, &stations[1], 3).unwrap();
        assert_eq!(dest.name, "Kranji");
    }

    #[test]
    fn gap_in_ordinals_clamps_rather_than_skipping() {
        let ns = LineCode::parse("NS").unwrap();
        let stations = vec![
            Station::new("Jurong East", ns.clone(), 1),
            Station::new("Choa Chu Kang", ns.clone(), 4),
            Station::new("Woodlands", ns, 8),
        ];
        let dest = resolve_destination(&stations, &stations[0], 2).unwrap();
        assert_eq!(dest.name, "Woodlands");
    }

    #[test]
    fn from_a_station_outside_the_catalog() {
        let stations = ns_line();
        let elsewhere = Station::new("Kranji", LineCode::parse("NS").unwrap(), 6);
        let dest = resolve_destination(&stations, &elsewhere, 1).unwrap();
        assert_eq!(dest.name, "Marsiling");
    }

    #[test]
    fn zero_stops_is_the_origin() {
        let stations = ns_line();
        let dest = resolve_destination(&stations, &stations[3], 0).unwrap();
        assert_eq!(dest, &stations[3]);
    }

    #[test]
    fn empty_catalog_has_no_destination() {
        let from = Station::new("Jurong East", LineCode::parse("NS").unwrap(), 1);
        assert!(resolve_destination(&[], &from, 3).is_none());
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let stations = ns_line();
        let far = Station::new("Far", LineCode::parse("NS").unwrap(), u32::MAX);
        let dest = resolve_destination(&stations, &far, 6).unwrap();
        assert_eq!(dest.name, "Woodlands");
    }
}
