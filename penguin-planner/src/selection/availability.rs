//! Availability lookup and date selection for reservations.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Activity, AvailabilityLevel, AvailabilitySlot, Price};

/// Find the first slot on the same calendar day as `at`.
pub fn find_availability(
    slots: &[AvailabilitySlot],
    at: NaiveDateTime,
) -> Option<&AvailabilitySlot> {
    slots.iter().find(|s| s.is_on(at))
}

/// Returns true if a slot was found and has room for the whole party.
pub fn is_bookable(slot: Option<&AvailabilitySlot>, party_size: u32) -> bool {
    slot.is_some_and(|s| s.remaining() >= party_size)
}

/// Resolve a newly picked date.
///
/// If `picked` falls on a sold-out slot, the selection moves to the first
/// slot (in sequence order) that still has spots. If every slot is sold
/// out, or the date has no slot at all, `picked` is kept.
pub fn select_date(slots: &[AvailabilitySlot], picked: NaiveDateTime) -> NaiveDateTime {
    match find_availability(slots, picked) {
        Some(slot) if slot.is_sold_out() => match slots.iter().find(|s| !s.is_sold_out()) {
            Some(next) => {
                debug!(
                    picked = %picked.date(),
                    redirected = %next.date(),
                    "Picked date is sold out, redirecting"
                );
                next.at()
            }
            None => picked,
        },
        _ => picked,
    }
}

/// Price and availability for a prospective reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationQuote {
    pub party_size: u32,
    pub unit_price: Price,
    pub total: Price,
    /// Remaining spots on the chosen date, if the date has a slot
    pub remaining: Option<u32>,
    pub level: Option<AvailabilityLevel>,
    pub bookable: bool,
}

/// Quote a reservation of `activity` for `party_size` people on `slot`.
pub fn quote(
    activity: &Activity,
    slot: Option<&AvailabilitySlot>,
    party_size: u32,
    limited_below: u32,
) -> ReservationQuote {
    ReservationQuote {
        party_size,
        unit_price: activity.price,
        total: activity.price.times(party_size),
        remaining: slot.map(|s| s.remaining()),
        level: slot.map(|s| s.level(limited_below)),
        bookable: is_bookable(slot, party_size),
    }
}
