//! Booking capacity for a single date.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::error::DomainError;

/// How full a slot is, as shown in the reservation legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityLevel {
    Available,
    Limited,
    SoldOut,
}

impl AvailabilityLevel {
    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityLevel::Available => "Available",
            AvailabilityLevel::Limited => "Limited",
            AvailabilityLevel::SoldOut => "Sold Out",
        }
    }
}

/// Capacity for one bookable date.
///
/// The timestamp carries a time of day, but lookups match on the calendar
/// day only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilitySlot {
    at: NaiveDateTime,
    total: u32,
    remaining: u32,
}

impl AvailabilitySlot {
    /// Create a slot. Fails if `remaining` exceeds `total`.
    pub fn new(at: NaiveDateTime, total: u32, remaining: u32) -> Result<Self, DomainError> {
        if remaining > total {
            return Err(DomainError::CapacityExceeded { remaining, total });
        }
        Ok(Self {
            at,
            total,
            remaining,
        })
    }

    /// Returns the slot's timestamp.
    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// Returns the calendar day of the slot.
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    /// Total spots.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Spots still bookable.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true if no spots remain.
    pub fn is_sold_out(&self) -> bool {
        self.remaining == 0
    }

    /// Returns true if the slot falls on the same calendar day as `at`.
    pub fn is_on(&self, at: NaiveDateTime) -> bool {
        self.date() == at.date()
    }

    /// Legend level, given the threshold under which spots are "limited".
    pub fn level(&self, limited_below: u32) -> AvailabilityLevel {
        if self.is_sold_out() {
            AvailabilityLevel::SoldOut
        } else if self.remaining < limited_below {
            AvailabilityLevel::Limited
        } else {
            AvailabilityLevel::Available
        }
    }
}
