//! Domain types for the activity planner.
//!
//! This module contains the core domain model types: activities, MRT
//! stations and booking slots. All types enforce their invariants at
//! construction time, so the selection functions that receive them can
//! trust their validity.

mod activity;
mod availability;
mod error;
mod station;

pub use activity::{Activity, ActivityCategory, ActivityId, ActivityTag, Price, Rating, TagSet};
pub use availability::{AvailabilityLevel, AvailabilitySlot};
pub use error::DomainError;
pub use station::{InvalidLineCode, LineCode, Station};
