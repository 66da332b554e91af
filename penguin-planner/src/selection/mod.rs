//! Selection engine.
//!
//! Stateless queries over the immutable catalogs:
//!
//! - which activities match a filter,
//! - which station lies N stops down the line,
//! - which date can take a party of a given size.
//!
//! Callers own all mutable view state and pass it in.

mod availability;
mod config;
mod filter;
mod offset;

pub use availability::{ReservationQuote, find_availability, is_bookable, quote, select_date};
pub use config::SelectionConfig;
pub use filter::{FilterCriteria, PriceRange, filter_activities};
pub use offset::resolve_destination;
