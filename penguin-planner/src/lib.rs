//! Activity planner server.
//!
//! Selection logic behind a social activity-planning app: filter the
//! activity catalog, roll a die to pick an MRT station a few stops away,
//! and check which dates can take a party. The home feed and the map
//! planner's itinerary are served alongside.

pub mod catalog;
pub mod config;
pub mod dice;
pub mod domain;
pub mod feed;
pub mod menu;
pub mod profile;
pub mod selection;
pub mod timer;
pub mod trip;
pub mod web;
