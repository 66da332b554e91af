//! Web layer for the activity planner.
//!
//! Exposes the selection engine as JSON endpoints for the app client.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
