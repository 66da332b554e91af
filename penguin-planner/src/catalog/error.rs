//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::{ActivityId, DomainError, InvalidLineCode};

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the catalog schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates a domain invariant
    #[error("invalid record: {0}")]
    Domain(#[from] DomainError),

    /// A station's line code is malformed
    #[error("station {name}: {source}")]
    LineCode {
        name: String,
        source: InvalidLineCode,
    },

    /// Two activities share an identifier
    #[error("duplicate activity id {0}")]
    DuplicateActivity(ActivityId),

    /// An availability record has neither a date nor a day offset
    #[error("availability record {index} needs either `date` or `day_offset`")]
    MissingDate { index: usize },

    /// An availability record's day offset lands outside the supported calendar
    #[error("availability record {index} has a day offset out of range")]
    DateOutOfRange { index: usize },
}
