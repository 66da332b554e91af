//! Domain error types.
//!
//! These errors represent validation failures when constructing domain
//! values. They are distinct from catalog I/O and web errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Price is negative or not a finite number
    #[error("invalid price {0}: must be a finite, non-negative amount")]
    InvalidPrice(f64),

    /// Rating is outside 0-5
    #[error("invalid rating {0}: must be between 0 and 5")]
    InvalidRating(f64),

    /// Remaining capacity exceeds the total
    #[error("invalid capacity: {remaining} remaining exceeds {total} total")]
    CapacityExceeded { remaining: u32, total: u32 },

    /// Station ordinals must increase along the line
    #[error("station {name} has ordinal {ordinal}, expected more than {previous}")]
    OrdinalNotIncreasing {
        name: String,
        ordinal: u32,
        previous: u32,
    },

    /// Unknown activity category label
    #[error("unknown activity category: {0}")]
    UnknownCategory(String),

    /// Unknown activity tag label
    #[error("unknown activity tag: {0}")]
    UnknownTag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidPrice(-1.0);
        assert_eq!(
            err.to_string(),
            "invalid price -1: must be a finite, non-negative amount"
        );

        let err = DomainError::InvalidRating(5.5);
        assert_eq!(err.to_string(), "invalid rating 5.5: must be between 0 and 5");

        let err = DomainError::CapacityExceeded {
            remaining: 21,
            total: 20,
        };
        assert_eq!(
            err.to_string(),
            "invalid capacity: 21 remaining exceeds 20 total"
        );

        let err = DomainError::OrdinalNotIncreasing {
            name: "Kranji".into(),
            ordinal: 3,
            previous: 5,
        };
        assert_eq!(
            err.to_string(),
            "station Kranji has ordinal 3, expected more than 5"
        );

        let err = DomainError::UnknownTag("Karaoke".into());
        assert_eq!(err.to_string(), "unknown activity tag: Karaoke");
    }
}
