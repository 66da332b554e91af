//! MRT station types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// The MRT line (or lines, at an interchange) a station is on.
///
/// A line code is one or more codes of 2-3 uppercase ASCII letters,
/// separated by `/`. Interchanges list every line they serve.
///
/// # Examples
///
/// ```
/// use penguin_planner::domain::LineCode;
///
/// let ns = LineCode::parse("NS").unwrap();
/// assert_eq!(ns.as_str(), "NS");
///
/// let interchange = LineCode::parse("NS/EW").unwrap();
/// assert!(interchange.serves("EW"));
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("ns").is_err());
///
/// // Empty segments are rejected
/// assert!(LineCode::parse("NS/").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() {
            return Err(InvalidLineCode {
                reason: "must not be empty",
            });
        }

        for segment in s.split('/') {
            if !(2..=3).contains(&segment.len()) {
                return Err(InvalidLineCode {
                    reason: "each line must be 2 or 3 characters",
                });
            }
            if !segment.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(InvalidLineCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(LineCode(s.to_string()))
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the individual lines served.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Returns true if `line` is one of the lines served.
    pub fn serves(&self, line: &str) -> bool {
        self.lines().any(|l| l == line)
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station and its position along the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub name: String,
    pub line: LineCode,
    /// Position along the line, used for offset lookup
    pub ordinal: u32,
}

impl Station {
    /// Create a station.
    pub fn new(name: impl Into<String>, line: LineCode, ordinal: u32) -> Self {
        Self {
            name: name.into(),
            line,
            ordinal,
        }
    }
}
