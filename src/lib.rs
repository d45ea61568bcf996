//! Nesw: geographic coordinate text handling and great-circle distances
//!
//! This crate converts between decimal longitude/latitude pairs and
//! sexagesimal degrees-minutes-seconds text with N/E/S/W hemisphere letters,
//! normalises free-form coordinate input into the canonical decimal form,
//! and computes haversine great-circle distances between points.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod distance;

// Re-export commonly used types and operations
pub use coordinates::dms::{coordinate_to_dms_text, dms_text_to_coordinate};
pub use coordinates::freeform::{is_valid_coordinate_text, normalise};
pub use coordinates::Coordinate;
pub use distance::great_circle_distance;

/// Main error type for the nesw library
///
/// The set is deliberately closed: these three kinds are the only failure
/// shapes textual coordinate input is expected to produce, and
/// [`is_valid_coordinate_text`] converts exactly these into `false`.
#[derive(Debug, Error)]
pub enum CoordError {
    /// A text fragment that should hold a number did not parse as one
    #[error("Numeric parse error: {0}")]
    NumericParse(String),

    /// A hemisphere-letter or sign constraint was broken
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Fewer textual fields were present than required
    #[error("Missing field: {0}")]
    MissingField(String),
}

/// Result type for nesw operations
pub type Result<T> = std::result::Result<T, CoordError>;
