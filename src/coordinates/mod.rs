//! Coordinate types and textual representations
//!
//! The [`Coordinate`] pair is the value every operation in this crate
//! consumes or produces. Textual conversions live in the [`dms`] and
//! [`freeform`] submodules.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dms;
pub mod freeform;

/// A geographic position as a (longitude, latitude) pair in decimal degrees
///
/// Longitude is conventionally within [-180, 180] and latitude within
/// [-90, 90], but no range is enforced; values are taken as supplied.
/// Negative longitude is west of the prime meridian, negative latitude is
/// south of the equator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Latitude in decimal degrees
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees, longitude first
    pub fn new(lon: f64, lat: f64) -> Self {
        Coordinate { lon, lat }
    }

    /// Longitude and latitude in radians, in that order
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lon.to_radians(), self.lat.to_radians())
    }

    /// Render as degrees-minutes-seconds text with hemisphere letters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nesw::Coordinate;
    ///
    /// let greenwich = Coordinate::new(-0.0875, 51.5085);
    /// assert_eq!(greenwich.to_dms_text(), "00°05'15.00\"W 51°30'30.60\"N");
    /// ```
    pub fn to_dms_text(&self) -> String {
        dms::coordinate_to_dms_text(*self)
    }

    /// Great-circle distance to another coordinate in metres
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::great_circle_distance(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Coordinate { lon, lat }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dms_text())
    }
}
