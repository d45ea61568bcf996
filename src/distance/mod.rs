//! Great-circle distance between coordinate pairs
//!
//! Uses the haversine formula over a sphere of radius
//! [`EARTH_RADIUS_UK_M`], a value calibrated for central UK latitudes.
//! Distances elsewhere on the globe are correspondingly biased.

use crate::constants::EARTH_RADIUS_UK_M;
use crate::coordinates::Coordinate;

/// Haversine great-circle distance between two coordinates in metres
///
/// Identical points give 0; the result is always non-negative for finite
/// input.
///
/// # Examples
///
/// ```rust
/// use nesw::{great_circle_distance, Coordinate};
///
/// let swindon = Coordinate::new(-1.78, 51.56);
/// let reading = Coordinate::new(-0.97, 51.45);
/// let metres = great_circle_distance(swindon, reading);
/// assert!((metres - 57_340.0).abs() < 1_000.0);
/// ```
pub fn great_circle_distance(start: Coordinate, end: Coordinate) -> f64 {
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();
    let lat_delta = (end.lat - start.lat).to_radians();
    let lon_delta = (end.lon - start.lon).to_radians();

    let a = (lat_delta / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (lon_delta / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_UK_M * c
}
