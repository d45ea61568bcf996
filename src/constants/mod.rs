//! Constants for coordinate conversion and distance calculations

// Earth constants
/// Earth radius in metres, calibrated for central UK latitudes rather than
/// the global mean radius
pub const EARTH_RADIUS_UK_M: f64 = 6_364_900.0;

// Sexagesimal ratios
/// Arcminutes in a degree
pub const ARCMIN_PER_DEG: f64 = 60.0;
/// Arcseconds in a degree
pub const ARCSEC_PER_DEG: f64 = 3_600.0;

// Parsing
/// Decimal places kept when a DMS block is decoded to decimal degrees
pub const DMS_DECODE_DECIMALS: i32 = 10;
