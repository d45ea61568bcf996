//! Free-form coordinate text normalisation and validation

use log::warn;

use crate::coordinates::dms::dms_text_to_coordinate;
use crate::coordinates::Coordinate;
use crate::{CoordError, Result};

/// Characters whose presence marks input as DMS text
const DMS_MARKERS: [char; 7] = ['N', 'E', 'S', 'W', '°', '\'', '"'];

/// Normalise free-form coordinate text into a decimal coordinate pair
///
/// If the input contains any DMS marker (hemisphere letter, case
/// insensitive, or one of `°`, `'`, `"`) it is parsed as DMS text with
/// [`dms_text_to_coordinate`]. Anything else is treated as decimal
/// `lon, lat` text: split on the comma, trimmed and parsed. Marker
/// detection is deliberately blunt: a stray hemisphere letter anywhere in
/// otherwise-decimal text forces the DMS interpretation.
///
/// # Examples
///
/// ```rust
/// use nesw::normalise;
///
/// let decimal = normalise("-1.5, 51.5").unwrap();
/// assert_eq!((decimal.lon, decimal.lat), (-1.5, 51.5));
///
/// let sexagesimal = normalise("1°30'0\"E 51°30'0\"N").unwrap();
/// assert_eq!((sexagesimal.lon, sexagesimal.lat), (1.5, 51.5));
/// ```
pub fn normalise(text: &str) -> Result<Coordinate> {
    let upper = text.to_uppercase();
    if upper.chars().any(|c| DMS_MARKERS.contains(&c)) {
        return dms_text_to_coordinate(text);
    }

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() < 2 {
        return Err(CoordError::MissingField(format!(
            "expected \"lon, lat\", found {} field(s) in {:?}",
            parts.len(),
            text
        )));
    }
    let lon = parse_decimal(parts[0])?;
    let lat = parse_decimal(parts[1])?;
    Ok(Coordinate::new(lon, lat))
}

fn parse_decimal(part: &str) -> Result<f64> {
    let trimmed = part.trim();
    trimmed
        .parse()
        .map_err(|err| CoordError::NumericParse(format!("{:?}: {}", trimmed, err)))
}

/// Check whether text normalises to a coordinate pair
///
/// Returns `true` when [`normalise`] succeeds. The three expected bad-input
/// error kinds each log a distinguishing diagnostic and yield `false`; the
/// error set is closed, so nothing else is swallowed here.
///
/// # Examples
///
/// ```rust
/// use nesw::is_valid_coordinate_text;
///
/// assert!(is_valid_coordinate_text("1.5, 51.5"));
/// assert!(!is_valid_coordinate_text("not a coordinate"));
/// ```
pub fn is_valid_coordinate_text(text: &str) -> bool {
    match normalise(text) {
        Ok(_) => true,
        Err(err) => {
            match err {
                CoordError::NumericParse(_) => {
                    warn!("Numeric parse failure in coordinate check: {}", err)
                }
                CoordError::InvariantViolation(_) => {
                    warn!("Invariant failure in coordinate check: {}", err)
                }
                CoordError::MissingField(_) => {
                    warn!("Missing field in coordinate check: {}", err)
                }
            }
            false
        }
    }
}
