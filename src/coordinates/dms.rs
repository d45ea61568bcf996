//! Degrees-minutes-seconds text conversion
//!
//! A coordinate pair is rendered as two sexagesimal blocks terminated by
//! hemisphere letters, longitude first: `01°30'00.00"W 51°30'00.00"N`.
//! Parsing accepts the blocks in either order and tolerates loose
//! punctuation: a fixed set of separator characters is stripped before the
//! text is scanned, so `01° 30' 00.00" W, 51° 30' 00.00" N` decodes the
//! same way. Hemisphere letters are the block terminators, so each of N/S
//! and E/W may capture at most one block.

use crate::constants::{ARCMIN_PER_DEG, ARCSEC_PER_DEG, DMS_DECODE_DECIMALS};
use crate::coordinates::Coordinate;
use crate::{CoordError, Result};

/// Punctuation stripped from the whole input before hemisphere scanning
const SEPARATORS: [char; 8] = [' ', ',', ':', ';', '-', '&', '/', '\\'];

/// Symbols that delimit degrees, minutes and seconds inside a block
const DMS_SYMBOLS: [char; 3] = ['°', '\'', '"'];

/// Format a coordinate as DMS text with hemisphere letters
///
/// Each axis is rendered as `DD°MM'SS.SS"H`, degrees and minutes zero-padded
/// to two digits and seconds to width five with two decimals. The sign of
/// the input selects the hemisphere letter; magnitudes are never range
/// checked. The result is the longitude block, a space, then the latitude
/// block.
///
/// # Examples
///
/// ```rust
/// use nesw::{coordinate_to_dms_text, Coordinate};
///
/// let text = coordinate_to_dms_text(Coordinate::new(-1.5, 51.5));
/// assert_eq!(text, "01°30'00.00\"W 51°30'00.00\"N");
/// ```
pub fn coordinate_to_dms_text(coordinate: Coordinate) -> String {
    let lon = axis_to_dms(coordinate.lon, 'E', 'W');
    let lat = axis_to_dms(coordinate.lat, 'N', 'S');
    format!("{} {}", lon, lat)
}

/// Render one axis as `DD°MM'SS.SS"H`
fn axis_to_dms(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let remainder = (magnitude - degrees) * ARCMIN_PER_DEG;
    let minutes = remainder.trunc();
    let seconds = (remainder - minutes) * 60.0;
    format!(
        "{:02}°{:02}'{:05.2}\"{}",
        degrees as u32, minutes as u32, seconds, hemisphere
    )
}

/// Accumulated block text for each hemisphere letter
#[derive(Debug, Default)]
struct HemisphereSlots {
    north: String,
    east: String,
    south: String,
    west: String,
}

/// Parse DMS text with hemisphere letters into a decimal coordinate pair
///
/// Separator punctuation is stripped, then the text is scanned once: every
/// uppercase N, E, S or W assigns the characters accumulated since the last
/// letter to that hemisphere's slot. At most one slot per axis may be
/// filled ([`CoordError::InvariantViolation`] otherwise); the filled slot
/// decides the sign. Each captured block must split on `°`, `'` and `"`
/// into exactly three numeric fragments ([`CoordError::NumericParse`]
/// otherwise), decoded as d + m/60 + s/3600 and rounded to ten decimal
/// places.
///
/// # Examples
///
/// ```rust
/// use nesw::dms_text_to_coordinate;
///
/// let coordinate = dms_text_to_coordinate("01°30'00.00\"W 51°30'00.00\"N").unwrap();
/// assert_eq!((coordinate.lon, coordinate.lat), (-1.5, 51.5));
/// ```
pub fn dms_text_to_coordinate(text: &str) -> Result<Coordinate> {
    let cleaned: String = text.chars().filter(|c| !SEPARATORS.contains(c)).collect();

    let mut slots = HemisphereSlots::default();
    let mut buffer = String::new();
    for c in cleaned.chars() {
        match c {
            'N' => slots.north = std::mem::take(&mut buffer),
            'E' => slots.east = std::mem::take(&mut buffer),
            'S' => slots.south = std::mem::take(&mut buffer),
            'W' => slots.west = std::mem::take(&mut buffer),
            _ => buffer.push(c),
        }
    }

    if !slots.north.is_empty() && !slots.south.is_empty() {
        return Err(CoordError::InvariantViolation(
            "both N and S hemisphere blocks present".to_string(),
        ));
    }
    if !slots.east.is_empty() && !slots.west.is_empty() {
        return Err(CoordError::InvariantViolation(
            "both E and W hemisphere blocks present".to_string(),
        ));
    }

    // An axis whose slots are all empty falls through to decode_axis, which
    // rejects the empty block as a numeric parse failure.
    let (lat_block, south) = if slots.south.is_empty() {
        (slots.north, false)
    } else {
        (slots.south, true)
    };
    let (lon_block, west) = if slots.west.is_empty() {
        (slots.east, false)
    } else {
        (slots.west, true)
    };

    let lon = decode_axis(&lon_block)?;
    let lat = decode_axis(&lat_block)?;
    if lon < 0.0 || lat < 0.0 {
        return Err(CoordError::InvariantViolation(format!(
            "negative DMS magnitude: lon {}, lat {}",
            lon, lat
        )));
    }

    Ok(Coordinate::new(
        if west { -lon } else { lon },
        if south { -lat } else { lat },
    ))
}

/// Decode one captured block into decimal degrees
fn decode_axis(block: &str) -> Result<f64> {
    let fragments: Vec<&str> = block
        .split(DMS_SYMBOLS)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let (degrees, minutes, seconds) = match fragments.as_slice() {
        [degrees, minutes, seconds] => (*degrees, *minutes, *seconds),
        _ => {
            return Err(CoordError::NumericParse(format!(
                "expected degrees, minutes and seconds in {:?}, found {} fragment(s)",
                block,
                fragments.len()
            )))
        }
    };

    let value = parse_fragment(degrees)?
        + parse_fragment(minutes)? / ARCMIN_PER_DEG
        + parse_fragment(seconds)? / ARCSEC_PER_DEG;

    let scale = 10f64.powi(DMS_DECODE_DECIMALS);
    Ok((value * scale).round() / scale)
}

fn parse_fragment(fragment: &str) -> Result<f64> {
    fragment
        .parse()
        .map_err(|err| CoordError::NumericParse(format!("{:?}: {}", fragment, err)))
}
