//! Round-trip tests between decimal coordinates and their textual forms

use nesw::{coordinate_to_dms_text, dms_text_to_coordinate, normalise, Coordinate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Seconds are rendered with two decimals, so a round trip is exact to about
// half of 0.01 arcseconds; 1e-4 degrees is a comfortable bound.
const ROUND_TRIP_TOLERANCE_DEG: f64 = 1e-4;

#[test]
fn test_dms_text_round_trip() {
    let mut rng = StdRng::seed_from_u64(424242); // Fixed seed for reproducibility
    for i in 0..500 {
        let lon = (rng.gen::<f64>() - 0.5) * 2.0 * 179.99;
        let lat = (rng.gen::<f64>() - 0.5) * 2.0 * 89.99;

        let text = coordinate_to_dms_text(Coordinate::new(lon, lat));
        let parsed = dms_text_to_coordinate(&text).unwrap();

        assert!(
            (parsed.lon - lon).abs() < ROUND_TRIP_TOLERANCE_DEG,
            "iteration {}: lon {} -> {:?} -> {}",
            i,
            lon,
            text,
            parsed.lon
        );
        assert!(
            (parsed.lat - lat).abs() < ROUND_TRIP_TOLERANCE_DEG,
            "iteration {}: lat {} -> {:?} -> {}",
            i,
            lat,
            text,
            parsed.lat
        );
    }
}

#[test]
fn test_decimal_text_round_trip() {
    let mut rng = StdRng::seed_from_u64(171717);
    for i in 0..500 {
        let lon = (rng.gen::<f64>() - 0.5) * 2.0 * 179.99;
        let lat = (rng.gen::<f64>() - 0.5) * 2.0 * 89.99;

        // f64 Display never produces exponent notation, so the text stays on
        // the decimal path and parses back exactly.
        let text = format!("{}, {}", lon, lat);
        let parsed = normalise(&text).unwrap();

        assert_eq!(parsed.lon, lon, "iteration {}: {:?}", i, text);
        assert_eq!(parsed.lat, lat, "iteration {}: {:?}", i, text);
    }
}

#[test]
fn test_dms_round_trip_near_axis_boundaries() {
    for &(lon, lat) in &[
        (179.99, 89.99),
        (-179.99, -89.99),
        (0.0, 0.0),
        (-0.001, 0.001),
        (179.999_9, -0.000_1),
    ] {
        let text = coordinate_to_dms_text(Coordinate::new(lon, lat));
        let parsed = dms_text_to_coordinate(&text).unwrap();
        assert!(
            (parsed.lon - lon).abs() < ROUND_TRIP_TOLERANCE_DEG,
            "lon {} -> {:?} -> {}",
            lon,
            text,
            parsed.lon
        );
        assert!(
            (parsed.lat - lat).abs() < ROUND_TRIP_TOLERANCE_DEG,
            "lat {} -> {:?} -> {}",
            lat,
            text,
            parsed.lat
        );
    }
}
