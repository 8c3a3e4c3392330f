//! Tests for GPS coordinate conversion

extern crate std;

use crate::exif::gps::{to_decimal_degrees, GpsAxis};
use crate::exif::value::Rational;

fn dms(degrees: i32, minutes: i32, seconds: i32) -> Vec<Rational> {
    vec![Rational::new(degrees, 1), Rational::new(minutes, 1), Rational::new(seconds, 1)]
}

#[test]
fn test_north_latitude() {
    let value = to_decimal_degrees("N", &dms(48, 1, 0), GpsAxis::Latitude).unwrap();
    std::assert!((value - 48.016_666).abs() < 1e-5);
}

#[test]
fn test_south_latitude_is_negated() {
    let value = to_decimal_degrees("S", &dms(48, 1, 0), GpsAxis::Latitude).unwrap();
    std::assert!((value + 48.016_666).abs() < 1e-5);
}

#[test]
fn test_longitude_hemispheres() {
    let east = to_decimal_degrees("E", &dms(2, 30, 36), GpsAxis::Longitude).unwrap();
    let west = to_decimal_degrees("W", &dms(2, 30, 36), GpsAxis::Longitude).unwrap();
    std::assert!((east - 2.51).abs() < 1e-9);
    std::assert!((west + 2.51).abs() < 1e-9);
}

#[test]
fn test_reference_padding_and_case() {
    let value = to_decimal_degrees("n\0", &dms(10, 0, 0), GpsAxis::Latitude).unwrap();
    std::assert_eq!(value, 10.0);
}

#[test]
fn test_reference_must_match_axis() {
    std::assert_eq!(to_decimal_degrees("E", &dms(10, 0, 0), GpsAxis::Latitude), None);
    std::assert_eq!(to_decimal_degrees("N", &dms(10, 0, 0), GpsAxis::Longitude), None);
    std::assert_eq!(to_decimal_degrees("?", &dms(10, 0, 0), GpsAxis::Latitude), None);
}

#[test]
fn test_too_few_components() {
    let coords = vec![Rational::new(48, 1), Rational::new(1, 1)];
    std::assert_eq!(to_decimal_degrees("N", &coords, GpsAxis::Latitude), None);
}

#[test]
fn test_fractional_seconds_and_zero_denominator() {
    let coords = vec![Rational::new(1, 1), Rational::new(0, 0), Rational::new(1800, 100)];
    let value = to_decimal_degrees("N", &coords, GpsAxis::Latitude).unwrap();
    std::assert!((value - 1.005).abs() < 1e-9);
}
