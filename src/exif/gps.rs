//! GPS coordinate conversion
//!
//! Turns an already-decoded reference letter and degrees/minutes/seconds
//! rational triple into signed decimal degrees.

use crate::exif::value::Rational;
use crate::utils::string_utils;

/// Which coordinate a reference letter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsAxis {
    Latitude,
    Longitude,
}

impl GpsAxis {
    /// Sign for a hemisphere letter, `None` when the letter is not valid for this axis
    fn sign(&self, reference: &str) -> Option<f64> {
        match (self, reference) {
            (GpsAxis::Latitude, "N") | (GpsAxis::Longitude, "E") => Some(1.0),
            (GpsAxis::Latitude, "S") | (GpsAxis::Longitude, "W") => Some(-1.0),
            _ => None,
        }
    }
}

/// Converts a reference and (degrees, minutes, seconds) into decimal degrees
///
/// The reference is compared case-insensitively after trimming padding and
/// NUL terminators. Returns `None` for fewer than three components or a
/// reference that does not name a hemisphere of `axis`.
pub fn to_decimal_degrees(reference: &str, coordinates: &[Rational], axis: GpsAxis) -> Option<f64> {
    let [degrees, minutes, seconds] = coordinates.get(..3)? else {
        return None;
    };
    let reference = string_utils::trim_padding(reference).to_ascii_uppercase();
    let sign = axis.sign(&reference)?;

    Some(sign * (degrees.value() + minutes.value() / 60.0 + seconds.value() / 3600.0))
}
