//! EXIF tag utilities
//!
//! Helpers for naming tags and field formats in log output and listings.

use crate::exif::constants::{compression, field_types};

/// Label used for tag codes missing from the catalog
pub const UNKNOWN_TAG_NAME: &str = "Unknown";

/// Formats a tag title such as `0x010F Make`, or `0x1234 Unknown`
pub fn tag_title(code: u16, name: Option<&str>) -> String {
    format!("0x{:04X} {}", code, name.unwrap_or(UNKNOWN_TAG_NAME))
}

/// Get the name of a field format
///
/// Returns a human-readable name and element size for a format code.
pub fn get_field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "unsigned byte (1 byte)",
        field_types::ASCII => "ascii string (1 byte)",
        field_types::SHORT => "unsigned short (2 bytes)",
        field_types::LONG => "unsigned long (4 bytes)",
        field_types::RATIONAL => "unsigned rational (8 bytes)",
        field_types::SBYTE => "signed byte (1 byte)",
        field_types::UNDEFINED => "undefined (1 byte)",
        field_types::SSHORT => "signed short (2 bytes)",
        field_types::SLONG => "signed long (4 bytes)",
        field_types::SRATIONAL => "signed rational (8 bytes)",
        field_types::FLOAT => "single float (4 bytes)",
        field_types::DOUBLE => "double float (8 bytes)",
        field_types::IFD => "offset to sub-directory (4 bytes)",
        _ => "Unknown",
    }
}

/// Get the name of a thumbnail compression method
pub fn get_compression_name(compression_code: u32) -> &'static str {
    match compression_code {
        compression::NONE => "Uncompressed",
        compression::JPEG_OLD => "JPEG (old-style)",
        compression::JPEG => "JPEG",
        _ => "Unknown",
    }
}
