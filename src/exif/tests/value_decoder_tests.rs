//! Tests for per-format value decoding and the tag override table

extern crate std;

use std::io::{Cursor, Seek};
use byteorder::{LittleEndian, WriteBytesExt};

use crate::exif::constants::{field_types, tags};
use crate::exif::errors::ExifError;
use crate::exif::ifd::DirectoryEntry;
use crate::exif::value::{DecodedValue, Rational};
use crate::exif::value_decoder::{decode_value, ValueContext};
use crate::io::byte_order::{BigEndianHandler, LittleEndianHandler};

fn entry(tag: u16, format: u16, count: u32, raw: [u8; 4]) -> DirectoryEntry {
    DirectoryEntry { tag, format, count, raw }
}

/// Decodes a little-endian record against `data`, with the header base at 0
fn decode_le(entry: &DirectoryEntry, data: Vec<u8>) -> DecodedValue {
    let ctx = ValueContext { handler: &LittleEndianHandler, base: 0 };
    let mut cursor = Cursor::new(data);
    decode_value(entry, &ctx, &mut cursor).unwrap()
}

#[test]
fn test_inline_ascii_keeps_raw_bytes() {
    let value = decode_le(&entry(tags::MAKE, field_types::ASCII, 3, *b"ABC\0"), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("ABC".to_string()));

    // Count 4 keeps the terminator
    let value = decode_le(&entry(tags::MAKE, field_types::ASCII, 4, *b"ABC\0"), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("ABC\0".to_string()));
}

#[test]
fn test_out_of_line_ascii() {
    let mut data = vec![0u8; 16];
    data.extend_from_slice(b"Canon\0");

    let value = decode_le(&entry(tags::MAKE, field_types::ASCII, 6, [16, 0, 0, 0]), data);
    std::assert_eq!(value, DecodedValue::Text("Canon\0".to_string()));
}

#[test]
fn test_out_of_line_read_restores_position() {
    let mut data = vec![0u8; 8];
    data.extend_from_slice(b"Model X\0");
    let ctx = ValueContext { handler: &LittleEndianHandler, base: 0 };
    let mut cursor = Cursor::new(data);
    cursor.set_position(3);

    let record = entry(tags::MODEL, field_types::ASCII, 8, [8, 0, 0, 0]);
    decode_value(&record, &ctx, &mut cursor).unwrap();
    std::assert_eq!(cursor.stream_position().unwrap(), 3);
}

#[test]
fn test_offsets_are_relative_to_base() {
    let mut data = vec![0xEE; 10];
    data.extend_from_slice(b"XXXXX");
    let ctx = ValueContext { handler: &LittleEndianHandler, base: 10 };
    let mut cursor = Cursor::new(data);

    let record = entry(tags::MAKE, field_types::ASCII, 5, [0, 0, 0, 0]);
    let value = decode_value(&record, &ctx, &mut cursor).unwrap();
    std::assert_eq!(value, DecodedValue::Text("XXXXX".to_string()));
}

#[test]
fn test_short_ascii_read_is_fatal() {
    let ctx = ValueContext { handler: &LittleEndianHandler, base: 0 };
    let mut cursor = Cursor::new(vec![0u8; 10]);

    let record = entry(tags::MAKE, field_types::ASCII, 20, [4, 0, 0, 0]);
    let result = decode_value(&record, &ctx, &mut cursor);
    std::assert!(std::matches!(result, Err(ExifError::IoError(_))));
}

#[test]
fn test_short_and_long_single_values() {
    let value = decode_le(&entry(0x0112, field_types::SHORT, 1, [6, 0, 0xFF, 0xFF]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(6));

    let value = decode_le(&entry(0xA002, field_types::LONG, 1, [0x00, 0x01, 0x00, 0x00]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(256));
}

#[test]
fn test_big_endian_long() {
    let ctx = ValueContext { handler: &BigEndianHandler, base: 0 };
    let mut cursor = Cursor::new(Vec::new());

    let record = entry(0xA002, field_types::LONG, 1, [0x00, 0x01, 0x00, 0x00]);
    let value = decode_value(&record, &ctx, &mut cursor).unwrap();
    std::assert_eq!(value, DecodedValue::Integer(65_536));
}

#[test]
fn test_multi_count_short_and_long_are_absent() {
    let value = decode_le(&entry(0x0102, field_types::SHORT, 3, [8, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Absent);

    let value = decode_le(&entry(0x0111, field_types::LONG, 2, [8, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Absent);
}

#[test]
fn test_single_rational_is_always_out_of_line() {
    let mut data = Vec::new();
    data.write_u32::<LittleEndian>(0).unwrap();
    data.write_i32::<LittleEndian>(72).unwrap();
    data.write_i32::<LittleEndian>(1).unwrap();

    let value = decode_le(&entry(0x011A, field_types::RATIONAL, 1, [4, 0, 0, 0]), data);
    std::assert_eq!(value, DecodedValue::Rational(Rational::new(72, 1)));
}

#[test]
fn test_rational_sequence_in_file_order() {
    let mut data = Vec::new();
    for (n, d) in [(48, 1), (1, 1), (0, 1)] {
        data.write_i32::<LittleEndian>(n).unwrap();
        data.write_i32::<LittleEndian>(d).unwrap();
    }

    let value = decode_le(&entry(tags::GPS_LATITUDE, field_types::RATIONAL, 3, [0, 0, 0, 0]), data);
    std::assert_eq!(
        value,
        DecodedValue::RationalList(vec![Rational::new(48, 1), Rational::new(1, 1), Rational::new(0, 1)])
    );
}

#[test]
fn test_signed_rational_single_only() {
    let mut data = Vec::new();
    data.write_i32::<LittleEndian>(-1).unwrap();
    data.write_i32::<LittleEndian>(3).unwrap();
    data.write_i32::<LittleEndian>(5).unwrap();
    data.write_i32::<LittleEndian>(3).unwrap();

    let value = decode_le(&entry(0x9204, field_types::SRATIONAL, 1, [0, 0, 0, 0]), data.clone());
    std::assert_eq!(value, DecodedValue::Rational(Rational::new(-1, 3)));

    let value = decode_le(&entry(0x9204, field_types::SRATIONAL, 2, [0, 0, 0, 0]), data);
    std::assert_eq!(value, DecodedValue::Absent);
}

#[test]
fn test_unsupported_formats_are_absent() {
    for format in [field_types::SBYTE, field_types::SSHORT, field_types::SLONG, field_types::FLOAT, field_types::DOUBLE] {
        let value = decode_le(&entry(0x1234, format, 1, [1, 0, 0, 0]), Vec::new());
        std::assert_eq!(value, DecodedValue::Absent, "format {}", format);
    }
}

#[test]
fn test_byte_and_undefined_without_override_are_absent() {
    let value = decode_le(&entry(0x1234, field_types::BYTE, 1, [1, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Absent);

    let value = decode_le(&entry(0xA301, field_types::UNDEFINED, 4, [1, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Absent);
}

#[test]
fn test_gps_version_override() {
    let value = decode_le(&entry(tags::GPS_VERSION_ID, field_types::BYTE, 4, [2, 3, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("2.3.0.0".to_string()));

    // Other counts fall through to the generic rule
    let value = decode_le(&entry(tags::GPS_VERSION_ID, field_types::BYTE, 2, [2, 3, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Absent);
}

#[test]
fn test_gps_altitude_ref_override() {
    let value = decode_le(&entry(tags::GPS_ALTITUDE_REF, field_types::BYTE, 1, [1, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(1));
}

#[test]
fn test_version_overrides() {
    let value = decode_le(&entry(tags::EXIF_VERSION, field_types::UNDEFINED, 4, *b"0230"), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("0230".to_string()));

    let value = decode_le(&entry(tags::FLASHPIX_VERSION, field_types::UNDEFINED, 4, *b"0100"), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("0100".to_string()));
}

#[test]
fn test_component_configuration_override() {
    let value = decode_le(&entry(tags::COMPONENT_CONFIGURATION, field_types::UNDEFINED, 4, [1, 2, 3, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("1230".to_string()));
}

#[test]
fn test_single_integer_overrides() {
    let value = decode_le(&entry(tags::FILE_SOURCE, field_types::UNDEFINED, 1, [3, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(3));

    let value = decode_le(&entry(tags::SCENE_TYPE, field_types::UNDEFINED, 1, [1, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(1));
}

#[test]
fn test_processing_method_override() {
    let mut data = vec![0u8; 4];
    data.extend_from_slice(b"ASCII\0\0\0GPS");

    let record = entry(tags::GPS_PROCESSING_METHOD, field_types::UNDEFINED, 11, [4, 0, 0, 0]);
    let value = decode_le(&record, data);
    std::assert_eq!(value, DecodedValue::Text("ASCII\0\0\0GPS".to_string()));

    // Inline lengths are not decoded
    let record = entry(tags::GPS_PROCESSING_METHOD, field_types::UNDEFINED, 4, *b"GPS\0");
    std::assert_eq!(decode_le(&record, Vec::new()), DecodedValue::Absent);
}

#[test]
fn test_override_requires_matching_format() {
    // ExifVersion written as ASCII uses the generic ASCII rule
    let value = decode_le(&entry(tags::EXIF_VERSION, field_types::ASCII, 4, *b"0221"), Vec::new());
    std::assert_eq!(value, DecodedValue::Text("0221".to_string()));

    // FileSource as SHORT uses the generic SHORT rule
    let value = decode_le(&entry(tags::FILE_SOURCE, field_types::SHORT, 1, [3, 0, 0, 0]), Vec::new());
    std::assert_eq!(value, DecodedValue::Integer(3));
}
