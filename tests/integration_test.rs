//! Integration tests for the EXIF reader

extern crate std;

use std::io::{Cursor, Write};
use std::str::FromStr;

use exifkit::exif::constants::tags;
use exifkit::{DecodedValue, ExifError, ExifReader, ExifReaderBuilder, Rational, TagCatalog};

/// Builds a JPEG with an Exif APP1 segment
///
/// TIFF layout (little-endian, offsets from the "II" marker):
/// - 8: root directory with Make, XResolution and ExifOffset
/// - 46: next directory offset, pointing at the thumbnail directory at 76
/// - 50: XResolution value 72/1
/// - 58: Exif sub-directory with ExifVersion
/// - 76: thumbnail directory with Compression, JpegIFOffset, JpegIFByteCount
/// - 118: four thumbnail bytes
fn sample_jpeg() -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&[0x2A, 0x00]);
    tiff.extend_from_slice(&[8, 0, 0, 0]);

    // Root directory
    tiff.extend_from_slice(&[3, 0]);
    tiff.extend_from_slice(&[0x0F, 0x01, 2, 0, 3, 0, 0, 0, b'A', b'B', b'C', 0]);  // Make
    tiff.extend_from_slice(&[0x1A, 0x01, 5, 0, 1, 0, 0, 0, 50, 0, 0, 0]);         // XResolution
    tiff.extend_from_slice(&[0x69, 0x87, 4, 0, 1, 0, 0, 0, 58, 0, 0, 0]);         // ExifOffset
    tiff.extend_from_slice(&[76, 0, 0, 0]);                                       // Next directory

    // XResolution value
    tiff.extend_from_slice(&[72, 0, 0, 0, 1, 0, 0, 0]);

    // Exif sub-directory
    tiff.extend_from_slice(&[1, 0]);
    tiff.extend_from_slice(&[0x00, 0x90, 7, 0, 4, 0, 0, 0, b'0', b'2', b'3', b'0']); // ExifVersion
    tiff.extend_from_slice(&[0, 0, 0, 0]);
    std::assert_eq!(tiff.len(), 76);

    // Thumbnail directory
    tiff.extend_from_slice(&[3, 0]);
    tiff.extend_from_slice(&[0x03, 0x01, 3, 0, 1, 0, 0, 0, 6, 0, 0, 0]);          // Compression
    tiff.extend_from_slice(&[0x01, 0x02, 4, 0, 1, 0, 0, 0, 118, 0, 0, 0]);        // JpegIFOffset
    tiff.extend_from_slice(&[0x02, 0x02, 4, 0, 1, 0, 0, 0, 4, 0, 0, 0]);          // JpegIFByteCount
    tiff.extend_from_slice(&[0, 0, 0, 0]);
    std::assert_eq!(tiff.len(), 118);
    tiff.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xD9]);

    let app1_length = (2 + 6 + tiff.len()) as u16;
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&app1_length.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);

    // Image data that must never be reached
    jpeg.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x03, 0x00]);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

#[test]
fn test_complete_exif_workflow() {
    let reader = ExifReader::new();
    let data = reader.read(&mut Cursor::new(sample_jpeg())).unwrap();

    std::assert_eq!(data.entries().len(), 3);
    std::assert_eq!(data.get(tags::MAKE), Some(&DecodedValue::Text("ABC".to_string())));
    std::assert_eq!(data.get_by_name("XResolution").and_then(|v| v.as_rational()), Some(Rational::new(72, 1)));
    std::assert_eq!(data.get_by_name("ExifVersion").and_then(|v| v.as_text()), Some("0230"));

    let titles: Vec<String> = data.entries().iter().map(|e| e.short_title()).collect();
    std::assert_eq!(titles, vec!["0x010F Make", "0x011A XResolution", "0x9000 ExifVersion"]);

    let thumbnail = data.thumbnail().unwrap();
    std::assert_eq!(thumbnail.data(), &[0xFF, 0xD8, 0xFF, 0xD9]);
    std::assert_eq!(data.thumbnail_directory().len(), 3);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&sample_jpeg()).unwrap();
    file.flush().unwrap();

    let data = ExifReader::new().load(file.path()).unwrap();
    std::assert_eq!(data.get(tags::MAKE).and_then(|v| v.as_text()), Some("ABC"));
    std::assert!(data.thumbnail().is_some());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ExifReader::new().load(dir.path().join("missing.jpg"));
    std::assert!(std::matches!(result, Err(ExifError::IoError(_))));
}

#[test]
fn test_builder_without_thumbnail() {
    let reader = ExifReaderBuilder::new()
        .extract_thumbnail(false)
        .build();
    std::assert!(!reader.options().extract_thumbnail);

    let data = reader.read(&mut Cursor::new(sample_jpeg())).unwrap();
    std::assert_eq!(data.entries().len(), 3);
    std::assert!(data.thumbnail().is_none());
    std::assert!(data.thumbnail_directory().is_empty());
}

#[test]
fn test_custom_catalog() {
    // Only Make is known and ExifOffset is not a pointer, so its value is kept
    let catalog = TagCatalog::from_str(
        "[[tag]]\ncode = 0x010F\nname = \"Manufacturer\"\ndescription = \"Camera maker\"\n",
    ).unwrap();

    let reader = ExifReaderBuilder::new()
        .catalog(&catalog)
        .build();
    let data = reader.read(&mut Cursor::new(sample_jpeg())).unwrap();

    std::assert_eq!(data.get_by_name("Manufacturer").and_then(|v| v.as_text()), Some("ABC"));
    std::assert_eq!(data.get(tags::EXIF_OFFSET), Some(&DecodedValue::Integer(58)));
    std::assert!(data.get(tags::EXIF_VERSION).is_none());
    std::assert_eq!(data.entries()[0].full_title(), "0x010F Manufacturer (Camera maker)");
}

#[test]
fn test_display_output() {
    let data = ExifReader::new().read(&mut Cursor::new(sample_jpeg())).unwrap();
    let output = data.to_string();

    std::assert!(output.contains("[IFD0] 0x010F Make: ABC"));
    std::assert!(output.contains("[ExifOffset] 0x9000 ExifVersion: 0230"));
    std::assert!(output.contains("Thumbnail: 4 bytes"));
}
