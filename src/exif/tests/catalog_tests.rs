//! Tests for the tag catalog

extern crate std;

use std::str::FromStr;

use crate::exif::catalog::{TagCatalog, BUNDLED_TAGS};
use crate::exif::constants::tags;
use crate::exif::errors::ExifError;

#[test]
fn test_standard_catalog_loaded() {
    let catalog = TagCatalog::standard();
    std::assert!(catalog.len() >= 100);

    let make = catalog.get(tags::MAKE).unwrap();
    std::assert_eq!(make.name, "Make");
    std::assert!(!make.is_directory_pointer);
    std::assert_eq!(make.short_title(), "0x010F Make");
    std::assert!(make.full_title().starts_with("0x010F Make ("));
}

#[test]
fn test_bundled_definitions_parse() {
    // The standard catalog silently falls back to an empty one if this fails
    let catalog = TagCatalog::from_str(BUNDLED_TAGS).unwrap();
    std::assert_eq!(catalog.len(), TagCatalog::standard().len());
    std::assert!(!TagCatalog::standard().is_empty());
}

#[test]
fn test_parse_through_str() {
    let catalog: TagCatalog = "[[tag]]\ncode = 0x010F\nname = \"Make\"\n".parse().unwrap();
    std::assert_eq!(catalog.code_for("Make"), Some(0x010F));
}

#[test]
fn test_standard_catalog_pointer_tags() {
    let catalog = TagCatalog::standard();
    for code in [tags::EXIF_OFFSET, tags::GPS_INFO, tags::MAKER_NOTE, tags::INTEROPERABILITY_IFD] {
        std::assert!(catalog.is_directory_pointer(code), "{:#06x} should be a pointer", code);
    }
    std::assert!(!catalog.is_directory_pointer(tags::COMPRESSION));
    std::assert!(!catalog.is_directory_pointer(0xFFFF));
}

#[test]
fn test_lookup_by_name() {
    let catalog = TagCatalog::standard();
    std::assert_eq!(catalog.code_for("ExifOffset"), Some(tags::EXIF_OFFSET));
    std::assert_eq!(catalog.code_for("JpegIFByteCount"), Some(tags::JPEG_IF_BYTE_COUNT));
    std::assert_eq!(catalog.code_for("NoSuchTag"), None);
}

#[test]
fn test_custom_catalog() {
    let content = r#"
        [[tag]]
        code = 0x0001
        name = "First"
        description = "The first tag"

        [[tag]]
        code = 0x0002
        name = "Nested"
        pointer = true
    "#;

    let catalog = TagCatalog::from_str(content).unwrap();
    std::assert_eq!(catalog.len(), 2);
    std::assert_eq!(catalog.get(1).unwrap().description, "The first tag");
    std::assert_eq!(catalog.get(2).unwrap().description, "");
    std::assert!(catalog.is_directory_pointer(2));
}

#[test]
fn test_duplicate_code_rejected() {
    let content = r#"
        [[tag]]
        code = 0x0001
        name = "First"

        [[tag]]
        code = 0x0001
        name = "Second"
    "#;

    let result = TagCatalog::from_str(content);
    std::assert!(std::matches!(result, Err(ExifError::InvalidCatalog(_))));
}

#[test]
fn test_duplicate_name_rejected() {
    let content = r#"
        [[tag]]
        code = 0x0001
        name = "Same"

        [[tag]]
        code = 0x0002
        name = "Same"
    "#;

    let result = TagCatalog::from_str(content);
    std::assert!(std::matches!(result, Err(ExifError::InvalidCatalog(_))));
}

#[test]
fn test_malformed_catalog_rejected() {
    std::assert!(TagCatalog::from_str("not = [valid").is_err());
    std::assert!(TagCatalog::from_str("title = \"no tags\"").is_err());
    std::assert!(TagCatalog::from_str("[[tag]]\ncode = 70000\nname = \"Big\"").is_err());
    std::assert!(TagCatalog::from_str("[[tag]]\ncode = 1").is_err());
}
