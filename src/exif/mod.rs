//! EXIF metadata decoding
//!
//! This module provides the TIFF header reader, the recursive directory
//! decoder, value materialization and the public [`ExifReader`] entry point.

pub mod errors;
pub mod constants;
pub mod catalog;
pub mod header;
pub mod ifd;
pub(crate) mod decoder;
pub mod value;
pub(crate) mod value_decoder;
pub mod thumbnail;
pub(crate) mod maker_note;
pub mod gps;
pub mod types;
pub mod reader;
#[cfg(test)]
mod tests;

pub use catalog::{TagCatalog, TagDescriptor};
pub use errors::{ExifError, ExifResult};
pub use gps::{to_decimal_degrees, GpsAxis};
pub use reader::{ExifReader, ExifReaderBuilder, ParseOptions};
pub use thumbnail::Thumbnail;
pub use types::{ExifData, ExifEntry, MakerNoteInfo, TagSet};
pub use value::{DecodedValue, Rational};
