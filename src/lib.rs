pub mod io;
pub mod jpeg;
pub mod exif;
pub mod utils;
pub mod commands;

pub use exif::{DecodedValue, ExifData, ExifEntry, ExifError, ExifReader, ExifReaderBuilder, ExifResult,
               ParseOptions, Rational, TagCatalog, Thumbnail};
