//! EXIF reader entry point
//!
//! Ties the marker scanner, the TIFF header reader and the directory decoder
//! together. A parse either produces a complete [`ExifData`] or an error;
//! nothing partial is ever returned.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use log::{debug, info};

use crate::exif::catalog::TagCatalog;
use crate::exif::decoder::IfdDecoder;
use crate::exif::errors::ExifResult;
use crate::exif::header::{self, Signature, TiffHeader};
use crate::exif::types::ExifData;
use crate::io::seekable::SeekableReader;
use crate::jpeg::scanner::{MarkerScanner, SegmentHandler, SegmentOutcome};

/// Options controlling one parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Follow the thumbnail directory and extract the embedded thumbnail
    pub extract_thumbnail: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { extract_thumbnail: true }
    }
}

/// Builder for ExifReader
pub struct ExifReaderBuilder<'c> {
    catalog: &'c TagCatalog,
    options: ParseOptions,
}

impl ExifReaderBuilder<'static> {
    /// Starts from the standard catalog and default options
    pub fn new() -> Self {
        ExifReaderBuilder {
            catalog: TagCatalog::standard(),
            options: ParseOptions::default(),
        }
    }
}

impl Default for ExifReaderBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> ExifReaderBuilder<'c> {
    /// Uses a custom tag catalog
    pub fn catalog<'n>(self, catalog: &'n TagCatalog) -> ExifReaderBuilder<'n> {
        ExifReaderBuilder {
            catalog,
            options: self.options,
        }
    }

    pub fn extract_thumbnail(mut self, extract: bool) -> Self {
        self.options.extract_thumbnail = extract;
        self
    }

    pub fn build(self) -> ExifReader<'c> {
        ExifReader {
            catalog: self.catalog,
            options: self.options,
        }
    }
}

/// Reads EXIF metadata from JPEG streams
///
/// A reader holds no per-parse state and can be reused for any number of
/// files.
pub struct ExifReader<'c> {
    catalog: &'c TagCatalog,
    options: ParseOptions,
}

impl ExifReader<'static> {
    /// Creates a reader using the standard catalog that extracts thumbnails
    pub fn new() -> Self {
        ExifReaderBuilder::new().build()
    }
}

impl Default for ExifReader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> ExifReader<'c> {
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Opens a JPEG file and reads its metadata
    pub fn load(&self, path: impl AsRef<Path>) -> ExifResult<ExifData> {
        let path = path.as_ref();
        info!("Loading JPEG file: {}", path.display());

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read(&mut reader)
    }

    /// Reads metadata from a JPEG stream
    ///
    /// A stream without a start of image, or without an Exif APP1 segment,
    /// yields an empty result.
    pub fn read(&self, reader: &mut dyn SeekableReader) -> ExifResult<ExifData> {
        debug!("ExifReader::read starting (extract thumbnail: {})", self.options.extract_thumbnail);

        let mut parser = ExifSegmentParser {
            catalog: self.catalog,
            options: self.options,
            result: None,
        };
        MarkerScanner::new().scan(reader, &mut parser)?;

        match parser.result {
            Some(data) => Ok(data),
            None => {
                info!("No Exif segment found");
                Ok(ExifData::new())
            }
        }
    }
}

/// Decodes the first APP1 segment that carries the Exif signature
struct ExifSegmentParser<'c> {
    catalog: &'c TagCatalog,
    options: ParseOptions,
    result: Option<ExifData>,
}

impl<'c> SegmentHandler for ExifSegmentParser<'c> {
    fn on_app1(&mut self, reader: &mut dyn SeekableReader, length: u16) -> ExifResult<SegmentOutcome> {
        if header::read_signature(reader, length)? == Signature::Skipped {
            return Ok(SegmentOutcome::Continue);
        }

        let tiff_header = TiffHeader::read(reader)?;
        let decoder = IfdDecoder::new(self.catalog, &tiff_header, self.options.extract_thumbnail);
        self.result = Some(decoder.decode(reader)?);

        Ok(SegmentOutcome::Finished)
    }
}
