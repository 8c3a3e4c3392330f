//! Embedded thumbnail location
//!
//! The thumbnail directory (IFD1) describes a small preview image. Only
//! old-style JPEG thumbnails (compression 6) are extracted: their bytes are a
//! complete JPEG stream at `JpegIFOffset`, `JpegIFByteCount` bytes long.

use std::io::{Read, SeekFrom};
use image::{DynamicImage, ImageFormat};
use log::{debug, info, warn};

use crate::exif::constants::{compression, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::types::TagSet;
use crate::io::seekable::SeekableReader;
use crate::utils::tag_utils;

/// Raw bytes of an embedded JPEG thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    offset: u64,
    data: Vec<u8>,
}

impl Thumbnail {
    pub fn new(offset: u64, data: Vec<u8>) -> Self {
        Thumbnail { offset, data }
    }

    /// Stream position the bytes were read from
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Decodes the thumbnail into a bitmap with the `image` crate
    pub fn decode(&self) -> ExifResult<DynamicImage> {
        image::load_from_memory_with_format(&self.data, ImageFormat::Jpeg)
            .map_err(|e| ExifError::ThumbnailDecode(e.to_string()))
    }
}

/// Extracts the thumbnail described by a decoded thumbnail directory
///
/// Returns `Ok(None)` for any compression other than old-style JPEG. A byte
/// range that runs past the end of the stream is fatal. The stream position
/// is restored afterwards.
pub(crate) fn locate_thumbnail(
    reader: &mut dyn SeekableReader,
    base: u64,
    directory: &TagSet,
) -> ExifResult<Option<Thumbnail>> {
    let compression_method = directory.integer(tags::COMPRESSION).unwrap_or(0);
    if compression_method != compression::JPEG_OLD {
        warn!("Unknown compression method {} ({}) to extract thumbnail image",
              compression_method, tag_utils::get_compression_name(compression_method));
        return Ok(None);
    }

    let jpeg_offset = directory.integer(tags::JPEG_IF_OFFSET).unwrap_or(0) as u64;
    let jpeg_length = directory.integer(tags::JPEG_IF_BYTE_COUNT).unwrap_or(0) as u64;
    let absolute_offset = base + jpeg_offset;
    debug!("Thumbnail JPEG at {} ({} bytes)", absolute_offset, jpeg_length);

    let position = reader.stream_position()?;
    reader.seek(SeekFrom::Start(absolute_offset))?;
    let mut data = Vec::new();
    Read::take(&mut *reader, jpeg_length).read_to_end(&mut data)?;
    reader.seek(SeekFrom::Start(position))?;

    if data.len() as u64 != jpeg_length {
        return Err(ExifError::TruncatedThumbnail {
            expected: jpeg_length,
            read: data.len() as u64,
        });
    }

    info!("Thumbnail extraction done ({} bytes)", data.len());
    Ok(Some(Thumbnail::new(absolute_offset, data)))
}
