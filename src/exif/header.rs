//! TIFF header reading
//!
//! Inside the APP1 payload the "Exif\0\0" signature is followed by an
//! 8-byte TIFF header:
//!
//! ```text
//! Big Endian (Motorola)      Little Endian (Intel)
//! 4D 4D  00 2A  00 00 00 08  49 49  2A 00  08 00 00 00
//!  M  M  magic  root offset   I  I  magic  root offset
//! ```
//!
//! The first byte of the byte order marker is the base every offset in the
//! payload is measured from.

use std::io::SeekFrom;
use log::debug;

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;

/// Outcome of checking the APP1 signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// "Exif\0\0" found; the reader is positioned at the TIFF header
    Exif,
    /// Not a metadata segment; the reader is positioned after the segment
    Skipped,
}

/// Checks the APP1 payload for the "Exif\0\0" signature
///
/// `segment_length` is the APPn length field, which counts its own two bytes.
/// The reader must be positioned right after the length field.
pub fn read_signature(reader: &mut dyn SeekableReader, segment_length: u16) -> ExifResult<Signature> {
    if segment_length < header::MIN_APP1_LENGTH {
        debug!("APP1 length {} is too short for an Exif header, skipping segment", segment_length);
        reader.seek(SeekFrom::Current(segment_length as i64 - 2))?;
        return Ok(Signature::Skipped);
    }

    let mut signature = [0u8; 6];
    reader.read_exact(&mut signature)?;
    debug!("APP1 header tag is {:?}", String::from_utf8_lossy(&signature));

    if signature != header::EXIF_SIGNATURE {
        debug!("APP1 has no Exif signature, skipping segment");
        let remaining = segment_length as i64 - 2 - signature.len() as i64;
        reader.seek(SeekFrom::Current(remaining))?;
        return Ok(Signature::Skipped);
    }

    Ok(Signature::Exif)
}

/// A validated TIFF header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: ByteOrder,
    /// Stream position of the byte order marker
    pub base: u64,
    /// Root directory offset, relative to `base`
    pub root_offset: u32,
}

impl TiffHeader {
    /// Reads and validates the 8-byte header at the current position
    pub fn read(reader: &mut dyn SeekableReader) -> ExifResult<Self> {
        let base = reader.stream_position()?;

        let byte_order = ByteOrder::detect(reader)?;
        debug!("TIFF header byte order: {}", byte_order.name());
        let handler = byte_order.create_handler();

        let magic = handler.read_u16(reader)?;
        if magic != header::TIFF_MAGIC {
            return Err(ExifError::InvalidAlignment(magic));
        }

        let root_offset = handler.read_u32(reader)?;
        if root_offset < header::TIFF_HEADER_SIZE {
            return Err(ExifError::InvalidRootOffset(root_offset));
        }
        debug!("TIFF header at {}: root directory offset {}", base, root_offset);

        Ok(TiffHeader { byte_order, base, root_offset })
    }

    /// Stream position of the root directory
    pub fn root_position(&self) -> u64 {
        self.base + self.root_offset as u64
    }

    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        self.byte_order.create_handler()
    }
}
