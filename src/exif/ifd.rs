//! Image File Directory (IFD) records
//!
//! A directory is a 2-byte entry count followed by fixed 12-byte records and
//! a 4-byte offset to the next top-level directory. The structures here are
//! transient: they live only while one directory is being decoded.

use log::trace;

use crate::exif::constants::directory;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::utils::tag_utils;

/// One raw 12-byte directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag identifier
    pub tag: u16,
    /// Field format, always within [1, 13]
    pub format: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values, in stream byte order
    pub raw: [u8; 4],
}

impl DirectoryEntry {
    /// Reads one record and validates its format code
    pub fn read(reader: &mut dyn SeekableReader, handler: &dyn ByteOrderHandler) -> ExifResult<Self> {
        let tag = handler.read_u16(reader)?;
        let format = handler.read_u16(reader)?;
        if !(directory::MIN_FORMAT..=directory::MAX_FORMAT).contains(&format) {
            return Err(ExifError::InvalidFieldType { tag, format });
        }
        let count = handler.read_u32(reader)?;
        let mut raw = [0u8; 4];
        reader.read_exact(&mut raw)?;

        let entry = DirectoryEntry { tag, format, count, raw };
        trace!("Directory record: tag={:#06x}, format={} ({}), count={}, raw={:02X?}",
               tag, format, tag_utils::get_field_type_name(format), count, raw);
        Ok(entry)
    }

    /// The value field interpreted as a 32-bit value or header-relative offset
    pub fn value_offset(&self, handler: &dyn ByteOrderHandler) -> u32 {
        handler.decode_u32(self.raw)
    }
}

/// A nested directory queued for resolution after the current pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPointer {
    /// Catalog name of the pointer tag, used as the directory name
    pub name: String,
    /// Position of the nested directory in the stream (TIFF base + field value)
    pub absolute_offset: u64,
    pub is_maker_note: bool,
    /// Count field of the pointer record; the payload length for MakerNote
    pub declared_length: u64,
}
