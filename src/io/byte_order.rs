//! Byte order handling for EXIF payloads
//!
//! The TIFF header inside the APP1 segment fixes the byte order once for the
//! whole metadata payload. This module implements the Strategy pattern for
//! reading multi-byte values under that byte order, both from the stream and
//! from the 4-byte value field of a directory record.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use byteorder::ByteOrder as ByteSliceOrder;
use std::io::Result;

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// Represents the byte order of an EXIF payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the two marker bytes of a TIFF header
    ///
    /// Both bytes must be equal and must spell either "II" or "MM".
    pub fn from_marker(marker: [u8; 2]) -> ExifResult<Self> {
        match marker {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(ExifError::InvalidByteOrder(marker)),
        }
    }

    /// Reads the two marker bytes from the reader and detects the byte order
    pub fn detect(reader: &mut dyn SeekableReader) -> ExifResult<Self> {
        let mut marker = [0u8; 2];
        reader.read_exact(&mut marker)?;
        Self::from_marker(marker)
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (Intel)",
            ByteOrder::BigEndian => "Big Endian (Motorola)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// The byte order this handler implements
    fn byte_order(&self) -> ByteOrder;

    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read a rational value (two i32 values as numerator/denominator)
    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)>;

    /// Decode the low 16 bits of a raw 4-byte value field
    fn decode_u16(&self, raw: [u8; 4]) -> u16;

    /// Decode all 4 bytes of a raw value field
    fn decode_u32(&self, raw: [u8; 4]) -> u32;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::LittleEndian
    }

    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)> {
        let numerator = reader.read_i32::<LittleEndian>()?;
        let denominator = reader.read_i32::<LittleEndian>()?;
        Ok((numerator, denominator))
    }

    fn decode_u16(&self, raw: [u8; 4]) -> u16 {
        LittleEndian::read_u16(&raw[..2])
    }

    fn decode_u32(&self, raw: [u8; 4]) -> u32 {
        LittleEndian::read_u32(&raw)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::BigEndian
    }

    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(i32, i32)> {
        let numerator = reader.read_i32::<BigEndian>()?;
        let denominator = reader.read_i32::<BigEndian>()?;
        Ok((numerator, denominator))
    }

    fn decode_u16(&self, raw: [u8; 4]) -> u16 {
        BigEndian::read_u16(&raw[..2])
    }

    fn decode_u32(&self, raw: [u8; 4]) -> u32 {
        BigEndian::read_u32(&raw)
    }
}
