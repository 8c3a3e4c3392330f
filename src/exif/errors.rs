//! Custom error types for EXIF processing

use std::fmt;
use std::io;

/// Fatal EXIF decoding errors
///
/// Any of these aborts the whole parse; recoverable misses are logged and
/// surface only as absent values.
#[derive(Debug)]
pub enum ExifError {
    /// I/O error, including short reads of out-of-line values
    IoError(io::Error),
    /// APPn segment length smaller than its own length field
    InvalidSegmentLength(u16),
    /// Invalid TIFF byte order marker
    InvalidByteOrder([u8; 2]),
    /// Alignment word did not decode to 0x002A
    InvalidAlignment(u16),
    /// Root directory offset points inside the TIFF header
    InvalidRootOffset(u32),
    /// Directory record format code outside [1, 13]
    InvalidFieldType { tag: u16, format: u16 },
    /// Directory pointer tag carrying a format it may not use
    InvalidPointerFormat { tag: u16, name: String, format: u16 },
    /// Thumbnail byte range ran past the end of the stream
    TruncatedThumbnail { expected: u64, read: u64 },
    /// Malformed tag catalog definitions
    InvalidCatalog(String),
    /// The image decoder rejected the thumbnail bytes
    ThumbnailDecode(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::InvalidSegmentLength(len) => {
                write!(f, "APPn length must be at least 2 bytes, got {}", len)
            }
            ExifError::InvalidByteOrder(m) => {
                write!(f, "Invalid byte order marker: {:02X} {:02X}", m[0], m[1])
            }
            ExifError::InvalidAlignment(v) => {
                write!(f, "Invalid TIFF alignment word: {:#06x} (expected 0x002a)", v)
            }
            ExifError::InvalidRootOffset(o) => {
                write!(f, "Root directory offset must be at least 8, got {}", o)
            }
            ExifError::InvalidFieldType { tag, format } => {
                write!(f, "Tag {:#06x} has format {} outside [1, 13]", tag, format)
            }
            ExifError::InvalidPointerFormat { tag, name, format } => {
                write!(f, "Directory pointer {:#06x} {} has unexpected format {}", tag, name, format)
            }
            ExifError::TruncatedThumbnail { expected, read } => {
                write!(f, "Thumbnail truncated: read {} of {} bytes", read, expected)
            }
            ExifError::InvalidCatalog(msg) => write!(f, "Invalid tag catalog: {}", msg),
            ExifError::ThumbnailDecode(msg) => write!(f, "Thumbnail decode failed: {}", msg),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExifError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
