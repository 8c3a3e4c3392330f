//! EXIF format constants
//!
//! This module defines constants used throughout the EXIF decoding code,
//! replacing magic numbers with descriptive names.

/// APP1 payload and TIFF header constants
pub mod header {
    /// "Exif\0\0" signature at the start of the APP1 payload
    pub const EXIF_SIGNATURE: [u8; 6] = [0x45, 0x78, 0x69, 0x66, 0x00, 0x00];

    /// Smallest APP1 length that can hold the length field itself (2),
    /// the signature (6) and a TIFF header (8)
    pub const MIN_APP1_LENGTH: u16 = 16;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Alignment word following the byte order marker
    pub const TIFF_MAGIC: u16 = 0x002A;

    /// Size of the TIFF header; the smallest valid root directory offset
    pub const TIFF_HEADER_SIZE: u32 = 8;
}

/// Directory record layout
pub mod directory {
    /// Lowest valid format code
    pub const MIN_FORMAT: u16 = 1;

    /// Highest valid format code
    pub const MAX_FORMAT: u16 = 13;

    /// Deepest sub-directory nesting followed below IFD0 or IFD1
    pub const MAX_DEPTH: usize = 8;
}

/// Field formats of directory records
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
    pub const IFD: u16 = 13;       // Offset to a sub-directory
}

/// Tag codes the decoder itself depends on
pub mod tags {
    // GPS directory
    pub const GPS_VERSION_ID: u16 = 0x0000;
    pub const GPS_LATITUDE_REF: u16 = 0x0001;
    pub const GPS_LATITUDE: u16 = 0x0002;
    pub const GPS_LONGITUDE_REF: u16 = 0x0003;
    pub const GPS_LONGITUDE: u16 = 0x0004;
    pub const GPS_ALTITUDE_REF: u16 = 0x0005;
    pub const GPS_PROCESSING_METHOD: u16 = 0x001B;

    // Main image directory
    pub const MAKE: u16 = 0x010F;
    pub const MODEL: u16 = 0x0110;
    pub const EXIF_OFFSET: u16 = 0x8769;
    pub const GPS_INFO: u16 = 0x8825;

    // Exif sub-directory
    pub const EXIF_VERSION: u16 = 0x9000;
    pub const COMPONENT_CONFIGURATION: u16 = 0x9101;
    pub const MAKER_NOTE: u16 = 0x927C;
    pub const FLASHPIX_VERSION: u16 = 0xA000;
    pub const INTEROPERABILITY_IFD: u16 = 0xA005;
    pub const FILE_SOURCE: u16 = 0xA300;
    pub const SCENE_TYPE: u16 = 0xA301;

    // Thumbnail directory
    pub const COMPRESSION: u16 = 0x0103;
    pub const JPEG_IF_OFFSET: u16 = 0x0201;
    pub const JPEG_IF_BYTE_COUNT: u16 = 0x0202;
}

/// Thumbnail compression methods
pub mod compression {
    pub const NONE: u32 = 1;        // Uncompressed
    pub const JPEG_OLD: u32 = 6;    // Old-style JPEG, the only extractable method
    pub const JPEG: u32 = 7;        // New-style JPEG
}

/// Names given to directories in extracted entries and log output
pub mod directory_names {
    pub const PRIMARY: &str = "IFD0";
    pub const THUMBNAIL: &str = "IFD1";
}
