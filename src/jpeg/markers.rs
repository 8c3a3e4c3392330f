//! JPEG marker codes
//!
//! Every marker is `0xFF` followed by one code byte. Only the classification
//! needed to find the metadata segment is done here; every other known
//! segment type is lumped together as [`Marker::Other`]. Codes that are not
//! markers at all (fill bytes, stuffed zeros) are not classified.

/// Prefix byte of every marker
pub const MARKER_PREFIX: u8 = 0xFF;

pub const SOI: u8 = 0xD8;
pub const EOI: u8 = 0xD9;
pub const SOS: u8 = 0xDA;
pub const DQT: u8 = 0xDB;
pub const DNL: u8 = 0xDC;
pub const DRI: u8 = 0xDD;
pub const DHP: u8 = 0xDE;
pub const EXP: u8 = 0xDF;
pub const DHT: u8 = 0xC4;
pub const JPG: u8 = 0xC8;
pub const DAC: u8 = 0xCC;
pub const COM: u8 = 0xFE;
pub const TEM: u8 = 0x01;

pub const APP0: u8 = 0xE0;
pub const APP1: u8 = 0xE1;
pub const APP15: u8 = 0xEF;

pub const SOF0: u8 = 0xC0;
pub const SOF15: u8 = 0xCF;
pub const RST0: u8 = 0xD0;
pub const RST7: u8 = 0xD7;
pub const JPG0: u8 = 0xF0;
pub const JPG13: u8 = 0xFD;

/// A classified marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Start of image
    StartOfImage,
    /// End of image
    EndOfImage,
    /// Application segment APP0..APP15, carrying the low nibble
    Application(u8),
    /// Any other known segment type, carrying the code byte
    Other(u8),
}

impl Marker {
    /// Classifies the byte following `0xFF`, `None` if it is not a marker code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            SOI => Some(Marker::StartOfImage),
            EOI => Some(Marker::EndOfImage),
            APP0..=APP15 => Some(Marker::Application(code & 0x0F)),
            _ if is_other_segment(code) => Some(Marker::Other(code)),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Marker::StartOfImage => SOI,
            Marker::EndOfImage => EOI,
            Marker::Application(n) => APP0 | (n & 0x0F),
            Marker::Other(code) => *code,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Marker::StartOfImage => "SOI".to_string(),
            Marker::EndOfImage => "EOI".to_string(),
            Marker::Application(n) => format!("APP{}", n),
            Marker::Other(code) => get_marker_name(*code).to_string(),
        }
    }
}

/// Whether a code is a known segment type other than SOI, EOI and APPn
pub fn is_other_segment(code: u8) -> bool {
    get_marker_name(code) != "Unknown"
}

/// Human-readable name of a marker code outside SOI/EOI/APPn
pub fn get_marker_name(code: u8) -> &'static str {
    match code {
        SOS => "SOS",
        DQT => "DQT",
        DNL => "DNL",
        DRI => "DRI",
        DHP => "DHP",
        EXP => "EXP",
        DHT => "DHT",
        JPG => "JPG",
        DAC => "DAC",
        COM => "COM",
        TEM => "TEM",
        SOF0..=SOF15 => "SOF",
        RST0..=RST7 => "RST",
        JPG0..=JPG13 => "JPGn",
        _ => "Unknown",
    }
}
