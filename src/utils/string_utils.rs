//! String utility functions
//!
//! Utilities for turning raw EXIF bytes into text.

/// Maps each byte to the character with the same code point
///
/// EXIF text is nominally ASCII but cameras write arbitrary bytes; a
/// one-to-one mapping never fails and never drops a byte. NUL bytes are kept.
pub fn bytes_to_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Trims leading and trailing whitespace and control characters, NUL included
pub fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
