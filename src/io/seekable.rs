//! Seekable reader trait
//!
//! Every stage of the decoder (marker scanning, header reading, directory
//! walking) reads forward and jumps around the same stream, so all of them
//! take a reader that supports both operations.

use std::io::{Read, Seek};

/// Trait for byte streams that can both be read and repositioned
///
/// A parse owns its stream exclusively for the duration of the call; skips
/// over uninteresting segments are seeks, never buffered reads.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
