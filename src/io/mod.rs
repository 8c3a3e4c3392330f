//! I/O primitives shared by the JPEG and EXIF layers
//!
//! This module provides the seekable reader abstraction and the
//! byte-order strategies used to decode multi-byte values.

pub mod seekable;
pub mod byte_order;
