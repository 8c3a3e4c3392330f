//! JPEG container handling
//!
//! Only the marker structure is understood; image data is never decoded.

pub mod markers;
pub mod scanner;

pub use markers::Marker;
pub use scanner::{MarkerScanner, SegmentHandler, SegmentOutcome};
