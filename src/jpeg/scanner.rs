//! JPEG marker scanning
//!
//! An LL(1) scan over the stream with a two-byte window. Nothing is
//! buffered: segments that are not of interest are skipped by seeking.
//!
//! ```text
//! FFD8 FFE1 LLLL  data......data  (FFXX LLLL data......data)xN FFD9
//! SOI  APP1 Length   Exif data          N JPEG segments         EOI
//! ```

use std::io::{self, SeekFrom};
use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;
use crate::jpeg::markers::{Marker, MARKER_PREFIX};

/// What the scanner should do after an APP1 segment was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The segment was not the one wanted; keep scanning
    Continue,
    /// The metadata was consumed; stop scanning the stream
    Finished,
}

/// Receives APP1 segments found by the scanner
pub trait SegmentHandler {
    /// Handles one APP1 segment
    ///
    /// `length` is the segment length field, which counts its own two bytes.
    /// The reader is positioned right after the length field. When returning
    /// [`SegmentOutcome::Continue`] the reader must be positioned right after
    /// the segment.
    fn on_app1(&mut self, reader: &mut dyn SeekableReader, length: u16) -> ExifResult<SegmentOutcome>;
}

/// Two-byte sliding window marker scanner
#[derive(Debug, Default)]
pub struct MarkerScanner {
    window: [Option<u8>; 2],
}

impl MarkerScanner {
    pub fn new() -> Self {
        MarkerScanner::default()
    }

    /// Scans the stream from its current position
    ///
    /// Looks for a start of image, then walks its segments until an end of
    /// image, after which the search for a start of image resumes. Scanning
    /// stops at the end of the stream, once the handler reports
    /// [`SegmentOutcome::Finished`], or at the first segment that is neither
    /// SOI, EOI nor APPn.
    pub fn scan(&mut self, reader: &mut dyn SeekableReader, handler: &mut dyn SegmentHandler) -> ExifResult<()> {
        self.reset();
        while let Some(marker) = self.next_marker(reader)? {
            if marker != Marker::StartOfImage {
                continue;
            }
            debug!("Marker: SOI");
            self.reset();

            if self.scan_segments(reader, handler)? == SegmentOutcome::Finished {
                return Ok(());
            }
        }

        debug!("End of stream reached");
        Ok(())
    }

    /// Walks the segments of one image, up to and including its EOI
    fn scan_segments(&mut self, reader: &mut dyn SeekableReader, handler: &mut dyn SegmentHandler) -> ExifResult<SegmentOutcome> {
        while let Some(marker) = self.next_marker(reader)? {
            match marker {
                Marker::EndOfImage => {
                    debug!("Marker: EOI at {}", reader.stream_position()?);
                    self.reset();
                    return Ok(SegmentOutcome::Continue);
                }
                Marker::Application(app_type) => {
                    debug!("Marker: {}", marker.name());
                    let outcome = self.read_application_segment(reader, handler, app_type)?;
                    if outcome == SegmentOutcome::Finished {
                        return Ok(outcome);
                    }
                    self.reset();
                }
                Marker::Other(_) => {
                    debug!("Marker: {} ({:#04X}), stopping scan", marker.name(), marker.code());
                    return Ok(SegmentOutcome::Finished);
                }
                Marker::StartOfImage => {
                    trace!("Nested SOI ignored");
                }
            }
        }

        Ok(SegmentOutcome::Finished)
    }

    fn read_application_segment(
        &mut self,
        reader: &mut dyn SeekableReader,
        handler: &mut dyn SegmentHandler,
        app_type: u8,
    ) -> ExifResult<SegmentOutcome> {
        let length = reader.read_u16::<BigEndian>()?;
        if length < 2 {
            return Err(ExifError::InvalidSegmentLength(length));
        }
        debug!("APP{} length: {}", app_type, length);

        if app_type == 1 {
            return handler.on_app1(reader, length);
        }

        reader.seek(SeekFrom::Current(length as i64 - 2))?;
        Ok(SegmentOutcome::Continue)
    }

    /// Advances the window until it holds a marker; `None` at end of stream
    fn next_marker(&mut self, reader: &mut dyn SeekableReader) -> ExifResult<Option<Marker>> {
        while let Some(byte) = Self::next_byte(reader)? {
            self.window = [self.window[1], Some(byte)];
            if let [Some(MARKER_PREFIX), Some(code)] = self.window {
                match Marker::from_code(code) {
                    Some(marker) => return Ok(Some(marker)),
                    None => trace!("Ignoring non-marker code {:#04X}", code),
                }
            }
        }
        Ok(None)
    }

    fn next_byte(reader: &mut dyn SeekableReader) -> ExifResult<Option<u8>> {
        match reader.read_u8() {
            Ok(byte) => Ok(Some(byte)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) {
        self.window = [None, None];
    }
}
