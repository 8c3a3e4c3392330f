//! Core EXIF result structures

use std::collections::HashMap;
use std::fmt;

use crate::exif::catalog::TagDescriptor;
use crate::exif::constants::tags;
use crate::exif::gps::{self, GpsAxis};
use crate::exif::thumbnail::Thumbnail;
use crate::exif::value::DecodedValue;
use crate::utils::tag_utils;

/// One extracted directory entry
#[derive(Debug, Clone, PartialEq)]
pub struct ExifEntry {
    pub tag: u16,
    pub format: u16,
    pub count: u32,
    /// Name of the directory the entry was read from (`IFD0`, `GPSInfo`, ...)
    pub directory: String,
    /// Catalog description, `None` for unknown codes
    pub descriptor: Option<TagDescriptor>,
    pub value: DecodedValue,
}

impl ExifEntry {
    /// Catalog name, or `Unknown`
    pub fn name(&self) -> &str {
        self.descriptor.as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or(tag_utils::UNKNOWN_TAG_NAME)
    }

    /// Title in the form `0x010F Make`
    pub fn short_title(&self) -> String {
        tag_utils::tag_title(self.tag, self.descriptor.as_ref().map(|d| d.name.as_str()))
    }

    /// Short title with the catalog description appended when known
    pub fn full_title(&self) -> String {
        match &self.descriptor {
            Some(descriptor) => descriptor.full_title(),
            None => self.short_title(),
        }
    }
}

/// Values decoded from one or more directories, by code and in read order
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    values: HashMap<u16, DecodedValue>,
    entries: Vec<ExifEntry>,
}

impl TagSet {
    /// Records an entry; a later entry with the same code replaces the lookup value
    pub fn push(&mut self, entry: ExifEntry) {
        self.values.insert(entry.tag, entry.value.clone());
        self.entries.push(entry);
    }

    pub fn get(&self, tag: u16) -> Option<&DecodedValue> {
        self.values.get(&tag)
    }

    /// Integer value of a tag, if present and integral
    pub fn integer(&self, tag: u16) -> Option<u32> {
        self.get(tag).and_then(|v| v.as_integer())
    }

    /// Text value of a tag, if present and textual
    pub fn text(&self, tag: u16) -> Option<&str> {
        self.get(tag).and_then(|v| v.as_text())
    }

    pub fn entries(&self) -> &[ExifEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the MakerNote payload sits and whose it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakerNoteInfo {
    pub manufacturer: String,
    pub model: String,
    /// Position of the payload in the stream
    pub offset: u64,
    /// Declared payload length in bytes
    pub length: u64,
}

/// The complete result of one parse
///
/// Built privately by the decoder and handed out only once the parse has
/// succeeded.
#[derive(Debug, Clone, Default)]
pub struct ExifData {
    pub(crate) primary: TagSet,
    pub(crate) thumbnail_directory: TagSet,
    pub(crate) thumbnail: Option<Thumbnail>,
    pub(crate) maker_note: Option<MakerNoteInfo>,
    pub(crate) name_index: HashMap<String, u16>,
}

impl ExifData {
    /// Creates an empty result
    pub fn new() -> Self {
        ExifData::default()
    }

    /// Value of a tag from the main image, Exif, GPS or Interoperability directories
    pub fn get(&self, tag: u16) -> Option<&DecodedValue> {
        self.primary.get(tag)
    }

    /// Value of a tag looked up by its catalog name
    pub fn get_by_name(&self, name: &str) -> Option<&DecodedValue> {
        self.name_index.get(name).and_then(|code| self.get(*code))
    }

    /// Every entry extracted outside the thumbnail directory, in read order
    pub fn entries(&self) -> &[ExifEntry] {
        self.primary.entries()
    }

    /// Entries of the thumbnail directory (IFD1), kept apart from the main image
    pub fn thumbnail_directory(&self) -> &TagSet {
        &self.thumbnail_directory
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    pub fn maker_note(&self) -> Option<&MakerNoteInfo> {
        self.maker_note.as_ref()
    }

    /// Whether nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.thumbnail_directory.is_empty()
    }

    /// Signed decimal latitude from GPSLatitudeRef and GPSLatitude
    pub fn gps_latitude(&self) -> Option<f64> {
        self.gps_coordinate(tags::GPS_LATITUDE_REF, tags::GPS_LATITUDE, GpsAxis::Latitude)
    }

    /// Signed decimal longitude from GPSLongitudeRef and GPSLongitude
    pub fn gps_longitude(&self) -> Option<f64> {
        self.gps_coordinate(tags::GPS_LONGITUDE_REF, tags::GPS_LONGITUDE, GpsAxis::Longitude)
    }

    fn gps_coordinate(&self, ref_tag: u16, coord_tag: u16, axis: GpsAxis) -> Option<f64> {
        let reference = self.primary.text(ref_tag)?;
        let coordinates = self.get(coord_tag)?.as_rationals()?;
        gps::to_decimal_degrees(reference, coordinates, axis)
    }
}

impl fmt::Display for ExifData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EXIF data:")?;
        writeln!(f, "  Entries: {}", self.primary.len())?;
        for entry in self.primary.entries() {
            writeln!(f, "    [{}] {}: {}", entry.directory, entry.short_title(), entry.value)?;
        }
        if let Some(thumbnail) = &self.thumbnail {
            writeln!(f, "  Thumbnail: {} bytes at offset {}", thumbnail.len(), thumbnail.offset())?;
        }
        Ok(())
    }
}
