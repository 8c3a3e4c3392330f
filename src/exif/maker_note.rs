//! MakerNote handling
//!
//! MakerNote payloads use a proprietary encoding that differs per
//! manufacturer and often per camera model. No vendor decoder is
//! implemented: the payload is located, attributed to the camera that wrote
//! it, reported as unsupported and skipped.

use log::{debug, warn};

use crate::exif::constants::tags;
use crate::exif::ifd::DirectoryPointer;
use crate::exif::types::{MakerNoteInfo, TagSet};
use crate::utils::string_utils;

/// Records where the MakerNote is and reports that it cannot be decoded
///
/// Manufacturer and model come from the Make and Model values decoded so far.
pub(crate) fn inspect_maker_note(primary: &TagSet, pointer: &DirectoryPointer) -> MakerNoteInfo {
    let manufacturer = string_utils::trim_padding(primary.text(tags::MAKE).unwrap_or_default()).to_string();
    let model = string_utils::trim_padding(primary.text(tags::MODEL).unwrap_or_default()).to_string();

    debug!("{} for {} {} at {} ({} bytes)",
           pointer.name, manufacturer, model, pointer.absolute_offset, pointer.declared_length);
    warn!("Unknown how to decode proprietary MakerNote format for manufacturer '{}' and camera '{}'",
          manufacturer, model);

    MakerNoteInfo {
        manufacturer,
        model,
        offset: pointer.absolute_offset,
        length: pointer.declared_length,
    }
}
