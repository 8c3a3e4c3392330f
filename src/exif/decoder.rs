//! Recursive directory decoding
//!
//! Walks the root directory (IFD0), follows directory-pointer tags into the
//! Exif, GPS and Interoperability sub-directories, reports the MakerNote, and
//! finally decodes the thumbnail directory (IFD1) chained after the root.
//!
//! Pointer tags found while reading a directory are queued and resolved
//! depth-first once every record of that directory has been read, so the
//! stream position after a directory is always just past its last record.

use std::collections::HashSet;
use std::io::SeekFrom;
use log::{debug, info, trace, warn};

use crate::exif::catalog::{TagCatalog, TagDescriptor};
use crate::exif::constants::{directory, directory_names, field_types, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::header::TiffHeader;
use crate::exif::ifd::{DirectoryEntry, DirectoryPointer};
use crate::exif::maker_note;
use crate::exif::thumbnail;
use crate::exif::types::{ExifData, ExifEntry};
use crate::exif::value_decoder::{self, ValueContext};
use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;

/// Which tag set decoded entries are recorded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Primary,
    Thumbnail,
}

/// Decodes every directory reachable from one TIFF header
pub(crate) struct IfdDecoder<'c> {
    catalog: &'c TagCatalog,
    handler: Box<dyn ByteOrderHandler>,
    /// Stream position of the TIFF header
    base: u64,
    root_position: u64,
    extract_thumbnail: bool,
    /// Stream positions of directories already decoded
    visited: HashSet<u64>,
    data: ExifData,
}

impl<'c> IfdDecoder<'c> {
    pub fn new(catalog: &'c TagCatalog, header: &TiffHeader, extract_thumbnail: bool) -> Self {
        IfdDecoder {
            catalog,
            handler: header.create_handler(),
            base: header.base,
            root_position: header.root_position(),
            extract_thumbnail,
            visited: HashSet::new(),
            data: ExifData::new(),
        }
    }

    /// Decodes the root directory, its sub-directories and the thumbnail directory
    ///
    /// Consumes the decoder; the result exists only if every step succeeded.
    pub fn decode(mut self, reader: &mut dyn SeekableReader) -> ExifResult<ExifData> {
        self.visited.insert(self.root_position);
        reader.seek(SeekFrom::Start(self.root_position))?;
        self.decode_directory(reader, directory_names::PRIMARY, Target::Primary, 0)?;

        // The root directory always ends with the offset of the next one
        let next_offset = self.handler.read_u32(reader)?;
        debug!("{} offset to {}: {}", directory_names::PRIMARY, directory_names::THUMBNAIL, next_offset);

        if next_offset == 0 {
            debug!("No thumbnail directory");
        } else if !self.extract_thumbnail {
            debug!("Thumbnail extraction disabled, not following offset {}", next_offset);
        } else {
            self.decode_thumbnail_directory(reader, self.base + next_offset as u64)?;
        }

        Ok(self.finish())
    }

    fn decode_thumbnail_directory(&mut self, reader: &mut dyn SeekableReader, position: u64) -> ExifResult<()> {
        if !self.visited.insert(position) {
            warn!("{} at {} was already decoded, skipping", directory_names::THUMBNAIL, position);
            return Ok(());
        }

        reader.seek(SeekFrom::Start(position))?;
        self.decode_directory(reader, directory_names::THUMBNAIL, Target::Thumbnail, 0)?;
        self.data.thumbnail = thumbnail::locate_thumbnail(reader, self.base, &self.data.thumbnail_directory)?;
        Ok(())
    }

    /// Decodes the directory at the current stream position
    ///
    /// `depth` is 0 for IFD0 and IFD1 and grows by one per followed pointer.
    fn decode_directory(&mut self, reader: &mut dyn SeekableReader, name: &str, target: Target, depth: usize) -> ExifResult<()> {
        let entry_count = self.handler.read_u16(reader)?;
        debug!("{} entries: {}", name, entry_count);

        let catalog = self.catalog;
        let mut pointers = Vec::new();

        for index in 0..entry_count {
            let entry = DirectoryEntry::read(reader, self.handler.as_ref())?;

            match catalog.get(entry.tag).filter(|d| d.is_directory_pointer) {
                Some(descriptor) => {
                    let pointer = self.queue_pointer(&entry, descriptor)?;
                    debug!("{} {:02}: {} -> directory at {}",
                           name, index, descriptor.short_title(), pointer.absolute_offset);
                    pointers.push(pointer);
                }
                None => self.record_entry(reader, name, target, &entry, index)?,
            }
        }

        for pointer in &pointers {
            self.follow_pointer(reader, pointer, target, depth + 1)?;
        }

        Ok(())
    }

    /// Validates a pointer record and turns it into a queued pointer
    fn queue_pointer(&self, entry: &DirectoryEntry, descriptor: &TagDescriptor) -> ExifResult<DirectoryPointer> {
        let is_maker_note = entry.tag == tags::MAKER_NOTE;
        let format_ok = if is_maker_note {
            entry.format == field_types::UNDEFINED
        } else {
            entry.format == field_types::LONG || entry.format == field_types::IFD
        };

        if !format_ok {
            return Err(ExifError::InvalidPointerFormat {
                tag: entry.tag,
                name: descriptor.name.clone(),
                format: entry.format,
            });
        }

        Ok(DirectoryPointer {
            name: descriptor.name.clone(),
            absolute_offset: self.base + entry.value_offset(self.handler.as_ref()) as u64,
            is_maker_note,
            declared_length: entry.count as u64,
        })
    }

    /// Decodes a plain record's value and records it
    fn record_entry(
        &mut self,
        reader: &mut dyn SeekableReader,
        name: &str,
        target: Target,
        entry: &DirectoryEntry,
        index: u16,
    ) -> ExifResult<()> {
        let ctx = ValueContext {
            handler: self.handler.as_ref(),
            base: self.base,
        };
        let value = value_decoder::decode_value(entry, &ctx, reader)?;

        let exif_entry = ExifEntry {
            tag: entry.tag,
            format: entry.format,
            count: entry.count,
            directory: name.to_string(),
            descriptor: self.catalog.get(entry.tag).cloned(),
            value,
        };
        trace!("{} {:02}: {} = {} ({})",
               name, index, exif_entry.short_title(), exif_entry.value, exif_entry.value.kind());

        match target {
            Target::Primary => self.data.primary.push(exif_entry),
            Target::Thumbnail => self.data.thumbnail_directory.push(exif_entry),
        }
        Ok(())
    }

    /// Resolves one queued pointer and restores the stream position
    fn follow_pointer(
        &mut self,
        reader: &mut dyn SeekableReader,
        pointer: &DirectoryPointer,
        target: Target,
        depth: usize,
    ) -> ExifResult<()> {
        if pointer.is_maker_note {
            let info = maker_note::inspect_maker_note(&self.data.primary, pointer);
            self.data.maker_note = Some(info);
            return Ok(());
        }

        if depth > directory::MAX_DEPTH {
            warn!("Sub-directory '{}' at {} is nested deeper than {} levels, skipping",
                  pointer.name, pointer.absolute_offset, directory::MAX_DEPTH);
            return Ok(());
        }

        if !self.visited.insert(pointer.absolute_offset) {
            warn!("Sub-directory '{}' at {} was already decoded, skipping", pointer.name, pointer.absolute_offset);
            return Ok(());
        }

        let position = reader.stream_position()?;
        reader.seek(SeekFrom::Start(pointer.absolute_offset))?;
        self.decode_directory(reader, &pointer.name, target, depth)?;
        reader.seek(SeekFrom::Start(position))?;
        Ok(())
    }

    fn finish(mut self) -> ExifData {
        for entry in self.data.primary.entries() {
            if let Some(descriptor) = &entry.descriptor {
                self.data.name_index.insert(descriptor.name.clone(), entry.tag);
            }
        }

        info!("Extracted {} entries ({} in {})",
              self.data.primary.len(), self.data.thumbnail_directory.len(), directory_names::THUMBNAIL);
        self.data
    }
}
