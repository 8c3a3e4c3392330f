//! Per-format value materialization
//!
//! Turns a raw directory record into a [`DecodedValue`]. The 4-byte value
//! field either holds the value itself or a TIFF-header-relative offset to
//! it; which one depends on the format and count. Tag-specific
//! interpretations live in a small override table consulted before the
//! generic per-format rule.

use std::io::{Read, SeekFrom};
use log::{trace, warn};

use crate::exif::constants::{field_types, tags};
use crate::exif::errors::ExifResult;
use crate::exif::ifd::DirectoryEntry;
use crate::exif::value::{DecodedValue, Rational};
use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::utils::{string_utils, tag_utils};

/// Upper bound on speculative allocation for out-of-line arrays
const MAX_PREALLOCATED_VALUES: usize = 64;

/// What the value decoder needs besides the record itself
pub(crate) struct ValueContext<'h> {
    pub handler: &'h dyn ByteOrderHandler,
    /// Stream position of the TIFF header; all offsets are relative to it
    pub base: u64,
}

impl<'h> ValueContext<'h> {
    /// Runs `read` at a header-relative offset, then restores the stream position
    pub fn read_at<T>(
        &self,
        reader: &mut dyn SeekableReader,
        offset: u32,
        read: impl FnOnce(&mut dyn SeekableReader) -> ExifResult<T>,
    ) -> ExifResult<T> {
        let position = reader.stream_position()?;
        reader.seek(SeekFrom::Start(self.base + offset as u64))?;
        let result = read(&mut *reader);
        reader.seek(SeekFrom::Start(position))?;
        result
    }

    /// Reads `count` characters stored at the offset held in the value field
    fn read_text_at(&self, reader: &mut dyn SeekableReader, entry: &DirectoryEntry) -> ExifResult<String> {
        let offset = entry.value_offset(self.handler);
        let count = entry.count as u64;
        self.read_at(reader, offset, |r| {
            let mut buffer = Vec::new();
            Read::take(&mut *r, count).read_to_end(&mut buffer)?;
            if (buffer.len() as u64) < count {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("text value needs {} bytes, stream has {}", count, buffer.len()),
                ).into());
            }
            Ok(string_utils::bytes_to_latin1(&buffer))
        })
    }

    /// Reads `count` consecutive numerator/denominator pairs at the value offset
    fn read_rationals_at(&self, reader: &mut dyn SeekableReader, entry: &DirectoryEntry) -> ExifResult<Vec<Rational>> {
        let offset = entry.value_offset(self.handler);
        let count = entry.count as usize;
        let handler = self.handler;
        self.read_at(reader, offset, |r| {
            let mut rationals = Vec::with_capacity(count.min(MAX_PREALLOCATED_VALUES));
            for _ in 0..count {
                rationals.push(Rational::from(handler.read_rational(r)?));
            }
            Ok(rationals)
        })
    }
}

type OverrideDecoder = fn(&DirectoryEntry, &ValueContext, &mut dyn SeekableReader) -> ExifResult<DecodedValue>;

/// A tag-specific interpretation of one (tag, format) pair
struct ValueOverride {
    tag: u16,
    format: u16,
    applies_to_count: fn(u32) -> bool,
    decode: OverrideDecoder,
}

fn count_is_one(count: u32) -> bool {
    count == 1
}

fn count_is_four(count: u32) -> bool {
    count == 4
}

fn count_exceeds_inline(count: u32) -> bool {
    count > 4
}

/// GPSVersionID: four bytes rendered as a dotted version
fn decode_dotted_version(entry: &DirectoryEntry, _: &ValueContext, _: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    let [b0, b1, b2, b3] = entry.raw;
    Ok(DecodedValue::Text(format!("{}.{}.{}.{}", b0, b1, b2, b3)))
}

fn decode_first_byte(entry: &DirectoryEntry, _: &ValueContext, _: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    Ok(DecodedValue::Integer(entry.raw[0] as u32))
}

fn decode_inline_chars(entry: &DirectoryEntry, _: &ValueContext, _: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    Ok(DecodedValue::Text(string_utils::bytes_to_latin1(&entry.raw)))
}

/// ComponentConfiguration: component ids 0-6 shifted into digits
fn decode_component_digits(entry: &DirectoryEntry, _: &ValueContext, _: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    let digits: String = entry.raw.iter()
        .map(|&b| char::from_u32(b as u32 + '0' as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    Ok(DecodedValue::Text(digits))
}

fn decode_inline_u32(entry: &DirectoryEntry, ctx: &ValueContext, _: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    Ok(DecodedValue::Integer(ctx.handler.decode_u32(entry.raw)))
}

fn decode_text_at_offset(entry: &DirectoryEntry, ctx: &ValueContext, reader: &mut dyn SeekableReader) -> ExifResult<DecodedValue> {
    Ok(DecodedValue::Text(ctx.read_text_at(reader, entry)?))
}

/// Tag-specific decodes, checked before the generic format rules
const VALUE_OVERRIDES: &[ValueOverride] = &[
    ValueOverride {
        tag: tags::GPS_VERSION_ID,
        format: field_types::BYTE,
        applies_to_count: count_is_four,
        decode: decode_dotted_version,
    },
    ValueOverride {
        tag: tags::GPS_ALTITUDE_REF,
        format: field_types::BYTE,
        applies_to_count: count_is_one,
        decode: decode_first_byte,
    },
    ValueOverride {
        tag: tags::EXIF_VERSION,
        format: field_types::UNDEFINED,
        applies_to_count: count_is_four,
        decode: decode_inline_chars,
    },
    ValueOverride {
        tag: tags::FLASHPIX_VERSION,
        format: field_types::UNDEFINED,
        applies_to_count: count_is_four,
        decode: decode_inline_chars,
    },
    ValueOverride {
        tag: tags::COMPONENT_CONFIGURATION,
        format: field_types::UNDEFINED,
        applies_to_count: count_is_four,
        decode: decode_component_digits,
    },
    ValueOverride {
        tag: tags::FILE_SOURCE,
        format: field_types::UNDEFINED,
        applies_to_count: count_is_one,
        decode: decode_inline_u32,
    },
    ValueOverride {
        tag: tags::SCENE_TYPE,
        format: field_types::UNDEFINED,
        applies_to_count: count_is_one,
        decode: decode_inline_u32,
    },
    ValueOverride {
        tag: tags::GPS_PROCESSING_METHOD,
        format: field_types::UNDEFINED,
        applies_to_count: count_exceeds_inline,
        decode: decode_text_at_offset,
    },
];

fn find_override(entry: &DirectoryEntry) -> Option<&'static ValueOverride> {
    VALUE_OVERRIDES.iter().find(|o| {
        o.tag == entry.tag && o.format == entry.format && (o.applies_to_count)(entry.count)
    })
}

/// Decodes one directory record into a typed value
///
/// Unsupported combinations yield [`DecodedValue::Absent`] and a warning.
/// Errors are returned only when reading out-of-line data fails.
pub(crate) fn decode_value(
    entry: &DirectoryEntry,
    ctx: &ValueContext,
    reader: &mut dyn SeekableReader,
) -> ExifResult<DecodedValue> {
    let value = match find_override(entry) {
        Some(value_override) => {
            trace!("Tag {:#06x} decoded by override for format {}", entry.tag, entry.format);
            (value_override.decode)(entry, ctx, reader)?
        }
        None => decode_generic(entry, ctx, reader)?,
    };

    if !value.is_present() {
        warn!("Unable to decode tag {:#06x}: format {} [{}] with count {}",
              entry.tag, entry.format, tag_utils::get_field_type_name(entry.format), entry.count);
    }

    Ok(value)
}

/// The format-wide decoding rules
fn decode_generic(
    entry: &DirectoryEntry,
    ctx: &ValueContext,
    reader: &mut dyn SeekableReader,
) -> ExifResult<DecodedValue> {
    let value = match entry.format {
        field_types::ASCII => {
            if entry.count <= 4 {
                let inline = &entry.raw[..entry.count as usize];
                DecodedValue::Text(string_utils::bytes_to_latin1(inline))
            } else {
                DecodedValue::Text(ctx.read_text_at(reader, entry)?)
            }
        }
        field_types::SHORT if entry.count == 1 => {
            DecodedValue::Integer(ctx.handler.decode_u16(entry.raw) as u32)
        }
        field_types::LONG if entry.count == 1 => {
            DecodedValue::Integer(ctx.handler.decode_u32(entry.raw))
        }
        // Always out of line, even for a single value
        field_types::RATIONAL if entry.count >= 1 => {
            let mut rationals = ctx.read_rationals_at(reader, entry)?;
            if rationals.len() == 1 {
                DecodedValue::Rational(rationals.remove(0))
            } else {
                DecodedValue::RationalList(rationals)
            }
        }
        field_types::SRATIONAL if entry.count == 1 => {
            let rationals = ctx.read_rationals_at(reader, entry)?;
            rationals.first().copied().map_or(DecodedValue::Absent, DecodedValue::Rational)
        }
        // BYTE and UNDEFINED only have tag-specific meanings; signed and
        // floating point formats are not decoded
        _ => DecodedValue::Absent,
    };

    Ok(value)
}
