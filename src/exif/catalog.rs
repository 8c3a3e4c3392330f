//! EXIF tag catalog
//!
//! The catalog maps tag codes to human-readable names and descriptions, and
//! marks which tags are pointers to nested directories. The standard catalog
//! is parsed once from the bundled `exif_tags.toml` and shared read-only by
//! every parse; decoders receive it by reference.

use std::collections::HashMap;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::{debug, error};

use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::tag_utils;

/// Tag definitions compiled into the crate
pub(crate) const BUNDLED_TAGS: &str = include_str!("../../exif_tags.toml");

lazy_static! {
    // Parse the bundled definitions on first use. The catalog tests parse
    // BUNDLED_TAGS directly, so the empty fallback means a broken build.
    static ref STANDARD_CATALOG: TagCatalog = {
        BUNDLED_TAGS.parse().unwrap_or_else(|e| {
            error!("Failed to parse bundled EXIF tag definitions: {}", e);
            TagCatalog::default()
        })
    };
}

/// Static description of one known tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    pub code: u16,
    pub name: String,
    pub description: String,
    /// Whether the value field holds the offset of a nested directory
    pub is_directory_pointer: bool,
}

impl TagDescriptor {
    /// Title in the form `0x010F Make`
    pub fn short_title(&self) -> String {
        tag_utils::tag_title(self.code, Some(&self.name))
    }

    /// Short title followed by the description in parentheses
    pub fn full_title(&self) -> String {
        format!("{} ({})", self.short_title(), self.description)
    }
}

/// Immutable lookup table of known tags
#[derive(Debug, Default)]
pub struct TagCatalog {
    descriptors: HashMap<u16, TagDescriptor>,
    codes_by_name: HashMap<String, u16>,
}

impl FromStr for TagCatalog {
    type Err = ExifError;

    /// Parse tag definitions from a TOML string
    ///
    /// The document is a list of `[[tag]]` tables with `code`, `name`,
    /// `description` and an optional boolean `pointer`.
    fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::InvalidCatalog(format!("Failed to parse TOML: {}", e))),
        };

        let entries = toml_value.get("tag")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ExifError::InvalidCatalog("missing [[tag]] array".to_string()))?;

        let mut catalog = TagCatalog::default();
        for (index, entry) in entries.iter().enumerate() {
            let descriptor = TagCatalog::parse_descriptor(entry)
                .map_err(|msg| ExifError::InvalidCatalog(format!("tag #{}: {}", index, msg)))?;
            catalog.insert(descriptor)?;
        }

        debug!("Loaded {} tag definitions", catalog.len());
        Ok(catalog)
    }
}

impl TagCatalog {
    /// The process-wide catalog built from the bundled definitions
    pub fn standard() -> &'static TagCatalog {
        &STANDARD_CATALOG
    }

    fn parse_descriptor(entry: &toml::Value) -> Result<TagDescriptor, String> {
        let code = entry.get("code")
            .and_then(|v| v.as_integer())
            .ok_or("missing integer 'code'")?;
        let code = u16::try_from(code).map_err(|_| format!("code {} does not fit in 16 bits", code))?;

        let name = entry.get("name")
            .and_then(|v| v.as_str())
            .ok_or("missing string 'name'")?;
        let description = entry.get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let pointer = entry.get("pointer")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Ok(TagDescriptor {
            code,
            name: name.to_string(),
            description: description.to_string(),
            is_directory_pointer: pointer,
        })
    }

    fn insert(&mut self, descriptor: TagDescriptor) -> ExifResult<()> {
        if self.descriptors.contains_key(&descriptor.code) {
            return Err(ExifError::InvalidCatalog(format!("duplicate tag code {:#06x}", descriptor.code)));
        }
        if self.codes_by_name.contains_key(&descriptor.name) {
            return Err(ExifError::InvalidCatalog(format!("duplicate tag name {}", descriptor.name)));
        }

        self.codes_by_name.insert(descriptor.name.clone(), descriptor.code);
        self.descriptors.insert(descriptor.code, descriptor);
        Ok(())
    }

    /// Looks up a tag by code
    pub fn get(&self, code: u16) -> Option<&TagDescriptor> {
        self.descriptors.get(&code)
    }

    /// Looks up the code registered under a tag name
    pub fn code_for(&self, name: &str) -> Option<u16> {
        self.codes_by_name.get(name).copied()
    }

    /// Whether the tag is known and marked as a directory pointer
    pub fn is_directory_pointer(&self, code: u16) -> bool {
        self.get(code).map_or(false, |d| d.is_directory_pointer)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
