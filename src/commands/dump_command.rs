//! EXIF metadata dump command
//!
//! Prints every extracted entry of a JPEG file, optionally with
//! descriptions, formats and decimal GPS coordinates.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::input_path;
use crate::exif::errors::ExifResult;
use crate::exif::reader::ExifReaderBuilder;
use crate::exif::types::{ExifData, ExifEntry};
use crate::utils::tag_utils;

/// Command for listing the metadata of a JPEG file
pub struct DumpCommand {
    /// Path to the input file
    input_file: String,
    /// Print descriptions, formats and counts
    verbose: bool,
    /// Print decimal GPS coordinates
    show_gps: bool,
    /// Whether the thumbnail directory is followed
    extract_thumbnail: bool,
}

impl DumpCommand {
    /// Create a new dump command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        Ok(DumpCommand {
            input_file: input_path(args)?,
            verbose: args.get_flag("verbose"),
            show_gps: args.get_flag("gps"),
            extract_thumbnail: !args.get_flag("no-thumbnail"),
        })
    }

    fn format_entry(&self, entry: &ExifEntry) -> String {
        if self.verbose {
            format!("[{}] {} = {}  ({}, count {})",
                    entry.directory, entry.full_title(), entry.value,
                    tag_utils::get_field_type_name(entry.format), entry.count)
        } else {
            format!("{} = {}", entry.short_title(), entry.value)
        }
    }

    fn display_entries(&self, data: &ExifData) {
        println!("Entries: {}", data.entries().len());
        for entry in data.entries() {
            println!("  {}", self.format_entry(entry));
        }

        let thumbnail_directory = data.thumbnail_directory();
        if self.verbose && !thumbnail_directory.is_empty() {
            println!("Thumbnail directory entries: {}", thumbnail_directory.len());
            for entry in thumbnail_directory.entries() {
                println!("  {}", self.format_entry(entry));
            }
        }
    }

    fn display_gps(&self, data: &ExifData) {
        match (data.gps_latitude(), data.gps_longitude()) {
            (Some(latitude), Some(longitude)) => {
                println!("GPS: {:.6}, {:.6}", latitude, longitude);
            }
            _ => println!("GPS: not available"),
        }
    }

    fn display_extras(&self, data: &ExifData) {
        if let Some(maker_note) = data.maker_note() {
            println!("MakerNote: {} bytes at offset {} ({} {}, not decoded)",
                     maker_note.length, maker_note.offset, maker_note.manufacturer, maker_note.model);
        }

        match data.thumbnail() {
            Some(thumbnail) => println!("Thumbnail: {} bytes at offset {}", thumbnail.len(), thumbnail.offset()),
            None if self.extract_thumbnail => println!("Thumbnail: none"),
            None => {}
        }
    }
}

impl Command for DumpCommand {
    fn execute(&self) -> ExifResult<()> {
        info!("Dumping EXIF metadata of {}", self.input_file);

        let reader = ExifReaderBuilder::new()
            .extract_thumbnail(self.extract_thumbnail)
            .build();
        let data = reader.load(&self.input_file)?;

        if data.is_empty() {
            println!("No EXIF metadata found in {}", self.input_file);
            return Ok(());
        }

        self.display_entries(&data);
        if self.show_gps {
            self.display_gps(&data);
        }
        self.display_extras(&data);
        Ok(())
    }
}
