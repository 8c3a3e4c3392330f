//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod dump_command;
pub mod thumbnail_command;

pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;
pub use thumbnail_command::ThumbnailCommand;

use clap::ArgMatches;
use crate::exif::errors::{ExifError, ExifResult};

/// Factory for creating command instances based on CLI arguments
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl Default for ExifkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ExifResult<Box<dyn Command>> {
        if args.get_one::<String>("thumbnail").is_some() {
            Ok(Box::new(ThumbnailCommand::new(args)?))
        } else {
            Ok(Box::new(DumpCommand::new(args)?))
        }
    }
}

/// Reads the required positional input path
pub(crate) fn input_path(args: &ArgMatches) -> ExifResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))
}
