//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::exif::errors::ExifResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation.
pub trait Command {
    /// Execute the command
    fn execute(&self) -> ExifResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> ExifResult<Box<dyn Command>>;
}
