//! Thumbnail extraction command
//!
//! Writes the embedded JPEG thumbnail to a file. JPEG destinations receive
//! the raw bytes; any other extension is decoded and re-encoded by `image`.

use std::fs;
use std::path::Path;
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::input_path;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReaderBuilder;
use crate::exif::thumbnail::Thumbnail;

/// Command for extracting the embedded thumbnail
pub struct ThumbnailCommand {
    /// Path to the input file
    input_file: String,
    /// Path to the output image
    output_file: String,
}

impl ThumbnailCommand {
    /// Create a new thumbnail command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    pub fn new(args: &ArgMatches) -> ExifResult<Self> {
        let output_file = args.get_one::<String>("thumbnail")
            .cloned()
            .ok_or_else(|| ExifError::GenericError("Missing thumbnail output path".to_string()))?;

        Ok(ThumbnailCommand {
            input_file: input_path(args)?,
            output_file,
        })
    }

    /// Writes the thumbnail to the output path
    fn save(&self, thumbnail: &Thumbnail) -> ExifResult<()> {
        let path = Path::new(&self.output_file);

        if is_jpeg_path(path) {
            debug!("Writing raw thumbnail bytes to {}", path.display());
            fs::write(path, thumbnail.data())?;
            return Ok(());
        }

        debug!("Re-encoding thumbnail to {}", path.display());
        let image = thumbnail.decode()?;
        image.save(path)
            .map_err(|e| ExifError::GenericError(format!("Failed to save thumbnail to {}: {}", path.display(), e)))
    }
}

/// Whether the path has a `.jpg` or `.jpeg` extension, in any case
fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false)
}

impl Command for ThumbnailCommand {
    fn execute(&self) -> ExifResult<()> {
        info!("Extracting thumbnail from {}", self.input_file);

        let reader = ExifReaderBuilder::new()
            .extract_thumbnail(true)
            .build();
        let data = reader.load(&self.input_file)?;

        let thumbnail = data.thumbnail()
            .ok_or_else(|| ExifError::GenericError(format!("No JPEG thumbnail found in {}", self.input_file)))?;

        self.save(thumbnail)?;
        println!("Thumbnail ({} bytes) written to {}", thumbnail.len(), self.output_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::is_jpeg_path;
    use std::path::Path;

    #[test]
    fn test_jpeg_extension_detection() {
        assert!(is_jpeg_path(Path::new("thumb.jpg")));
        assert!(is_jpeg_path(Path::new("thumb.JPEG")));
        assert!(!is_jpeg_path(Path::new("thumb.png")));
        assert!(!is_jpeg_path(Path::new("thumb")));
    }
}
