//! Logger utility for application-wide logging
//!
//! The library reports every diagnostic through the `log` facade. This module
//! provides a `log::Log` implementation for the command-line tool that writes
//! each record to a log file and echoes it to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<File>,
    /// Most verbose level that is written
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated on open
    /// * `level` - Most verbose level that is written
    pub fn new(log_file: impl AsRef<Path>, level: Level) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(file),
            level,
        })
    }

    /// Writes one line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut file = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        writeln!(file, "{}", message)?;
        file.flush()
    }

    /// Installs a file-backed logger as the global `log` sink
    pub fn init_global_logger(log_file: impl AsRef<Path>, level: Level) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Every line is flushed as it is written
    }
}
