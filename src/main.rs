use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, Level};

use exifkit::utils::logger::Logger;
use exifkit::commands::{CommandFactory, ExifkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("exifkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract EXIF metadata and thumbnails from JPEG files")
        .arg(
            Arg::new("input")
                .help("Input JPEG file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show tag descriptions, formats and the thumbnail directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("gps")
                .long("gps")
                .help("Show GPS position in decimal degrees")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("thumbnail")
                .short('t')
                .long("thumbnail")
                .help("Write the embedded thumbnail to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("no-thumbnail")
                .long("no-thumbnail")
                .help("Do not follow the thumbnail directory")
                .action(ArgAction::SetTrue)
                .conflicts_with("thumbnail"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write diagnostics to this file as well as the console")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = if verbose { Level::Trace } else { Level::Info };
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up log file {}: {}", log_file, e);
                process::exit(1);
            }
        }
        None => {
            let log_level = if verbose { "debug" } else { "warn" };
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .format_timestamp(None)
                .init();
        }
    }

    let factory = ExifkitCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
