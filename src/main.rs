use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use grabbit::tui;

#[derive(Parser)]
#[command(
    name = "grabbit",
    version,
    about = "Pick files and folders in your terminal, copy their contents to the clipboard"
)]
struct Args {
    /// Write a debug log to this file. Off by default: a log file created
    /// in the working directory would show up in its own listing.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }

    log::info!("grabbit starting up");

    match tui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("grabbit: {e}");
            ExitCode::FAILURE
        }
    }
}
