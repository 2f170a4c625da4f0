//! Command-line entry point.
//!
//! Parses arguments, sets up logging and hands off to the library. Results go
//! to stdout as JSON lines; logs go to stderr.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use site_origin::{init_logger_with, run_detection, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let stdout = std::io::stdout();
    match run_detection(config, stdout.lock()).await {
        Ok(report) => {
            if report.total_urls > 0 && report.fetch_errors == report.total_urls {
                log::warn!("Every URL failed to fetch");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("site_origin error: {e:#}");
            process::exit(1);
        }
    }
}
