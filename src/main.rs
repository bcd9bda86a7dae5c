//! CLI entry point for building tile catalogs and reveal rules

use clap::Parser;
use dungeontiles::io::cli::{Cli, FileProcessor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> dungeontiles::Result<()> {
    let cli = Cli::parse();
    // A logger can only be missing if one was already installed
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let mut processor = FileProcessor::from_cli(&cli);
    let summary = processor.process()?;
    log::info!(
        "{} map(s), {} distinct tile(s), {} copies, {} narrated",
        summary.maps,
        summary.distinct_tiles,
        summary.total_tiles,
        summary.narrated_tiles
    );
    Ok(())
}
