//! Quake Report CLI
//!
//! Lists recent earthquakes from the configured feed.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::{Parser, Subcommand};
use quake_report::{
    error::Result,
    models::{Config, DisplayConfig, Earthquake},
    pipeline::EarthquakeLoader,
    services::{FeedFetcher, build_rows, parse_feed},
};

/// quake-report - Recent earthquake listing
#[derive(Parser, Debug)]
#[command(
    name = "quake-report",
    version,
    about = "Lists recent earthquakes from the USGS feed"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "quake.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the feed and list earthquakes
    List {
        /// Feed URL (default: feed.url from config)
        #[arg(long)]
        url: Option<String>,

        /// Print records as JSON instead of rows
        #[arg(long)]
        json: bool,
    },

    /// Parse a saved feed file and list earthquakes
    Parse {
        /// Path to a GeoJSON feed file
        file: PathBuf,

        /// Print records as JSON instead of rows
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print earthquakes as rows, or the empty-state message.
fn print_quakes(quakes: &[Earthquake], display: &DisplayConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(quakes)?);
        return Ok(());
    }

    if quakes.is_empty() {
        println!("{}", display.empty_message);
        return Ok(());
    }

    for row in build_rows(quakes, display, &Local) {
        println!("{}", row.to_line());
    }
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::List { url, json } => {
            if let Some(url) = url {
                config.feed.url = url;
            }

            let fetcher = FeedFetcher::new(&config.feed)?;
            let loader = Arc::new(EarthquakeLoader::from_config(
                Arc::new(fetcher),
                &config.feed,
            ));

            // Load failures are already logged; show the empty state instead.
            let quakes = match loader.spawn().await {
                Ok(Ok(quakes)) => quakes,
                Ok(Err(_)) => Vec::new(),
                Err(e) => {
                    log::error!("Load task failed: {}", e);
                    Vec::new()
                }
            };

            print_quakes(&quakes, &config.display, json)?;
        }

        Command::Parse { file, json } => {
            let text = std::fs::read_to_string(&file)?;
            let quakes = match parse_feed(&text) {
                Ok(quakes) => quakes,
                Err(e) => {
                    log::error!("Could not parse {}: {}", file.display(), e);
                    Vec::new()
                }
            };

            print_quakes(&quakes, &config.display, json)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            // Check the file itself, not the defaults it may have fallen back to.
            let config = Config::load(&cli.config)
                .and_then(|config| config.validate().map(|()| config))
                .inspect_err(|e| log::error!("Config validation failed: {}", e))?;
            log::info!("✓ Config OK");
            log::info!("Feed URL: {}", config.feed.url);
            log::info!(
                "Timeouts: connect {}s, read {}s",
                config.feed.connect_timeout_secs,
                config.feed.read_timeout_secs
            );
        }
    }

    Ok(())
}
