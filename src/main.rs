//! Fragpack CLI
//!
//! Trims a window out of a local video and produces either an animated GIF
//! preview or a multi-bitrate fragmented MPEG-DASH package.
//!
//! # Usage
//!
//! ```bash
//! fragpack inspect --input video.mp4 --format json
//! fragpack gif --input video.mp4 --start 5 --duration 10
//! fragpack dash --input video.mp4 --start 5 --duration 10 --output-dir pkg/
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use fragpack_cli::adapters::AppConfig;
use fragpack_cli::app::container::AppContainer;
use fragpack_cli::cli::{commands, Cli, Commands};
use fragpack_cli::utils::logging;

/// Main entry point for the fragpack CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init(log_level);

    info!("Starting fragpack");

    let container = AppContainer::new(&config)?;

    match cli.command {
        Commands::Inspect(args) => {
            commands::execute_inspect(&container, args).await?;
        }
        Commands::Gif(args) => {
            commands::execute_gif(&container, args).await?;
        }
        Commands::Dash(args) => {
            commands::execute_dash(&container, args).await?;
        }
    }

    info!("fragpack completed successfully");
    Ok(())
}
