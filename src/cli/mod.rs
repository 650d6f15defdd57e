//! CLI module for fragpack
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Fragpack video packager
///
/// Trims a window out of a local video and produces either an animated GIF
/// preview or a multi-bitrate fragmented MPEG-DASH package.
#[derive(Parser)]
#[command(name = "fragpack")]
#[command(about = "Fragpack - GIF previews and fragmented DASH packages from video trims")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect video file information
    Inspect(args::InspectArgs),
    /// Extract an animated GIF preview from a trim window
    Gif(args::GifArgs),
    /// Package a trim window as a fragmented DASH stream
    Dash(args::DashArgs),
}
