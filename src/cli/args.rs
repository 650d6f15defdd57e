//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Arguments for the gif command
#[derive(Args, Debug)]
pub struct GifArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Trim start, in whole seconds
    #[arg(short, long)]
    pub start: u64,

    /// Trim duration, in whole seconds
    #[arg(short, long)]
    pub duration: u64,

    /// Output file path (default: the profile's literal output name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the dash command
#[derive(Args, Debug)]
pub struct DashArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Trim start, in whole seconds
    #[arg(short, long)]
    pub start: u64,

    /// Trim duration, in whole seconds
    #[arg(short, long)]
    pub duration: u64,

    /// Directory the manifest and segments are written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}
