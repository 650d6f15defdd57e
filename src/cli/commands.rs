//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::AppContainer;
use crate::app::probe_interactor::ProbeRequest;
use crate::app::transcode_interactor::TranscodeRequest;
use crate::cli::args::{DashArgs, GifArgs, InspectArgs};
use crate::domain::model::{TranscodeProfile, TrimWindow};
use crate::error::FragpackError;

/// Execute the inspect command
pub async fn execute_inspect(container: &AppContainer, args: InspectArgs) -> Result<()> {
    let (source_name, bytes) = read_source(&args.input)?;

    let interactor = container.probe_interactor();
    let response = interactor.execute(ProbeRequest { source_name, bytes }).await?;

    let rendered = interactor.render(&response.description, &args.format)?;
    println!("{}", rendered);

    Ok(())
}

/// Execute the gif command
pub async fn execute_gif(container: &AppContainer, args: GifArgs) -> Result<()> {
    let (source_name, bytes) = read_source(&args.input)?;
    let window = TrimWindow::new(args.start, args.duration);
    let profile = TranscodeProfile::GifExtraction {
        source: source_name,
        window,
    };

    let response = container
        .transcode_interactor()
        .execute(TranscodeRequest { bytes, profile })
        .await?;

    // Single-output profile: exactly one artifact, the literal GIF name
    let artifact = response
        .artifacts
        .into_iter()
        .next()
        .ok_or_else(|| FragpackError::EngineError {
            message: "Run produced no output".to_string(),
        })?;

    let destination = args
        .output
        .unwrap_or_else(|| Path::new(&artifact.name).to_path_buf());
    std::fs::write(&destination, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    info!("Wrote {} ({} bytes)", destination.display(), artifact.bytes.len());
    println!("{}", destination.display());

    Ok(())
}

/// Execute the dash command
pub async fn execute_dash(container: &AppContainer, args: DashArgs) -> Result<()> {
    let (source_name, bytes) = read_source(&args.input)?;
    let window = TrimWindow::new(args.start, args.duration);
    let profile = TranscodeProfile::FragmentedDashPackage {
        source: source_name,
        window,
    };

    let response = container
        .transcode_interactor()
        .execute(TranscodeRequest { bytes, profile })
        .await?;

    if response.artifacts.is_empty() {
        anyhow::bail!("Run produced no output files; check the engine installation");
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    for artifact in &response.artifacts {
        let destination = args.output_dir.join(&artifact.name);
        std::fs::write(&destination, &artifact.bytes)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
        println!("{}", destination.display());
    }

    info!(
        "Wrote {} file(s) into {}",
        response.artifacts.len(),
        args.output_dir.display()
    );

    Ok(())
}

/// Read the input file and derive the bare name it is staged under in the
/// engine's virtual filesystem
fn read_source(input: &Path) -> Result<(String, Vec<u8>)> {
    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FragpackError::InputFileNotFound {
            path: input.display().to_string(),
        })?;

    let bytes = std::fs::read(input).map_err(|_| FragpackError::InputFileNotFound {
        path: input.display().to_string(),
    })?;

    Ok((source_name, bytes))
}
