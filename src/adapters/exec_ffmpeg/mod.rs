//! FFmpeg execution adapter
//!
//! Hosts the engine as a subprocess. The virtual filesystem the engine and
//! the interactors share is a private scratch directory; diagnostic lines
//! are the engine's stderr, collected in emission order.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::DomainError;
use crate::ports::EnginePort;

/// Subprocess-backed engine adapter
pub struct FfmpegExecAdapter {
    engine_binary: String,
    workdir: TempDir,
    // Runs sharing the scratch directory must not overlap
    run_lock: Mutex<()>,
}

impl FfmpegExecAdapter {
    /// Create a new adapter with a fresh scratch directory
    pub fn new(engine_binary: &str) -> Result<Self, DomainError> {
        let workdir = TempDir::new()
            .map_err(|e| DomainError::FsFail(format!("Failed to create scratch directory: {}", e)))?;

        Ok(Self {
            engine_binary: engine_binary.to_string(),
            workdir,
            run_lock: Mutex::new(()),
        })
    }

    /// Resolve a virtual filename inside the scratch directory, rejecting
    /// anything that could escape it
    fn resolve(&self, name: &str) -> Result<PathBuf, DomainError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(DomainError::BadArgs(format!(
                "Virtual filenames must be bare names, got: {}",
                name
            )));
        }
        Ok(self.workdir.path().join(name))
    }
}

#[async_trait]
impl EnginePort for FfmpegExecAdapter {
    async fn stage_input(&self, name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        let path = self.resolve(name)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to stage {}: {}", name, e)))
    }

    async fn run(&self, args: &[String]) -> Result<Vec<String>, DomainError> {
        let _guard = self.run_lock.lock().await;

        debug!("Invoking engine: {} {}", self.engine_binary, args.join(" "));

        let mut child = Command::new(&self.engine_binary)
            .args(args)
            .current_dir(self.workdir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DomainError::EngineFail(format!(
                    "Failed to spawn engine '{}': {}",
                    self.engine_binary, e
                ))
            })?;

        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| DomainError::EngineFail("Failed to capture diagnostics".to_string()))?;

        let mut lines = Vec::new();
        let mut reader = BufReader::new(stderr).lines();
        while let Some(line) = reader
            .next_line()
            .await
            .map_err(|e| DomainError::EngineFail(format!("Failed to read diagnostics: {}", e)))?
        {
            lines.push(line);
        }

        let status = child
            .wait()
            .await
            .map_err(|e| DomainError::EngineFail(format!("Engine did not exit cleanly: {}", e)))?;

        // A probe invocation has no output file and always exits non-zero;
        // the diagnostics are still the product. Callers that expect output
        // files detect failure by their absence.
        if !status.success() {
            warn!("Engine exited with status {} ({} diagnostic lines)", status, lines.len());
        }

        Ok(lines)
    }

    async fn read_output(&self, name: &str) -> Result<Vec<u8>, DomainError> {
        let path = self.resolve(name)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to read {}: {}", name, e)))
    }
}
