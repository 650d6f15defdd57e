use std::sync::Arc;

use crate::adapters::{AppConfig, FfmpegExecAdapter};
use crate::app::{ProbeInteractor, TranscodeInteractor};
use crate::error::FragpackResult;
use crate::ports::EnginePort;

/// Wires adapters into interactors.
///
/// Both interactors share one engine handle, so probe and transcode runs
/// against the same virtual filesystem are naturally serialized by the
/// adapter's run lock.
pub struct AppContainer {
    probe_interactor: Arc<ProbeInteractor>,
    transcode_interactor: Arc<TranscodeInteractor>,
}

impl AppContainer {
    /// Build the container with the subprocess engine adapter
    pub fn new(config: &AppConfig) -> FragpackResult<Self> {
        let engine: Arc<dyn EnginePort> = Arc::new(FfmpegExecAdapter::new(&config.engine_binary)?);
        Ok(Self::with_engine(engine))
    }

    /// Build the container around any engine implementation (test seam)
    pub fn with_engine(engine: Arc<dyn EnginePort>) -> Self {
        let probe_interactor = Arc::new(ProbeInteractor::new(Arc::clone(&engine)));
        let transcode_interactor = Arc::new(TranscodeInteractor::new(Arc::clone(&engine)));

        Self {
            probe_interactor,
            transcode_interactor,
        }
    }

    pub fn probe_interactor(&self) -> Arc<ProbeInteractor> {
        Arc::clone(&self.probe_interactor)
    }

    pub fn transcode_interactor(&self) -> Arc<TranscodeInteractor> {
        Arc::clone(&self.transcode_interactor)
    }
}
