// Transcode interactor - Orchestrates the GIF and DASH packaging use cases

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::{ArtifactSet, TranscodeProfile};
use crate::output::ArtifactExtractor;
use crate::planner::{PipelineBuilder, GIF_OUTPUT};
use crate::ports::EnginePort;

/// Interactor for the transcode use cases
pub struct TranscodeInteractor {
    engine: Arc<dyn EnginePort>,
}

impl TranscodeInteractor {
    /// Create new transcode interactor with an injected engine
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    /// Stage the source, run the profile's pipeline, discover what was
    /// written, and read the produced files back out of the engine
    /// filesystem.
    pub async fn execute(
        &self,
        request: TranscodeRequest,
    ) -> Result<TranscodeResponse, DomainError> {
        let profile = &request.profile;
        profile.validate()?;

        info!(
            "Transcoding {} (start {} s, duration {} s)",
            profile.source(),
            profile.window().start_seconds,
            profile.window().duration_seconds
        );

        self.engine
            .stage_input(profile.source(), &request.bytes)
            .await?;

        let args = PipelineBuilder::build(profile);
        let lines = self.engine.run(&args).await?;

        let names = Self::produced_names(profile, &lines);
        info!("Run produced {} artifact(s)", names.len());

        let mut artifacts = Vec::with_capacity(names.len());
        for name in names {
            let bytes = self.engine.read_output(&name).await?;
            artifacts.push(Artifact { name, bytes });
        }

        Ok(TranscodeResponse { artifacts })
    }

    /// Names of the files a run wrote.
    ///
    /// The GIF profile has a single literal output; the multi-output DASH
    /// profile reports its files only through the run diagnostics.
    fn produced_names(profile: &TranscodeProfile, lines: &[String]) -> ArtifactSet {
        match profile {
            TranscodeProfile::GifExtraction { .. } => {
                let mut set = ArtifactSet::new();
                set.insert(GIF_OUTPUT);
                set
            }
            TranscodeProfile::FragmentedDashPackage { .. } => ArtifactExtractor::extract(lines),
        }
    }
}

/// Request for a transcode run
#[derive(Debug, Clone)]
pub struct TranscodeRequest {
    /// Source file bytes, staged under the profile's source name
    pub bytes: Vec<u8>,
    /// Profile selecting the pipeline and trim window
    pub profile: TranscodeProfile,
}

/// One produced output file
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Response from a transcode run
#[derive(Debug, Clone)]
pub struct TranscodeResponse {
    /// Produced files in first-reported order
    pub artifacts: Vec<Artifact>,
}
