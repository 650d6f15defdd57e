// Probe interactor - Orchestrates the media inspection use case

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::MediaDescription;
use crate::domain::rules::TrimBounds;
use crate::planner::PipelineBuilder;
use crate::ports::EnginePort;
use crate::probe::DiagnosticParser;
use crate::utils::time::TimeCodec;

/// Interactor for the probe/inspect use case
pub struct ProbeInteractor {
    engine: Arc<dyn EnginePort>,
}

impl ProbeInteractor {
    /// Create new probe interactor with an injected engine
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    /// Stage the source bytes, run the probe vector, and parse the
    /// resulting diagnostics into a media description.
    ///
    /// An unparseable diagnostic stream yields the valid all-default
    /// description, not an error.
    pub async fn execute(&self, request: ProbeRequest) -> Result<ProbeResponse, DomainError> {
        info!("Probing {}", request.source_name);

        self.engine
            .stage_input(&request.source_name, &request.bytes)
            .await?;

        let args = PipelineBuilder::probe_args(&request.source_name);
        let lines = self.engine.run(&args).await?;
        let description = DiagnosticParser::parse(&lines);

        info!(
            "Probe recovered container '{}', duration '{}', {} stream(s)",
            description.container,
            description.duration,
            description.total_streams()
        );

        Ok(ProbeResponse { description })
    }

    /// Render a description in the requested format
    pub fn render(
        &self,
        description: &MediaDescription,
        format: &str,
    ) -> Result<String, DomainError> {
        match format {
            "json" => self.format_as_json(description),
            "yaml" => self.format_as_yaml(description),
            "text" => Ok(self.format_as_text(description)),
            other => Err(DomainError::BadArgs(format!(
                "Unknown format: {}. Valid formats: text, json, yaml",
                other
            ))),
        }
    }

    /// Format a description as JSON
    fn format_as_json(&self, description: &MediaDescription) -> Result<String, DomainError> {
        serde_json::to_string_pretty(description)
            .map_err(|e| DomainError::InternalError(format!("JSON serialization failed: {}", e)))
    }

    /// Format a description as YAML
    fn format_as_yaml(&self, description: &MediaDescription) -> Result<String, DomainError> {
        serde_yaml::to_string(description)
            .map_err(|e| DomainError::InternalError(format!("YAML serialization failed: {}", e)))
    }

    /// Format a description as human-readable text.
    ///
    /// Unrecovered fields print their sentinels verbatim.
    fn format_as_text(&self, description: &MediaDescription) -> String {
        let codec = TimeCodec::new();
        let bound = TrimBounds::trim_bound_seconds(description);

        let mut output = String::new();
        output.push_str("Media description:\n");
        output.push_str(&format!("  Container: {}\n", description.container));
        output.push_str(&format!("  Duration: {}\n", description.duration));
        output.push_str(&format!(
            "  Trim bound: {} ({} s)\n",
            codec.seconds_to_clock(bound),
            bound
        ));

        if !description.video_streams.is_empty() {
            output.push_str(&format!(
                "\nVideo streams ({}):\n",
                description.video_streams.len()
            ));
            for (i, stream) in description.video_streams.iter().enumerate() {
                output.push_str(&format!(
                    "  Stream #{}: {} {}x{}, SAR {}, {} kb/s, {} fps\n",
                    i,
                    stream.codec,
                    stream.width,
                    stream.height,
                    stream.aspect_ratio,
                    stream.bitrate,
                    stream.framerate
                ));
            }
        }

        if !description.audio_streams.is_empty() {
            output.push_str(&format!(
                "\nAudio streams ({}):\n",
                description.audio_streams.len()
            ));
            for (i, stream) in description.audio_streams.iter().enumerate() {
                output.push_str(&format!(
                    "  Stream #{}: {} {} Hz, {} channel(s), layout {}\n",
                    i, stream.codec, stream.sample_rate, stream.channels, stream.channel_layout
                ));
            }
        }

        output
    }
}

/// Request for media inspection
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// Bare filename the source is staged under in the engine filesystem
    pub source_name: String,
    /// Source file bytes
    pub bytes: Vec<u8>,
}

/// Response from media inspection
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub description: MediaDescription,
}
