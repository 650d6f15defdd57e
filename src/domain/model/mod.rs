// Domain models - Core types and data structures

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Sentinel for numeric fields that could not be recovered from diagnostics
pub const NOT_FOUND: i32 = -1;

/// Sentinel for string fields that could not be recovered from diagnostics
pub const NOT_FOUND_TEXT: &str = "-1";

/// Suffix the engine appends to in-progress segment writes
pub const TEMP_SUFFIX: &str = ".tmp";

/// Structured media description recovered from the engine's probe diagnostics.
///
/// The all-default value is a valid "unparsed/unknown" description, not an
/// error. Stream order matches the order of appearance in the diagnostic
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescription {
    /// Clock-style duration `HH:MM:SS.fff`; empty if not found
    pub duration: String,
    /// Short container format name; empty if not found
    pub container: String,
    /// Video streams in diagnostic order
    pub video_streams: Vec<VideoStreamInfo>,
    /// Audio streams in diagnostic order
    pub audio_streams: Vec<AudioStreamInfo>,
}

impl MediaDescription {
    /// True when nothing recognizable was recovered from the diagnostics
    pub fn is_unparsed(&self) -> bool {
        self.duration.is_empty()
            && self.container.is_empty()
            && self.video_streams.is_empty()
            && self.audio_streams.is_empty()
    }

    /// Get primary video stream (first in diagnostic order)
    pub fn primary_video_stream(&self) -> Option<&VideoStreamInfo> {
        self.video_streams.first()
    }

    /// Get primary audio stream
    pub fn primary_audio_stream(&self) -> Option<&AudioStreamInfo> {
        self.audio_streams.first()
    }

    /// Get total number of streams
    pub fn total_streams(&self) -> usize {
        self.video_streams.len() + self.audio_streams.len()
    }
}

/// Video stream information
///
/// Every field not recoverable from the diagnostics holds its sentinel
/// (`NOT_FOUND` / `NOT_FOUND_TEXT`), never an absent value, so consumers
/// can format without null checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStreamInfo {
    /// Codec name
    pub codec: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Composite `SAR:DAR` capture, e.g. `"1:1 DAR 16:9"`
    pub aspect_ratio: String,
    /// Frame rate in whole fps
    pub framerate: i32,
    /// Bitrate in kb/s
    pub bitrate: i32,
}

impl Default for VideoStreamInfo {
    fn default() -> Self {
        Self {
            codec: NOT_FOUND_TEXT.to_string(),
            width: NOT_FOUND,
            height: NOT_FOUND,
            aspect_ratio: NOT_FOUND_TEXT.to_string(),
            framerate: NOT_FOUND,
            bitrate: NOT_FOUND,
        }
    }
}

/// Audio stream information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamInfo {
    /// Codec name
    pub codec: String,
    /// Channel count as the engine reports it (free text, e.g. `"2"`)
    pub channels: String,
    /// Channel layout, e.g. `"stereo"`
    pub channel_layout: String,
    /// Sample rate in Hz
    pub sample_rate: i32,
}

impl Default for AudioStreamInfo {
    fn default() -> Self {
        Self {
            codec: NOT_FOUND_TEXT.to_string(),
            channels: NOT_FOUND_TEXT.to_string(),
            channel_layout: NOT_FOUND_TEXT.to_string(),
            sample_rate: NOT_FOUND,
        }
    }
}

/// User-chosen trim window, in whole seconds.
///
/// Start and duration are independent; the core does not validate them
/// against the source duration (a host concern, via the trim-bound rule).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimWindow {
    pub start_seconds: u64,
    pub duration_seconds: u64,
}

impl TrimWindow {
    /// Create a new trim window
    pub fn new(start_seconds: u64, duration_seconds: u64) -> Self {
        Self {
            start_seconds,
            duration_seconds,
        }
    }
}

/// Transcoding profile selecting which pipeline the builder emits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscodeProfile {
    /// Single-file animated GIF extraction over the trim window
    GifExtraction { source: String, window: TrimWindow },
    /// Multi-rendition fragmented MPEG-DASH package over the trim window
    FragmentedDashPackage { source: String, window: TrimWindow },
}

impl TranscodeProfile {
    /// Source filename referenced by the pipeline's input flag
    pub fn source(&self) -> &str {
        match self {
            TranscodeProfile::GifExtraction { source, .. } => source,
            TranscodeProfile::FragmentedDashPackage { source, .. } => source,
        }
    }

    /// Trim window the pipeline cuts
    pub fn window(&self) -> &TrimWindow {
        match self {
            TranscodeProfile::GifExtraction { window, .. } => window,
            TranscodeProfile::FragmentedDashPackage { window, .. } => window,
        }
    }

    /// Validate the source filename is a bare name the engine can resolve
    /// inside its virtual filesystem
    pub fn validate(&self) -> Result<(), DomainError> {
        let source = self.source();
        if source.is_empty() {
            return Err(DomainError::BadArgs("Source name cannot be empty".to_string()));
        }
        if source.contains('/') || source.contains('\\') {
            return Err(DomainError::BadArgs(format!(
                "Source must be a bare filename, got path: {}",
                source
            )));
        }
        Ok(())
    }
}

/// Set of output filenames recovered from a transcode run's diagnostics.
///
/// Insertion order is preserved, duplicates are dropped, and the engine's
/// in-progress `.tmp` suffix is stripped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    names: Vec<String>,
}

impl ArtifactSet {
    /// Create an empty artifact set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reported filename, stripping a trailing temp suffix and
    /// dropping duplicates (segment writes report the same path repeatedly)
    pub fn insert(&mut self, name: &str) {
        let name = name.strip_suffix(TEMP_SUFFIX).unwrap_or(name);
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// Filenames in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl IntoIterator for ArtifactSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}
