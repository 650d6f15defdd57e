//! Diagnostic-text parser for the engine's probe output
//!
//! The engine's diagnostics are human-oriented text, not a stable
//! machine-readable format. Every extraction below is independently
//! optional: a rule that fails to match leaves its field at the sentinel
//! default and never aborts the parse. Each rule lives in its own named
//! matcher so a format change in a future engine version touches exactly
//! one place.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::{AudioStreamInfo, MediaDescription, VideoStreamInfo, NOT_FOUND};

/// Marker opening the container/duration header line
const INPUT_HEADER: &str = "Input #0";

/// Substring identifying an audio stream descriptor line
const AUDIO_MARKER: &str = ": Audio:";

/// Substring identifying a video stream descriptor line
const VIDEO_MARKER: &str = ": Video:";

/// Container token between `Input #N,` and `, from '`
static RE_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Input #\d,\s+([\w,]+), from '").expect("valid regex"));

/// Clock-style duration token, matched on any line
static RE_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Duration:\s+(\d\d:\d\d:\d\d\.\d+)").expect("valid regex"));

/// First word after the audio marker
static RE_AUDIO_CODEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Audio: (\w+)").expect("valid regex"));

/// Integer immediately preceding ` Hz`
static RE_AUDIO_RATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+) Hz").expect("valid regex"));

/// Integer immediately preceding ` channels`, with its clause
static RE_AUDIO_CHANNELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",?\s*(\d+) channels").expect("valid regex"));

/// Trailing word token after the final comma
static RE_AUDIO_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r", (\w+)$").expect("valid regex"));

/// First word after the video marker
static RE_VIDEO_CODEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Video: (\w+)").expect("valid regex"));

/// Two 3-4 digit integers separated by `x`
static RE_VIDEO_RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3,4})x(\d{3,4})").expect("valid regex"));

/// Composite SAR/DAR capture, stored as one string; matches both the
/// bracketed `[SAR a:b DAR c:d]` and the comma-separated header forms
static RE_VIDEO_ASPECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SAR (\d+:\d+ DAR \d+:\d+)").expect("valid regex"));

/// Integer preceding ` kb/s`
static RE_VIDEO_BITRATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r", (\d+) kb/s").expect("valid regex"));

/// Integer preceding ` fps,`
static RE_VIDEO_FPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r", (\d+) fps,").expect("valid regex"));

/// Parser for the engine's probe diagnostics
pub struct DiagnosticParser;

impl DiagnosticParser {
    /// Parse an ordered sequence of diagnostic lines into a media
    /// description.
    ///
    /// Never fails: unrecognized lines are ignored, and a fully empty or
    /// garbage input yields the valid all-default description.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> MediaDescription {
        let mut description = MediaDescription::default();

        for line in lines {
            let line = line.as_ref();

            if line.starts_with(INPUT_HEADER) {
                if let Some(container) = Self::match_container(line) {
                    description.container = container;
                }
            }

            // The duration token can appear on any line; the last match
            // seen wins (the engine emits it once per input).
            if let Some(duration) = Self::match_duration(line) {
                description.duration = duration;
            }

            if line.contains(AUDIO_MARKER) {
                description.audio_streams.push(Self::parse_audio_line(line));
            } else if line.contains(VIDEO_MARKER) {
                description.video_streams.push(Self::parse_video_line(line));
            }
        }

        description
    }

    /// Extract the container token from the input header line
    fn match_container(line: &str) -> Option<String> {
        RE_CONTAINER
            .captures(line)
            .map(|caps| caps[1].to_string())
    }

    /// Extract a clock-style duration token
    fn match_duration(line: &str) -> Option<String> {
        RE_DURATION
            .captures(line)
            .map(|caps| caps[1].to_string())
    }

    /// Parse one audio stream descriptor line.
    ///
    /// Sub-extractions are independent; any miss leaves the sentinel. The
    /// channel-count clause is removed before the trailing-token layout
    /// rule runs, so count and layout resolve correctly regardless of
    /// their relative order on the line.
    fn parse_audio_line(line: &str) -> AudioStreamInfo {
        let mut stream = AudioStreamInfo::default();

        if let Some(caps) = RE_AUDIO_CODEC.captures(line) {
            stream.codec = caps[1].to_string();
        }
        if let Some(caps) = RE_AUDIO_RATE.captures(line) {
            stream.sample_rate = caps[1].parse().unwrap_or(NOT_FOUND);
        }
        if let Some(caps) = RE_AUDIO_CHANNELS.captures(line) {
            stream.channels = caps[1].to_string();
        }
        let without_channels = RE_AUDIO_CHANNELS.replace(line, "");
        if let Some(caps) = RE_AUDIO_LAYOUT.captures(without_channels.trim_end()) {
            stream.channel_layout = caps[1].to_string();
        }

        stream
    }

    /// Parse one video stream descriptor line
    fn parse_video_line(line: &str) -> VideoStreamInfo {
        let mut stream = VideoStreamInfo::default();

        if let Some(caps) = RE_VIDEO_CODEC.captures(line) {
            stream.codec = caps[1].to_string();
        }
        if let Some(caps) = RE_VIDEO_RESOLUTION.captures(line) {
            stream.width = caps[1].parse().unwrap_or(NOT_FOUND);
            stream.height = caps[2].parse().unwrap_or(NOT_FOUND);
        }
        if let Some(caps) = RE_VIDEO_ASPECT.captures(line) {
            stream.aspect_ratio = caps[1].to_string();
        }
        if let Some(caps) = RE_VIDEO_BITRATE.captures(line) {
            stream.bitrate = caps[1].parse().unwrap_or(NOT_FOUND);
        }
        if let Some(caps) = RE_VIDEO_FPS.captures(line) {
            stream.framerate = caps[1].parse().unwrap_or(NOT_FOUND);
        }

        stream
    }
}
