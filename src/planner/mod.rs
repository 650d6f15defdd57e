//! Pipeline planning module
//!
//! Turns a [`TranscodeProfile`] into the engine's exact argument vector.
//! The engine is a positional-flag consumer: argument order is significant,
//! and every sequence below must be reproduced exactly. All fixed literals
//! here are policy constants of the profile, never derived from the probed
//! media description.

use crate::domain::model::{TranscodeProfile, TrimWindow};

/// Literal output filename of the GIF profile
pub const GIF_OUTPUT: &str = "out.gif";

/// Forced output format of the GIF profile
pub const GIF_FORMAT: &str = "gif";

/// Literal manifest filename of the DASH profile
pub const DASH_MANIFEST: &str = "out.mpd";

/// Forced output container of the DASH profile
pub const DASH_FORMAT: &str = "dash";

/// Fixed output frame rate, in fps
pub const DASH_FRAME_RATE: &str = "25";

/// Average segment length, in seconds
pub const DASH_SEGMENT_DURATION: &str = "2";

/// Fragment length, in seconds
pub const DASH_FRAGMENT_DURATION: &str = "2";

/// Template for init segments, parameterized by representation id
pub const DASH_INIT_SEGMENT_NAME: &str = "init-$RepresentationID$.$ext$";

/// Template for media segments, parameterized by representation id and a
/// monotonically increasing segment number
pub const DASH_MEDIA_SEGMENT_NAME: &str = "media-$RepresentationID$-$Number$.$ext$";

/// Shared video codec for all renditions
pub const DASH_VIDEO_CODEC: &str = "libx264";

/// Rendition 0: higher bitrate, main profile, source resolution
pub const DASH_RENDITION0_BITRATE: &str = "800k";
pub const DASH_RENDITION0_PROFILE: &str = "main";

/// Rendition 1: lower bitrate, baseline profile, reduced fixed resolution
pub const DASH_RENDITION1_BITRATE: &str = "300k";
pub const DASH_RENDITION1_SIZE: &str = "320x170";
pub const DASH_RENDITION1_PROFILE: &str = "baseline";

/// Adaptation-set groupings: each pairs a video-only and an audio-only set
pub const DASH_ADAPTATION_SETS: [&str; 2] =
    ["id=0,streams=v id=1,streams=a", "id=2,streams=v id=3,streams=a"];

/// Builder for the engine's argument vectors
pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Minimal probe vector: the engine rejects the invocation for lack of
    /// an output file, but emits the full input description first.
    pub fn probe_args(source: &str) -> Vec<String> {
        svec(&["-hide_banner", "-i", source])
    }

    /// Build the argument vector for a transcode profile. Pure function of
    /// the profile; no I/O.
    pub fn build(profile: &TranscodeProfile) -> Vec<String> {
        match profile {
            TranscodeProfile::GifExtraction { source, window } => Self::gif_args(source, window),
            TranscodeProfile::FragmentedDashPackage { source, window } => {
                Self::dash_args(source, window)
            }
        }
    }

    /// Single-file animated GIF extraction over the trim window
    fn gif_args(source: &str, window: &TrimWindow) -> Vec<String> {
        svec(&[
            // Input
            "-i",
            source,
            // Duration
            "-t",
            &window.duration_seconds.to_string(),
            // Start
            "-ss",
            &window.start_seconds.to_string(),
            // Format
            "-f",
            GIF_FORMAT,
            // Filename
            GIF_OUTPUT,
        ])
    }

    /// Multi-rendition fragmented DASH package over the trim window.
    ///
    /// The quadruple `-map 0` and the two disjoint `-adaptation_sets` are
    /// part of the fixed recipe; do not collapse them.
    fn dash_args(source: &str, window: &TrimWindow) -> Vec<String> {
        let mut args = svec(&["-hide_banner", "-i", source]);

        // Map all input streams into each output rendition group
        for _ in 0..4 {
            args.push("-map".to_string());
            args.push("0".to_string());
        }

        args.extend(svec(&[
            // Output container
            "-f",
            DASH_FORMAT,
            // Fixed output frame rate
            "-r",
            DASH_FRAME_RATE,
            // Total duration of output, in seconds
            "-t",
            &window.duration_seconds.to_string(),
            // Start time from input, in seconds
            "-ss",
            &window.start_seconds.to_string(),
            // Segment length; average when templates are enabled
            "-seg_duration",
            DASH_SEGMENT_DURATION,
            // Template naming and timeline
            "-use_template",
            "1",
            "-use_timeline",
            "1",
            "-init_seg_name",
            DASH_INIT_SEGMENT_NAME,
            "-media_seg_name",
            DASH_MEDIA_SEGMENT_NAME,
            "-frag_duration",
            DASH_FRAGMENT_DURATION,
            // Shared video codec
            "-c:v",
            DASH_VIDEO_CODEC,
            // Rendition 0: higher bitrate, main profile, source resolution
            "-b:v:0",
            DASH_RENDITION0_BITRATE,
            "-profile:v:0",
            DASH_RENDITION0_PROFILE,
            // Rendition 1: lower bitrate, reduced resolution, baseline
            "-b:v:1",
            DASH_RENDITION1_BITRATE,
            "-s:v:1",
            DASH_RENDITION1_SIZE,
            "-profile:v:1",
            DASH_RENDITION1_PROFILE,
            // Adaptation-set groupings by stream role
            "-adaptation_sets",
            DASH_ADAPTATION_SETS[0],
            "-adaptation_sets",
            DASH_ADAPTATION_SETS[1],
            // Manifest filename
            DASH_MANIFEST,
        ]));

        args
    }
}

/// Build an owned argument vector from string slices
fn svec(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
