//! Output-filename extraction from run diagnostics

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::ArtifactSet;

/// Write announcement the engine emits once per opened output file
static RE_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Opening '(.+)' for writing").expect("valid regex"));

/// Extractor for the output filenames reported in run diagnostics
pub struct ArtifactExtractor;

impl ArtifactExtractor {
    /// Collect every reported output path into an [`ArtifactSet`].
    ///
    /// The same path may be reported multiple times across segment writes;
    /// the set keeps first-seen order and drops duplicates. Lines without
    /// a match are ignored, and an empty input yields an empty set.
    pub fn extract<S: AsRef<str>>(lines: &[S]) -> ArtifactSet {
        let mut artifacts = ArtifactSet::new();

        for line in lines {
            if let Some(caps) = RE_OPENING.captures(line.as_ref()) {
                artifacts.insert(&caps[1]);
            }
        }

        artifacts
    }
}
