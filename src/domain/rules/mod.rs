// Domain rules - Business logic and policies

use crate::domain::model::MediaDescription;
use crate::utils::time::TimeCodec;

/// Fallback duration used whenever a probe could not recover one
pub const FALLBACK_DURATION: &str = "00:00:10";

/// Policy for bounding user trim parameters against a probed description
pub struct TrimBounds;

impl TrimBounds {
    /// Upper bound, in whole seconds, for both the trim start and the trim
    /// duration sliders.
    ///
    /// Uses the probed duration when present, else the fallback literal.
    /// The bound is advisory: the pipeline builder accepts any window, and
    /// the engine clamps at the end of input.
    pub fn trim_bound_seconds(description: &MediaDescription) -> u64 {
        let duration = if description.duration.is_empty() {
            FALLBACK_DURATION
        } else {
            description.duration.as_str()
        };
        TimeCodec::new().clock_to_seconds(duration)
    }
}
