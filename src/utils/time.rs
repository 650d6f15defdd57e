//! Time conversion between clock-style strings and whole seconds

/// Codec between `HH:MM:SS[.fff]` clock strings and integer seconds
pub struct TimeCodec;

impl TimeCodec {
    /// Create a new time codec
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeCodec {
    /// Convert `HH:MM:SS` or `HH:MM:SS.fff` to whole seconds, truncating
    /// any fractional part.
    ///
    /// Malformed input is out of contract: unparseable components count as
    /// zero rather than aborting, so callers must validate upstream.
    pub fn clock_to_seconds(&self, clock: &str) -> u64 {
        let mut components = clock.split(':');
        let hours = Self::leading_integer(components.next().unwrap_or(""));
        let minutes = Self::leading_integer(components.next().unwrap_or(""));
        let seconds = Self::leading_integer(components.next().unwrap_or(""));

        hours * 3600 + minutes * 60 + seconds
    }

    /// Format whole seconds as a zero-padded `HH:MM:SS` clock string.
    ///
    /// Hours wrap at 24, mirroring clock-of-day formatting.
    pub fn seconds_to_clock(&self, seconds: u64) -> String {
        let hours = (seconds / 3600) % 24;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    /// Parse the leading digit run of a component, truncating a trailing
    /// fraction like `23.45`
    fn leading_integer(component: &str) -> u64 {
        let digits: &str = component
            .split_once('.')
            .map(|(whole, _)| whole)
            .unwrap_or(component);
        digits.parse().unwrap_or(0)
    }
}
