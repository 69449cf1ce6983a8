//! Clock-style rendering of playback positions
//!
//! Labels are always `HH:MM:SS`, hours included even for short clips. Each
//! field is padded to at least two digits; 100+ hours are printed in full.

use crate::playback::MediaDuration;

/// Rendered in place of the total time while the duration is unknown.
pub const UNKNOWN_TIME_PLACEHOLDER: &str = "--:--:--";

/// Format a position in seconds as `HH:MM:SS`.
///
/// Fractions are floored. Negative and non-finite input renders `00:00:00`.
///
/// # Examples
/// ```
/// use vidframe_domain::format_time;
///
/// assert_eq!(format_time(65.0), "00:01:05");
/// assert_eq!(format_time(3661.0), "01:01:01");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a total duration, or the placeholder when it is not known yet.
pub fn format_duration(duration: MediaDuration) -> String {
    match duration {
        MediaDuration::Known(seconds) => format_time(seconds),
        MediaDuration::Unknown => UNKNOWN_TIME_PLACEHOLDER.to_string(),
    }
}
