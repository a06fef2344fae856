//! Human readable durations for the elapsed and ETA readouts.

use std::time::Duration;

/// Format a number of seconds.
///
/// Durations under ten seconds keep one decimal (`"3.5s"`). Longer ones are
/// rounded to whole seconds and only show the leading non-zero units
/// (`"45s"`, `"1m 5s"`, `"1h 1m 1s"`).
///
/// ```rust
/// use barnone::utils::format_time;
///
/// assert_eq!(format_time(3.45), "3.5s");
/// assert_eq!(format_time(65.0), "1m 5s");
/// assert_eq!(format_time(3661.0), "1h 1m 1s");
/// ```
pub fn format_time(seconds: f64) -> String {
    if seconds < 10.0 {
        return format!("{seconds:.1}s");
    }

    let seconds = seconds.round() as u64;
    let (mins, secs) = (seconds / 60, seconds % 60);
    let (hours, mins) = (mins / 60, mins % 60);

    if hours > 0 {
        format!("{hours}h {mins}m {secs}s")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format a [`Duration`] with [`format_time`].
pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs_f64())
}
