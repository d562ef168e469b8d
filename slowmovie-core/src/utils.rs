//! Duration formatting and timing helpers.
//!
//! All formatters take a whole number of seconds and use floor division, so
//! they never fail and never round up.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Formats seconds as "H hours M minutes S seconds" (e.g., 300 -> "0 hours 5 minutes 0 seconds").
///
/// Every field is printed, including zeros, and the unit words are always plural.
#[must_use]
pub fn render_hms(seconds: u64) -> String {
    let hours = seconds / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;
    format!("{hours} hours {minutes} minutes {secs} seconds")
}

/// Formats seconds as an ffmpeg seek position, HH:MM:SS (e.g., 3725 -> "01:02:05").
///
/// Hours do not roll over into days, so 90061 renders as "25:01:01".
#[must_use]
pub fn expand_seconds(seconds: u64) -> String {
    let hours = seconds / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = seconds % SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats seconds as a sentence of non-zero units (e.g., 90061 -> "1 day, 1 hour, 1 minute, 1 second").
///
/// Zero-valued units are left out and the parts are joined with ", " only;
/// there is no "and" before the last part. Zero seconds yields "".
#[must_use]
pub fn render_days_hours_mins_seconds(seconds: u64) -> String {
    let units = [
        (seconds / SECS_PER_DAY, "day"),
        ((seconds / SECS_PER_HOUR) % 24, "hour"),
        ((seconds / SECS_PER_MINUTE) % 60, "minute"),
        (seconds % SECS_PER_MINUTE, "second"),
    ];

    units
        .iter()
        .filter(|(value, _)| *value != 0)
        .map(|(value, unit)| {
            if *value == 1 {
                format!("{value} {unit}")
            } else {
                format!("{value} {unit}s")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wall-clock seconds needed to show every frame of a `runtime`-second movie.
///
/// Integer division: a trailing partial interval contributes no frame.
/// Saturates instead of overflowing on absurd inputs.
#[must_use]
pub fn slow_runtime(runtime: u64, frame_interval: u64, frame_display_delay: u64) -> u64 {
    if frame_interval == 0 {
        return 0;
    }
    (runtime / frame_interval).saturating_mul(frame_display_delay)
}

/// Rounds a probed duration to the nearest whole second. Returns None for negative or non-finite input.
#[must_use]
pub fn round_to_seconds(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some(seconds.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hms() {
        assert_eq!(render_hms(0), "0 hours 0 minutes 0 seconds");
        assert_eq!(render_hms(300), "0 hours 5 minutes 0 seconds");
        assert_eq!(render_hms(3661), "1 hours 1 minutes 1 seconds");
        assert_eq!(render_hms(90061), "25 hours 1 minutes 1 seconds");
    }

    #[test]
    fn test_expand_seconds() {
        assert_eq!(expand_seconds(0), "00:00:00");
        assert_eq!(expand_seconds(5), "00:00:05");
        assert_eq!(expand_seconds(59), "00:00:59");
        assert_eq!(expand_seconds(60), "00:01:00");
        assert_eq!(expand_seconds(3599), "00:59:59");
        assert_eq!(expand_seconds(3725), "01:02:05");
        assert_eq!(expand_seconds(86399), "23:59:59");
        assert_eq!(expand_seconds(86400), "24:00:00");
        assert_eq!(expand_seconds(90061), "25:01:01");
        assert_eq!(expand_seconds(360_000), "100:00:00");
    }

    #[test]
    fn test_render_days_hours_mins_seconds() {
        assert_eq!(render_days_hours_mins_seconds(0), "");
        assert_eq!(render_days_hours_mins_seconds(1), "1 second");
        assert_eq!(render_days_hours_mins_seconds(2), "2 seconds");
        assert_eq!(render_days_hours_mins_seconds(60), "1 minute");
        assert_eq!(render_days_hours_mins_seconds(61), "1 minute, 1 second");
        assert_eq!(render_days_hours_mins_seconds(3900), "1 hour, 5 minutes");
        assert_eq!(render_days_hours_mins_seconds(86400), "1 day");
        assert_eq!(
            render_days_hours_mins_seconds(90061),
            "1 day, 1 hour, 1 minute, 1 second"
        );
        assert_eq!(
            render_days_hours_mins_seconds(2 * 86400 + 3 * 3600 + 7),
            "2 days, 3 hours, 7 seconds"
        );
    }

    #[test]
    fn test_render_days_never_includes_zero_units() {
        for s in (0..200_000).step_by(997) {
            let rendered = render_days_hours_mins_seconds(s);
            for part in rendered.split(", ").filter(|p| !p.is_empty()) {
                assert!(!part.starts_with("0 "), "{s} rendered as {rendered:?}");
            }
            assert!(!rendered.contains(" and "));
        }
    }

    #[test]
    fn test_slow_runtime() {
        assert_eq!(slow_runtime(130, 10, 300), 3900);
        assert_eq!(slow_runtime(9, 10, 300), 0);
        assert_eq!(slow_runtime(7200, 1, 300), 2_160_000);
        assert_eq!(slow_runtime(100, 0, 300), 0);
        assert_eq!(slow_runtime(u64::MAX, 1, 2), u64::MAX);
    }

    #[test]
    fn test_round_to_seconds() {
        assert_eq!(round_to_seconds(0.0), Some(0));
        assert_eq!(round_to_seconds(129.4), Some(129));
        assert_eq!(round_to_seconds(129.5), Some(130));
        assert_eq!(round_to_seconds(-1.0), None);
        assert_eq!(round_to_seconds(f64::NAN), None);
        assert_eq!(round_to_seconds(f64::INFINITY), None);
    }
}
