//! Countdown formatting.

/// Render a duration as `"{h}h {m}m {s}s"`.
///
/// Negative durations clamp to zero before formatting.
pub fn format_seconds(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let h = total / 3600;
    let m = (total / 60) % 60;
    let s = total % 60;
    format!("{h}h {m}m {s}s")
}

/// Render a millisecond duration, rounded to the nearest second.
pub fn format_ms(ms: i64) -> String {
    if ms <= 0 {
        return format_seconds(0);
    }
    format_seconds((ms + 500) / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hours_minutes_seconds() {
        assert_eq!(format_seconds(3661), "1h 1m 1s");
        assert_eq!(format_seconds(59), "0h 0m 59s");
        assert_eq!(format_seconds(3600), "1h 0m 0s");
        assert_eq!(format_seconds(24 * 3600), "24h 0m 0s");
    }

    #[test]
    fn zero_and_negative_clamp() {
        assert_eq!(format_seconds(0), "0h 0m 0s");
        assert_eq!(format_seconds(-5), "0h 0m 0s");
        assert_eq!(format_ms(-1200), "0h 0m 0s");
    }

    #[test]
    fn milliseconds_round_to_nearest_second() {
        assert_eq!(format_ms(1499), "0h 0m 1s");
        assert_eq!(format_ms(1500), "0h 0m 2s");
        assert_eq!(format_ms(180_000), "0h 3m 0s");
    }
}
