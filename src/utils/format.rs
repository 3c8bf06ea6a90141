//! Small display formatters.

/// Format whole seconds as `mm:ss`. Minutes are not capped at 59.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a percentage with no decimals, e.g. `87%`.
pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Format a duration in seconds with one decimal, e.g. `2.3s`.
pub fn format_secs(value: f32) -> String {
    format!("{value:.1}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn secs_keep_one_decimal() {
        assert_eq!(format_secs(2.3), "2.3s");
        assert_eq!(format_secs(1.8), "1.8s");
    }
}
