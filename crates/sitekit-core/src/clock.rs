//! Wall-clock formatting for a fixed time zone.
//!
//! The browser formats through `Intl.DateTimeFormat`; [`ClockFace`] is the
//! fixed-offset formatter used when the configured zone is not accepted by the
//! host and for native tests.

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format hours and minutes as zero-padded 24-hour `HH:MM`.
#[must_use]
pub fn format_hm(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Formats instants as `HH:MM` at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    offset_minutes: i32,
}

impl ClockFace {
    /// Create a clock face `offset_minutes` east of UTC.
    #[must_use]
    pub const fn new(offset_minutes: i32) -> Self {
        Self { offset_minutes }
    }

    /// Offset from UTC in minutes.
    #[must_use]
    pub const fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Local hour and minute for a Unix timestamp in milliseconds.
    #[must_use]
    pub fn wall_time(&self, unix_ms: i64) -> (u32, u32) {
        let minutes = unix_ms.div_euclid(MS_PER_MINUTE) + i64::from(self.offset_minutes);
        let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
        ((of_day / 60) as u32, (of_day % 60) as u32)
    }

    /// Format a Unix timestamp in milliseconds as `HH:MM`.
    #[must_use]
    pub fn format(&self, unix_ms: i64) -> String {
        let (hour, minute) = self.wall_time(unix_ms);
        format_hm(hour, minute)
    }
}

impl Default for ClockFace {
    /// South Africa Standard Time (UTC+2, no daylight saving).
    fn default() -> Self {
        Self::new(120)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 2024-03-01T22:45:30Z
    const SAMPLE_MS: i64 = 1_709_333_130_000;

    #[test]
    fn test_format_hm_pads() {
        assert_eq!(format_hm(0, 0), "00:00");
        assert_eq!(format_hm(9, 5), "09:05");
        assert_eq!(format_hm(23, 59), "23:59");
    }

    #[test]
    fn test_utc_face() {
        assert_eq!(ClockFace::new(0).format(SAMPLE_MS), "22:45");
    }

    #[test]
    fn test_default_face_is_sast() {
        let face = ClockFace::default();
        assert_eq!(face.offset_minutes(), 120);
        // crosses midnight into the next day
        assert_eq!(face.format(SAMPLE_MS), "00:45");
    }

    #[test]
    fn test_negative_offset() {
        assert_eq!(ClockFace::new(-300).format(SAMPLE_MS), "17:45");
    }

    #[test]
    fn test_pre_epoch_timestamp() {
        // 1969-12-31T23:30:00Z
        assert_eq!(ClockFace::new(0).format(-30 * MS_PER_MINUTE), "23:30");
    }

    #[test]
    fn test_seconds_are_dropped() {
        let face = ClockFace::new(0);
        assert_eq!(face.format(59_999), "00:00");
        assert_eq!(face.format(60_000), "00:01");
    }

    proptest! {
        #[test]
        fn prop_wall_time_in_range(ms in any::<i64>().prop_map(|v| v / 4), offset in -840i32..=840) {
            let (h, m) = ClockFace::new(offset).wall_time(ms);
            prop_assert!(h < 24);
            prop_assert!(m < 60);
        }

        #[test]
        fn prop_format_is_five_chars(ms in 0i64..4_102_444_800_000) {
            let text = ClockFace::default().format(ms);
            prop_assert_eq!(text.len(), 5);
            prop_assert_eq!(&text[2..3], ":");
        }
    }
}
