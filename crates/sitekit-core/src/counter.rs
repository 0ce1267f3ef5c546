//! Count-up animation for numeric highlights.
//!
//! A counter climbs from zero towards its target in a fixed number of linear
//! steps, one step per display frame, and always lands exactly on the target.

/// Default number of frames a counter takes to reach its target.
pub const DEFAULT_STEPS: u32 = 40;

/// Outcome of advancing a counter by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate value; another frame should be scheduled.
    Running(i64),
    /// Final value; the animation is complete.
    Finished(i64),
}

impl CounterFrame {
    /// The value to display for this frame.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            Self::Running(v) | Self::Finished(v) => *v,
        }
    }

    /// Check if this is the final frame.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Linear count-up from zero to a target value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    current: i64,
    increment: i64,
    finished: bool,
}

impl CounterAnimation {
    /// Create a counter that reaches `target` in roughly [`DEFAULT_STEPS`] frames.
    #[must_use]
    pub fn new(target: i64) -> Self {
        Self::with_steps(target, DEFAULT_STEPS)
    }

    /// Create a counter with a custom step count.
    ///
    /// The per-frame increment is `max(1, round(target / steps))`.
    #[must_use]
    pub fn with_steps(target: i64, steps: u32) -> Self {
        let steps = f64::from(steps.max(1));
        let increment = ((target as f64) / steps).round().max(1.0) as i64;
        Self {
            target,
            current: 0,
            increment,
            finished: false,
        }
    }

    /// Parse a target from a `data-counter` style attribute.
    ///
    /// Missing, empty, or non-numeric values yield 0. Fractional values are
    /// rounded to the nearest integer.
    #[must_use]
    pub fn parse_target(raw: Option<&str>) -> i64 {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(0, |v| v.round() as i64)
    }

    /// Target value.
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    /// Per-frame increment.
    #[must_use]
    pub const fn increment(&self) -> i64 {
        self.increment
    }

    /// Check if the final frame has been produced.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one frame.
    ///
    /// Once the running value reaches or passes the target, the target itself
    /// is returned and every later call keeps returning it.
    pub fn advance(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Finished(self.target);
        }
        self.current = self.current.saturating_add(self.increment);
        if self.current >= self.target {
            self.finished = true;
            CounterFrame::Finished(self.target)
        } else {
            CounterFrame::Running(self.current)
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.advance())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_increment_scales_with_target() {
        assert_eq!(CounterAnimation::new(4000).increment(), 100);
        assert_eq!(CounterAnimation::new(120).increment(), 3);
        assert_eq!(CounterAnimation::new(10).increment(), 1);
        assert_eq!(CounterAnimation::new(0).increment(), 1);
    }

    #[test]
    fn test_increment_rounds_half_up() {
        // 100 / 40 = 2.5
        assert_eq!(CounterAnimation::new(100).increment(), 3);
    }

    #[test]
    fn test_zero_target_finishes_on_first_frame() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.advance(), CounterFrame::Finished(0));
        assert!(counter.is_finished());
    }

    #[test]
    fn test_negative_target_snaps_immediately() {
        let mut counter = CounterAnimation::new(-5);
        assert_eq!(counter.advance(), CounterFrame::Finished(-5));
    }

    #[test]
    fn test_overshoot_is_never_displayed() {
        // increment 3, so the running value would hit 99 then 102
        let frames: Vec<_> = CounterAnimation::new(100).collect();
        let last = frames.last().copied();
        assert_eq!(last, Some(CounterFrame::Finished(100)));
        assert!(frames.iter().all(|f| f.value() <= 100));
        assert_eq!(frames[frames.len() - 2], CounterFrame::Running(99));
    }

    #[test]
    fn test_frame_count_is_about_forty() {
        let frames = CounterAnimation::new(4000).count();
        assert_eq!(frames, 40);
    }

    #[test]
    fn test_advance_after_finish_is_stable() {
        let mut counter = CounterAnimation::new(3);
        while !counter.advance().is_finished() {}
        assert_eq!(counter.advance(), CounterFrame::Finished(3));
        assert_eq!(counter.next(), None);
    }

    #[test]
    fn test_custom_steps() {
        let counter = CounterAnimation::with_steps(100, 10);
        assert_eq!(counter.increment(), 10);
        assert_eq!(counter.count(), 10);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(CounterAnimation::parse_target(Some("250")), 250);
        assert_eq!(CounterAnimation::parse_target(Some(" 42 ")), 42);
        assert_eq!(CounterAnimation::parse_target(Some("12.5")), 13);
        assert_eq!(CounterAnimation::parse_target(Some("1e3")), 1000);
        assert_eq!(CounterAnimation::parse_target(Some("")), 0);
        assert_eq!(CounterAnimation::parse_target(Some("lots")), 0);
        assert_eq!(CounterAnimation::parse_target(Some("NaN")), 0);
        assert_eq!(CounterAnimation::parse_target(None), 0);
    }

    proptest! {
        #[test]
        fn prop_final_value_equals_target(target in 0i64..5_000_000) {
            let frames: Vec<_> = CounterAnimation::new(target).collect();
            prop_assert_eq!(frames.last().copied(), Some(CounterFrame::Finished(target)));
        }

        #[test]
        fn prop_running_values_stay_below_target(target in 0i64..100_000) {
            for frame in CounterAnimation::new(target) {
                if let CounterFrame::Running(v) = frame {
                    prop_assert!(v < target);
                }
            }
        }

        #[test]
        fn prop_running_values_increase(target in 0i64..100_000) {
            let mut last = 0;
            for frame in CounterAnimation::new(target) {
                prop_assert!(frame.value() >= last);
                last = frame.value();
            }
        }
    }
}
