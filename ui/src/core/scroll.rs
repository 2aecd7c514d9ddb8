//! Boolean "scrolled past threshold" flag for the navbar backdrop.

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold_px: f64,
    past_threshold: bool,
}

impl ScrollFlag {
    pub fn new(threshold_px: f64) -> Self {
        let threshold_px = if threshold_px.is_finite() {
            threshold_px.max(0.0)
        } else {
            DEFAULT_SCROLL_THRESHOLD_PX
        };
        Self {
            threshold_px,
            past_threshold: false,
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Feed a scroll offset. Returns `true` when the flag flipped.
    pub fn observe(&mut self, offset_px: f64) -> bool {
        let next = offset_px > self.threshold_px;
        let changed = next != self.past_threshold;
        self.past_threshold = next;
        changed
    }
}

impl Default for ScrollFlag {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut flag = ScrollFlag::default();
        assert!(!flag.observe(20.0));
        assert!(!flag.past_threshold());
        assert!(flag.observe(20.5));
        assert!(flag.past_threshold());
    }

    #[test]
    fn reports_only_transitions() {
        let mut flag = ScrollFlag::default();
        let flips: Vec<bool> = [0.0, 5.0, 40.0, 80.0, 10.0, 0.0]
            .into_iter()
            .map(|offset| flag.observe(offset))
            .collect();
        assert_eq!(flips, vec![false, false, true, false, true, false]);
        assert!(!flag.past_threshold());
    }

    #[test]
    fn resting_value_matches_last_offset() {
        let mut flag = ScrollFlag::new(100.0);
        for offset in [0.0, 300.0, 150.0, 101.0] {
            flag.observe(offset);
        }
        assert!(flag.past_threshold());
    }

    #[test]
    fn nonsense_thresholds_are_sanitized() {
        assert_eq!(ScrollFlag::new(f64::NAN).threshold_px(), DEFAULT_SCROLL_THRESHOLD_PX);
        assert_eq!(ScrollFlag::new(-5.0).threshold_px(), 0.0);
    }
}
