//! Animated statistic counter
//!
//! A stat value such as `"100"` counts up from zero with a cubic ease-out the
//! first time it scrolls into view. Values that do not start with an integer
//! (`"SWFL"`) are shown as-is with no animation.

use super::easing::{clamp_progress, ease_out_cubic};

/// Count-up duration
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Viewport margin used to trigger counters (fires a bit later than reveals)
pub const COUNTER_MARGIN: &str = "-100px";

/// Parsed form of a stat value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterValue {
    /// Leading integer, animated from zero
    Numeric(i64),
    /// Anything else, displayed verbatim
    Literal(String),
}

impl CounterValue {
    /// Parse the leading integer of `raw`.
    ///
    /// Leading whitespace and an optional sign are accepted, trailing
    /// characters are ignored (`"8+"` is 8). Anything without leading digits
    /// falls back to the literal text.
    pub fn parse(raw: &str) -> Self {
        match parse_leading_int(raw) {
            Some(n) => CounterValue::Numeric(n),
            None => CounterValue::Literal(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CounterValue::Numeric(_))
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Lifecycle of one counter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterState {
    /// Not yet seen
    #[default]
    Waiting,
    /// Triggered by the first viewport entry
    Running,
}

/// Count-up animation for one stat
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    value: CounterValue,
    suffix: String,
    duration_ms: f64,
    state: CounterState,
}

impl Counter {
    pub fn new(raw: &str, suffix: impl Into<String>) -> Self {
        Self {
            value: CounterValue::parse(raw),
            suffix: suffix.into(),
            duration_ms: COUNTER_DURATION_MS,
            state: CounterState::Waiting,
        }
    }

    pub fn value(&self) -> &CounterValue {
        &self.value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Start the animation. Returns `true` only for the first call, so
    /// repeated visibility changes cannot restart it.
    pub fn trigger(&mut self) -> bool {
        if self.state == CounterState::Waiting {
            self.state = CounterState::Running;
            true
        } else {
            false
        }
    }

    /// Whether a frame loop is needed after triggering
    pub fn needs_frames(&self) -> bool {
        self.state == CounterState::Running && self.value.is_numeric()
    }

    /// Linear progress after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        clamp_progress(elapsed_ms / self.duration_ms)
    }

    /// Whether the animation has reached its final value
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        match self.value {
            CounterValue::Literal(_) => self.state == CounterState::Running,
            CounterValue::Numeric(_) => {
                self.state == CounterState::Running && self.progress(elapsed_ms) >= 1.0
            }
        }
    }

    /// Displayed number (without suffix) `elapsed_ms` after triggering
    pub fn display_at(&self, elapsed_ms: f64) -> String {
        match (&self.value, self.state) {
            (CounterValue::Numeric(_), CounterState::Waiting) => "0".to_string(),
            (CounterValue::Numeric(target), CounterState::Running) => {
                let progress = self.progress(elapsed_ms);
                if progress >= 1.0 {
                    return target.to_string();
                }
                let eased = ease_out_cubic(progress);
                ((eased * *target as f64).floor() as i64).to_string()
            }
            // Literal values are shown once triggered; before that the
            // element still shows the resting zero like numeric ones.
            (CounterValue::Literal(_), CounterState::Waiting) => "0".to_string(),
            (CounterValue::Literal(text), CounterState::Running) => text.clone(),
        }
    }

    /// Displayed text including suffix
    pub fn label_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", self.display_at(elapsed_ms), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(CounterValue::parse("100"), CounterValue::Numeric(100));
        assert_eq!(CounterValue::parse("0"), CounterValue::Numeric(0));
        assert_eq!(CounterValue::parse("  42"), CounterValue::Numeric(42));
        assert_eq!(CounterValue::parse("-7"), CounterValue::Numeric(-7));
        assert_eq!(CounterValue::parse("+3"), CounterValue::Numeric(3));
    }

    #[test]
    fn test_parse_leading_integer_with_trailing_text() {
        assert_eq!(CounterValue::parse("8+"), CounterValue::Numeric(8));
        assert_eq!(CounterValue::parse("24h"), CounterValue::Numeric(24));
    }

    #[test]
    fn test_parse_literal_fallback() {
        assert_eq!(
            CounterValue::parse("SWFL"),
            CounterValue::Literal("SWFL".to_string())
        );
        assert_eq!(CounterValue::parse(""), CounterValue::Literal(String::new()));
        assert_eq!(CounterValue::parse("-"), CounterValue::Literal("-".to_string()));
        assert_eq!(
            CounterValue::parse("99999999999999999999"),
            CounterValue::Literal("99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_waiting_counter_shows_zero() {
        let counter = Counter::new("100", "%");
        assert_eq!(counter.label_at(5000.0), "0%");
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let mut counter = Counter::new("100", "");
        assert!(counter.trigger());
        assert!(!counter.trigger());
        assert!(!counter.trigger());
        assert_eq!(counter.state(), CounterState::Running);
    }

    #[test]
    fn test_final_value_is_exact() {
        for target in [0_i64, 1, 8, 7, 100, 1234, 999_999] {
            let mut counter = Counter::new(&target.to_string(), "");
            counter.trigger();
            assert_eq!(counter.display_at(COUNTER_DURATION_MS), target.to_string());
            assert_eq!(counter.display_at(COUNTER_DURATION_MS * 3.0), target.to_string());
            assert!(counter.is_finished(COUNTER_DURATION_MS));
        }
    }

    #[test]
    fn test_count_up_is_monotonic() {
        let mut counter = Counter::new("100", "");
        counter.trigger();

        let mut last = 0_i64;
        let mut elapsed = 0.0;
        while elapsed <= COUNTER_DURATION_MS + 32.0 {
            let shown: i64 = counter.display_at(elapsed).parse().unwrap();
            assert!(shown >= last, "{shown} < {last} at {elapsed}ms");
            assert!(shown <= 100);
            last = shown;
            elapsed += 16.0;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_count_up_starts_at_zero() {
        let mut counter = Counter::new("100", "");
        counter.trigger();
        assert_eq!(counter.display_at(0.0), "0");
        assert!(!counter.is_finished(0.0));
    }

    #[test]
    fn test_literal_shown_immediately() {
        let mut counter = Counter::new("SWFL", "");
        counter.trigger();
        assert_eq!(counter.display_at(0.0), "SWFL");
        assert!(counter.is_finished(0.0));
        assert!(!counter.needs_frames());
    }

    #[test]
    fn test_suffix_is_appended() {
        let mut counter = Counter::new("8", "+");
        counter.trigger();
        assert_eq!(counter.label_at(COUNTER_DURATION_MS), "8+");
    }

    #[test]
    fn test_needs_frames_only_when_running_numeric() {
        let mut counter = Counter::new("100", "");
        assert!(!counter.needs_frames());
        counter.trigger();
        assert!(counter.needs_frames());
    }
}
