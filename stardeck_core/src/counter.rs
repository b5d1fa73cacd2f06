//! Animated numeric counters.
//!
//! A counter runs 0 → target over a fixed 2-second window with ease-out cubic
//! deceleration. The deck and portfolio pages format differently and both
//! styles are kept (see [`crate::tuning`]); on completion the exact target is
//! rendered through the same rule, so floating-point drift from the eased
//! interpolation never shows.

use std::time::{Duration, Instant};

use crate::tuning::{CounterStyle, COUNTER_DURATION};
use crate::utils::easing::ease_out_cubic;

/// Group an integer with comma thousands separators: `1234` → `"1,234"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Millions to one decimal place with a trailing `.0` stripped:
/// `2_500_000` → `"2.5"`, `3_000_000` → `"3"`.
fn format_millions(value: f64) -> String {
    let text = format!("{:.1}", value / 1_000_000.0);
    match text.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Format a counter value.
///
/// `target` decides the branch (magnitude, fractional) so that every frame of
/// one run renders through the same rule; `value` is the eased in-between.
pub fn format_value(style: CounterStyle, value: f64, target: f64, large_hint: bool) -> String {
    match style {
        CounterStyle::Deck => {
            if target >= 1_000_000.0 || large_hint {
                format_millions(value)
            } else if target.fract() != 0.0 {
                format!("{:.1}", value)
            } else {
                group_thousands(value.floor() as u64)
            }
        }
        CounterStyle::Portfolio => {
            if target >= 1_000_000.0 || large_hint {
                format!("{:.1}M", value / 1_000_000.0)
            } else if target >= 1_000.0 {
                format!("{}K", (value / 1_000.0).floor() as u64)
            } else {
                format!("{}", value.floor() as u64)
            }
        }
    }
}

/// One running counter. Ephemeral: created when its element first becomes
/// visible, done two seconds later. Re-triggering is prevented upstream by
/// the reveal observer's fired set, not here.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    large_hint: bool,
    style: CounterStyle,
    start: Instant,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(style: CounterStyle, target: f64, large_hint: bool, start: Instant) -> Self {
        Self {
            target,
            large_hint,
            style,
            start,
            duration: COUNTER_DURATION,
        }
    }

    /// Elapsed fraction of the run, clamped to `[0, 1]`.
    fn progress(&self, now: Instant) -> f32 {
        if now <= self.start {
            return 0.0;
        }
        let elapsed = now.duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`; exactly `target` once the run completes.
    pub fn value_at(&self, now: Instant) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            self.target
        } else {
            self.target * ease_out_cubic(progress) as f64
        }
    }

    /// Formatted display text at `now`.
    pub fn text_at(&self, now: Instant) -> String {
        format_value(self.style, self.value_at(now), self.target, self.large_hint)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_deck_large_flag_renders_millions() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 2_500_000.0, true, start);
        let done = start + Duration::from_millis(2000);
        assert_eq!(anim.text_at(done), "2.5");
    }

    #[test]
    fn test_deck_strips_trailing_zero() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 3_000_000.0, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2500)), "3");
    }

    #[test]
    fn test_deck_decimal_target() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 4.5, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2000)), "4.5");
    }

    #[test]
    fn test_deck_plain_integer_is_grouped() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 1234.0, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2000)), "1,234");
    }

    #[test]
    fn test_portfolio_millions_keep_suffix() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Portfolio, 2_500_000.0, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2000)), "2.5M");
    }

    #[test]
    fn test_portfolio_thousands_use_k_rule_on_completion() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Portfolio, 25_000.0, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2000)), "25K");
    }

    #[test]
    fn test_portfolio_small_integer_plain() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Portfolio, 847.0, false, start);
        assert_eq!(anim.text_at(start + Duration::from_millis(2000)), "847");
    }

    #[test]
    fn test_value_starts_at_zero_and_decelerates() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 1000.0, false, start);
        assert_eq!(anim.value_at(start), 0.0);
        // Ease-out: half the time covers well over half the distance.
        let halfway = anim.value_at(start + Duration::from_millis(1000));
        assert!(halfway > 800.0);
        assert!(halfway < 1000.0);
    }

    #[test]
    fn test_completion_is_exact() {
        let start = Instant::now();
        let anim = CounterAnimation::new(CounterStyle::Deck, 1234.0, false, start);
        let done = start + Duration::from_millis(2001);
        assert!(anim.is_done(done));
        assert_eq!(anim.value_at(done), 1234.0);
    }
}
