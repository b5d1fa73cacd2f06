//! Process-timeline fill animation.
//!
//! The first time the process slide dominates the viewport, the timeline
//! waits half a second and then fills to 100%. Fires once.

use std::time::{Duration, Instant};

use crate::utils::easing::ease_out_cubic;

const FILL_DELAY: Duration = Duration::from_millis(500);
const FILL_DURATION: Duration = Duration::from_millis(800);

pub struct TimelineProgress {
    fill_from: Option<Instant>,
}

impl Default for TimelineProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineProgress {
    pub fn new() -> Self {
        Self { fill_from: None }
    }

    /// The owning slide crossed the visibility threshold. Only the first
    /// call arms the fill.
    pub fn trigger(&mut self, now: Instant) {
        if self.fill_from.is_none() {
            self.fill_from = Some(now + FILL_DELAY);
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fill_from.is_some()
    }

    /// Fill fraction in `[0, 1]` at `now`.
    pub fn fraction(&self, now: Instant) -> f32 {
        let Some(from) = self.fill_from else {
            return 0.0;
        };
        if now < from {
            return 0.0;
        }
        let elapsed = now.duration_since(from);
        if elapsed >= FILL_DURATION {
            1.0
        } else {
            ease_out_cubic(elapsed.as_secs_f32() / FILL_DURATION.as_secs_f32())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_delay_then_fills() {
        let now = Instant::now();
        let mut timeline = TimelineProgress::new();
        assert_eq!(timeline.fraction(now), 0.0);

        timeline.trigger(now);
        assert_eq!(timeline.fraction(now + Duration::from_millis(499)), 0.0);
        let mid = timeline.fraction(now + Duration::from_millis(900));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(timeline.fraction(now + Duration::from_millis(1300)), 1.0);
    }

    #[test]
    fn test_second_trigger_does_not_restart() {
        let now = Instant::now();
        let mut timeline = TimelineProgress::new();
        timeline.trigger(now);
        timeline.trigger(now + Duration::from_secs(5));
        assert_eq!(timeline.fraction(now + Duration::from_secs(2)), 1.0);
    }
}
