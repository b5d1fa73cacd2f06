//! Scroll-triggered reveal observer.
//!
//! Watches a set of targets and marks each visible the first time its visible
//! fraction crosses the page threshold. Targets crossing together cascade with
//! a staggered delay instead of popping in at once. "Already fired" is a set
//! of ids owned here, not flags scattered on the targets.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::utils::easing::ease_out_cubic;

/// Identifier for a watched target. Pages assign these.
pub type TargetId = usize;

pub struct RevealObserver {
    threshold: f32,
    stagger: Duration,
    /// Observation order; a target's position here is its stagger index.
    watched: Vec<TargetId>,
    /// Explicit per-target delays overriding the computed stagger.
    overrides: HashMap<TargetId, Duration>,
    fired: HashSet<TargetId>,
    reveal_at: HashMap<TargetId, Instant>,
}

impl RevealObserver {
    pub fn new(threshold: f32, stagger: Duration) -> Self {
        Self {
            threshold,
            stagger,
            watched: Vec::new(),
            overrides: HashMap::new(),
            fired: HashSet::new(),
            reveal_at: HashMap::new(),
        }
    }

    /// Watch a target; its stagger delay is `position × stagger`.
    pub fn observe(&mut self, id: TargetId) {
        if !self.watched.contains(&id) {
            self.watched.push(id);
        }
    }

    /// Watch a target with an explicit delay instead of the computed stagger.
    pub fn observe_with_delay(&mut self, id: TargetId, delay: Duration) {
        self.observe(id);
        self.overrides.insert(id, delay);
    }

    /// Stop watching a target. Fired state is kept so it can never re-fire.
    pub fn unobserve(&mut self, id: TargetId) {
        self.watched.retain(|watched| *watched != id);
    }

    /// Feed this frame's visibility fractions. Targets crossing the threshold
    /// for the first time get a reveal time scheduled; everything else is
    /// ignored, including targets that already fired.
    pub fn update(&mut self, samples: &[(TargetId, f32)], now: Instant) {
        for (id, fraction) in samples {
            if *fraction < self.threshold || self.fired.contains(id) {
                continue;
            }
            let Some(position) = self.watched.iter().position(|watched| watched == id) else {
                continue;
            };
            let delay = self
                .overrides
                .get(id)
                .copied()
                .unwrap_or(self.stagger * position as u32);
            self.fired.insert(*id);
            self.reveal_at.insert(*id, now + delay);
        }
    }

    /// Whether the target has crossed the threshold (its reveal is scheduled
    /// or already showing).
    pub fn has_fired(&self, id: TargetId) -> bool {
        self.fired.contains(&id)
    }

    /// Whether the target's staggered delay has elapsed and it is visible.
    pub fn is_revealed(&self, id: TargetId, now: Instant) -> bool {
        match self.reveal_at.get(&id) {
            Some(at) => now >= *at,
            None => false,
        }
    }

    /// Eased fade-in amount in `[0, 1]`: 0 before the reveal time, 1 once
    /// `fade` has elapsed. Front-ends map this to opacity/offset.
    pub fn fade_in(&self, id: TargetId, now: Instant, fade: Duration) -> f32 {
        let Some(at) = self.reveal_at.get(&id) else {
            return 0.0;
        };
        if now < *at {
            return 0.0;
        }
        let elapsed = now.duration_since(*at);
        if elapsed >= fade {
            1.0
        } else {
            ease_out_cubic(elapsed.as_secs_f32() / fade.as_secs_f32())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn observer() -> RevealObserver {
        RevealObserver::new(0.5, Duration::from_millis(100))
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut obs = observer();
        obs.observe(0);
        let now = Instant::now();
        obs.update(&[(0, 0.4)], now);
        assert!(!obs.has_fired(0));
    }

    #[test]
    fn test_crossing_threshold_fires_after_stagger() {
        let mut obs = observer();
        obs.observe(0);
        obs.observe(1);
        let now = Instant::now();
        obs.update(&[(0, 0.6), (1, 0.9)], now);

        assert!(obs.has_fired(0));
        assert!(obs.has_fired(1));
        // Position 0 reveals immediately, position 1 cascades 100ms later.
        assert!(obs.is_revealed(0, now));
        assert!(!obs.is_revealed(1, now));
        assert!(obs.is_revealed(1, now + Duration::from_millis(100)));
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut obs = observer();
        obs.observe(3);
        let now = Instant::now();
        obs.update(&[(3, 0.8)], now);
        let first = *obs.reveal_at.get(&3).unwrap();

        // Second intersection much later must not reschedule.
        obs.update(&[(3, 1.0)], now + Duration::from_secs(10));
        assert_eq!(*obs.reveal_at.get(&3).unwrap(), first);
    }

    #[test]
    fn test_unobserved_target_never_fires() {
        let mut obs = observer();
        obs.observe(0);
        obs.unobserve(0);
        obs.update(&[(0, 1.0)], Instant::now());
        assert!(!obs.has_fired(0));
    }

    #[test]
    fn test_explicit_delay_overrides_stagger() {
        let mut obs = observer();
        obs.observe(0);
        obs.observe_with_delay(1, Duration::from_millis(400));
        let now = Instant::now();
        obs.update(&[(1, 1.0)], now);

        assert!(!obs.is_revealed(1, now + Duration::from_millis(100)));
        assert!(obs.is_revealed(1, now + Duration::from_millis(400)));
    }

    #[test]
    fn test_fade_in_ramps_to_one() {
        let mut obs = observer();
        obs.observe(0);
        let now = Instant::now();
        obs.update(&[(0, 1.0)], now);

        let fade = Duration::from_millis(600);
        assert_eq!(obs.fade_in(0, now, fade), 0.0);
        let mid = obs.fade_in(0, now + Duration::from_millis(300), fade);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(obs.fade_in(0, now + fade, fade), 1.0);
    }

    #[test]
    fn test_stagger_uses_observation_order() {
        let mut obs = observer();
        for id in 0..4 {
            obs.observe(id);
        }
        let now = Instant::now();
        // Reported out of order; delays still follow observation positions.
        obs.update(&[(2, 1.0), (0, 1.0)], now);
        assert!(obs.is_revealed(0, now));
        assert!(!obs.is_revealed(2, now + Duration::from_millis(199)));
        assert!(obs.is_revealed(2, now + Duration::from_millis(200)));
    }
}
