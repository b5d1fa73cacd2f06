//! Navigation and autoplay state machine.

use std::time::{Duration, Instant};

use crate::tuning::AUTOPLAY_INTERVAL;

/// Half of the slide-number swap: fade/slide out, then fade back in.
pub const SWAP_DURATION: Duration = Duration::from_millis(150);

/// Navigation state. Slide indices are 1-based; `current` is always within
/// `[1, total]`. The pending autoplay deadline lives here so stopping
/// autoplay deterministically cancels the next tick.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current: usize,
    pub total: usize,
    pub autoplay_active: bool,
    pub next_autoplay_at: Option<Instant>,
}

/// Rendered style of the slide-number display during a swap transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapStyle {
    pub text: String,
    /// 1.0 fully visible, 0.0 fully faded.
    pub opacity: f32,
    /// Upward displacement fraction (1.0 = fully risen out).
    pub rise: f32,
}

#[derive(Debug, Clone)]
enum SwapPhase {
    Steady,
    FadingOut { until: Instant, next: String },
    FadingIn { until: Instant },
}

/// The slide-number text with its brief fade/slide transition: 150 ms out,
/// text swap, 150 ms back in.
#[derive(Debug, Clone)]
struct CounterSwap {
    text: String,
    phase: SwapPhase,
}

impl CounterSwap {
    fn new(text: String) -> Self {
        Self {
            text,
            phase: SwapPhase::Steady,
        }
    }

    fn begin(&mut self, next: String, now: Instant) {
        self.phase = SwapPhase::FadingOut {
            until: now + SWAP_DURATION,
            next,
        };
    }

    /// Swap without animation (used by the scroll watcher).
    fn set_immediate(&mut self, text: String) {
        self.text = text;
        self.phase = SwapPhase::Steady;
    }

    fn style(&mut self, now: Instant) -> SwapStyle {
        // Advance through due phases first.
        loop {
            match self.phase.clone() {
                SwapPhase::FadingOut { until, next } if now >= until => {
                    self.text = next;
                    self.phase = SwapPhase::FadingIn {
                        until: until + SWAP_DURATION,
                    };
                }
                SwapPhase::FadingIn { until } if now >= until => {
                    self.phase = SwapPhase::Steady;
                }
                _ => break,
            }
        }

        match &self.phase {
            SwapPhase::Steady => SwapStyle {
                text: self.text.clone(),
                opacity: 1.0,
                rise: 0.0,
            },
            SwapPhase::FadingOut { until, .. } => {
                let remaining = until.duration_since(now).as_secs_f32();
                let t = 1.0 - remaining / SWAP_DURATION.as_secs_f32();
                SwapStyle {
                    text: self.text.clone(),
                    opacity: 1.0 - t,
                    rise: t,
                }
            }
            SwapPhase::FadingIn { until } => {
                let remaining = until.duration_since(now).as_secs_f32();
                let t = 1.0 - remaining / SWAP_DURATION.as_secs_f32();
                SwapStyle {
                    text: self.text.clone(),
                    opacity: t,
                    rise: 1.0 - t,
                }
            }
        }
    }
}

fn slide_label(n: usize) -> String {
    format!("{:02}", n)
}

/// The slide controller. Owns [`NavigationState`]; every mutation goes
/// through a navigation operation here.
pub struct Deck {
    state: NavigationState,
    swap: CounterSwap,
    interval: Duration,
}

impl Deck {
    pub fn new(total: usize) -> Self {
        let total = total.max(1);
        Self {
            state: NavigationState {
                current: 1,
                total,
                autoplay_active: false,
                next_autoplay_at: None,
            },
            swap: CounterSwap::new(slide_label(1)),
            interval: AUTOPLAY_INTERVAL,
        }
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn total(&self) -> usize {
        self.state.total
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Progress-bar fill percentage: `current / total * 100`.
    pub fn progress_percent(&self) -> f32 {
        self.state.current as f32 / self.state.total as f32 * 100.0
    }

    /// Zero-based index of the single active indicator dot.
    pub fn active_indicator(&self) -> usize {
        self.state.current - 1
    }

    pub fn prev_enabled(&self) -> bool {
        self.state.current > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.state.current < self.state.total
    }

    pub fn autoplay_active(&self) -> bool {
        self.state.autoplay_active
    }

    /// Navigate to slide `n`. Out-of-range requests are ignored and return
    /// `false`; in-range requests (including the current slide — idempotent)
    /// update the state, start the number-swap transition and return `true`
    /// so the caller scrolls the slide into view.
    pub fn go_to_slide(&mut self, n: usize, now: Instant) -> bool {
        if n < 1 || n > self.state.total {
            return false;
        }
        self.state.current = n;
        self.swap.begin(slide_label(n), now);
        true
    }

    /// Manual forward navigation; clamped, never wraps.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.state.current < self.state.total {
            self.go_to_slide(self.state.current + 1, now)
        } else {
            false
        }
    }

    /// Manual backward navigation; clamped, never wraps.
    pub fn retreat(&mut self, now: Instant) -> bool {
        if self.state.current > 1 {
            self.go_to_slide(self.state.current - 1, now)
        } else {
            false
        }
    }

    /// Toggle the 5-second autoplay timer. Returns the new state. Stopping
    /// clears the pending deadline so no orphaned tick can fire later.
    pub fn toggle_autoplay(&mut self, now: Instant) -> bool {
        if self.state.autoplay_active {
            self.stop_autoplay();
        } else {
            self.state.autoplay_active = true;
            self.state.next_autoplay_at = Some(now + self.interval);
        }
        self.state.autoplay_active
    }

    pub fn stop_autoplay(&mut self) {
        self.state.autoplay_active = false;
        self.state.next_autoplay_at = None;
    }

    /// Drive the autoplay timer. When the deadline has passed, advances —
    /// wrapping to slide 1 after the last slide (autoplay is the only mode
    /// with wraparound) — and returns the new slide for scrolling.
    pub fn poll_autoplay(&mut self, now: Instant) -> Option<usize> {
        let deadline = self.state.next_autoplay_at?;
        if !self.state.autoplay_active || now < deadline {
            return None;
        }
        let target = if self.state.current < self.state.total {
            self.state.current + 1
        } else {
            1
        };
        self.go_to_slide(target, now);
        // Schedule relative to the deadline, not `now`, so the period holds.
        self.state.next_autoplay_at = Some(deadline + self.interval);
        Some(target)
    }

    /// Reconcile to the slide dominating the viewport during free scrolling.
    /// Updates indicators/counter/progress directly, without the scroll or
    /// swap animation `go_to_slide` would trigger — this is what breaks the
    /// feedback loop between programmatic scrolling and the watcher.
    pub fn sync_from_scroll(&mut self, slide: usize) {
        if slide < 1 || slide > self.state.total || slide == self.state.current {
            return;
        }
        self.state.current = slide;
        self.swap.set_immediate(slide_label(slide));
    }

    /// Current style of the slide-number display.
    pub fn swap_style(&mut self, now: Instant) -> SwapStyle {
        self.swap.style(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_out_of_range_is_ignored() {
        let now = Instant::now();
        let mut deck = Deck::new(12);
        assert!(!deck.go_to_slide(0, now));
        assert!(!deck.go_to_slide(13, now));
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn test_go_to_slide_updates_indicator_and_progress() {
        let now = Instant::now();
        let mut deck = Deck::new(12);
        assert!(deck.go_to_slide(4, now));
        assert_eq!(deck.current(), 4);
        assert_eq!(deck.active_indicator(), 3);
        assert!((deck.progress_percent() - 4.0 / 12.0 * 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_same_slide_is_idempotent() {
        let now = Instant::now();
        let mut deck = Deck::new(5);
        deck.go_to_slide(3, now);
        let indicator = deck.active_indicator();
        assert!(deck.go_to_slide(3, now));
        assert_eq!(deck.current(), 3);
        assert_eq!(deck.active_indicator(), indicator);
    }

    #[test]
    fn test_manual_advance_clamps_at_last_slide() {
        let now = Instant::now();
        let mut deck = Deck::new(3);
        deck.go_to_slide(3, now);
        assert!(!deck.advance(now));
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn test_manual_retreat_clamps_at_first_slide() {
        let now = Instant::now();
        let mut deck = Deck::new(3);
        assert!(!deck.retreat(now));
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn test_button_enabled_states() {
        let now = Instant::now();
        let mut deck = Deck::new(3);
        assert!(!deck.prev_enabled());
        assert!(deck.next_enabled());
        deck.go_to_slide(3, now);
        assert!(deck.prev_enabled());
        assert!(!deck.next_enabled());
    }

    #[test]
    fn test_autoplay_wraps_at_last_slide() {
        let now = Instant::now();
        let mut deck = Deck::new(3);
        deck.go_to_slide(3, now);
        deck.toggle_autoplay(now);

        assert_eq!(deck.poll_autoplay(now + Duration::from_secs(4)), None);
        assert_eq!(
            deck.poll_autoplay(now + Duration::from_secs(5)),
            Some(1),
            "autoplay wraps to the first slide"
        );
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn test_autoplay_stop_cancels_pending_tick() {
        let now = Instant::now();
        let mut deck = Deck::new(3);
        deck.toggle_autoplay(now);
        deck.toggle_autoplay(now + Duration::from_secs(1));

        assert!(!deck.autoplay_active());
        assert_eq!(deck.state().next_autoplay_at, None);
        assert_eq!(deck.poll_autoplay(now + Duration::from_secs(10)), None);
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn test_autoplay_period_holds_across_ticks() {
        let now = Instant::now();
        let mut deck = Deck::new(5);
        deck.toggle_autoplay(now);

        // Poll late; the next deadline still lands on the 10s grid line.
        assert_eq!(
            deck.poll_autoplay(now + Duration::from_millis(5600)),
            Some(2)
        );
        assert_eq!(deck.poll_autoplay(now + Duration::from_millis(9900)), None);
        assert_eq!(
            deck.poll_autoplay(now + Duration::from_millis(10000)),
            Some(3)
        );
    }

    #[test]
    fn test_sync_from_scroll_skips_swap_animation() {
        let now = Instant::now();
        let mut deck = Deck::new(8);
        deck.sync_from_scroll(5);
        assert_eq!(deck.current(), 5);

        let style = deck.swap_style(now);
        assert_eq!(style.text, "05");
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_swap_transition_fades_out_then_in() {
        let now = Instant::now();
        let mut deck = Deck::new(12);
        deck.go_to_slide(7, now);

        // Mid fade-out: old text, dimming.
        let out = deck.swap_style(now + Duration::from_millis(75));
        assert_eq!(out.text, "01");
        assert!(out.opacity < 1.0);

        // After the swap point: new text fading back in.
        let in_ = deck.swap_style(now + Duration::from_millis(200));
        assert_eq!(in_.text, "07");
        assert!(in_.opacity > 0.0);

        // Settled.
        let steady = deck.swap_style(now + Duration::from_millis(400));
        assert_eq!(steady.text, "07");
        assert_eq!(steady.opacity, 1.0);
    }

    #[test]
    fn test_labels_are_zero_padded() {
        assert_eq!(slide_label(4), "04");
        assert_eq!(slide_label(11), "11");
    }
}
