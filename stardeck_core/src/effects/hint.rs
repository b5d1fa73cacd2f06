//! Keyboard-hint overlay lifecycle.
//!
//! Shown at startup, fades out after five seconds, then drops from the
//! layout entirely.

use std::time::{Duration, Instant};

const VISIBLE_FOR: Duration = Duration::from_secs(5);
const FADE_FOR: Duration = Duration::from_millis(500);

pub struct KeyboardHint {
    fade_at: Instant,
}

impl KeyboardHint {
    pub fn new(start: Instant) -> Self {
        Self {
            fade_at: start + VISIBLE_FOR,
        }
    }

    /// Opacity at `now`: 1 while showing, ramping to 0 over the fade.
    pub fn opacity(&self, now: Instant) -> f32 {
        if now < self.fade_at {
            return 1.0;
        }
        let elapsed = now.duration_since(self.fade_at);
        if elapsed >= FADE_FOR {
            0.0
        } else {
            1.0 - elapsed.as_secs_f32() / FADE_FOR.as_secs_f32()
        }
    }

    /// Whether the overlay still occupies layout space.
    pub fn is_gone(&self, now: Instant) -> bool {
        now >= self.fade_at + FADE_FOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_then_fades_then_gone() {
        let start = Instant::now();
        let hint = KeyboardHint::new(start);

        assert_eq!(hint.opacity(start + Duration::from_secs(4)), 1.0);
        let fading = hint.opacity(start + Duration::from_millis(5250));
        assert!(fading > 0.0 && fading < 1.0);
        assert_eq!(hint.opacity(start + Duration::from_millis(5500)), 0.0);
        assert!(hint.is_gone(start + Duration::from_millis(5500)));
        assert!(!hint.is_gone(start + Duration::from_secs(5)));
    }
}
