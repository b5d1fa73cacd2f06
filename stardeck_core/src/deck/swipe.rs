//! Pointer-drag swipe recognition.
//!
//! A drag counts as a swipe when the vertical displacement dominates the
//! horizontal one and exceeds the threshold. Displacement toward the top of
//! the surface advances (pulling the next slide up); toward the bottom
//! retreats.

use crate::tuning::SWIPE_THRESHOLD;

/// Navigation intent produced by a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Advance,
    Retreat,
}

/// Tracks one press-drag-release gesture at a time.
pub struct SwipeTracker {
    threshold: f32,
    origin: Option<(f32, f32)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    /// Pointer pressed.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    /// Abandon the gesture in progress.
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Pointer released; returns the recognized action, if any.
    pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeAction> {
        let (start_x, start_y) = self.origin.take()?;
        let diff_x = start_x - x;
        let diff_y = start_y - y;

        // Vertical swipes only, and only past the threshold.
        if diff_y.abs() <= diff_x.abs() || diff_y.abs() <= self.threshold {
            return None;
        }
        if diff_y > 0.0 {
            Some(SwipeAction::Advance)
        } else {
            Some(SwipeAction::Retreat)
        }
    }
}
