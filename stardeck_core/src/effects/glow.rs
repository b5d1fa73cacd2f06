//! Pointer-following glow halo.
//!
//! The deck page trails the pointer with a smoothed follow
//! (`glow += (pointer - glow) * 0.1` per frame); the portfolio variant snaps
//! directly. Hidden until the pointer first moves, and again when it leaves
//! the surface.

use crate::surface::{Surface, Tint};
use crate::tuning::GlowTuning;

pub struct GlowFollower {
    tuning: GlowTuning,
    x: f32,
    y: f32,
    target_x: f32,
    target_y: f32,
    visible: bool,
    active: bool,
}

impl GlowFollower {
    pub fn new(tuning: GlowTuning) -> Self {
        Self {
            tuning,
            x: 0.0,
            y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            visible: false,
            active: true,
        }
    }

    /// Pointer moved inside the surface.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.target_x = x;
        self.target_y = y;
        if !self.visible {
            // First sighting: start from the pointer instead of gliding in
            // from the origin.
            self.x = x;
            self.y = y;
        }
        self.visible = true;
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    /// Stop the follower; `render` becomes a no-op.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the follow and draw the halo.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }
        match self.tuning.smoothing {
            Some(factor) => {
                self.x += (self.target_x - self.x) * factor;
                self.y += (self.target_y - self.y) * factor;
            }
            None => {
                self.x = self.target_x;
                self.y = self.target_y;
            }
        }
        if self.visible {
            surface.fill_circle(
                self.x,
                self.y,
                self.tuning.radius,
                self.tuning.intensity,
                Tint::Glow,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;

    struct NullSurface;

    impl Surface for NullSurface {
        fn size(&self) -> (f32, f32) {
            (800.0, 600.0)
        }
        fn clear(&mut self) {}
        fn fill_circle(&mut self, _: f32, _: f32, _: f32, _: f32, _: Tint) {}
        fn stroke_line(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32, _: Tint) {}
    }

    #[test]
    fn test_smoothed_follow_closes_a_tenth_per_frame() {
        let mut glow = GlowFollower::new(tuning::DECK.glow);
        glow.pointer_moved(0.0, 0.0);
        glow.pointer_moved(100.0, 0.0);
        glow.render(&mut NullSurface);
        let (x, _) = glow.position();
        assert!((x - 10.0).abs() < 1e-4);
        glow.render(&mut NullSurface);
        let (x, _) = glow.position();
        assert!((x - 19.0).abs() < 1e-4);
    }

    #[test]
    fn test_snap_variant_lands_immediately() {
        let mut glow = GlowFollower::new(tuning::PORTFOLIO.glow);
        glow.pointer_moved(0.0, 0.0);
        glow.pointer_moved(42.0, 24.0);
        glow.render(&mut NullSurface);
        assert_eq!(glow.position(), (42.0, 24.0));
    }

    #[test]
    fn test_hidden_until_pointer_moves() {
        let mut glow = GlowFollower::new(tuning::DECK.glow);
        assert!(!glow.is_visible());
        glow.pointer_moved(5.0, 5.0);
        assert!(glow.is_visible());
        glow.pointer_left();
        assert!(!glow.is_visible());
    }
}
