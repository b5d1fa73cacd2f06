//! Decorative particle field.
//!
//! A fixed pool of drifting dots with pulsing opacity, plus faint connection
//! lines between nearby pairs on the deck page. The pool is seeded once and
//! never grows; particles leaving the surface wrap to the opposite edge.

use std::f32::consts::PI;

use crate::surface::{Surface, Tint};
use crate::tuning::FieldTuning;

/// Opacity swing added on top of a particle's base opacity by the pulse.
const PULSE_AMPLITUDE: f32 = 0.2;

/// Connection line stroke width in surface units.
const LINK_WIDTH: f32 = 0.5;

/// One animated dot.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub size: f32,
    pub base_opacity: f32,
    /// Radians per millisecond.
    pub phase_speed: f32,
    pub phase_offset: f32,
    /// Derived each frame from the pulse; what actually gets drawn.
    pub current_opacity: f32,
}

impl Particle {
    fn seed(rng: &mut fastrand::Rng, width: f32, height: f32, tuning: &FieldTuning) -> Self {
        let base_opacity = tuning.base_opacity.sample(rng.f32());
        Self {
            x: rng.f32() * width,
            y: rng.f32() * height,
            dx: tuning.drift.sample(rng.f32()),
            dy: tuning.drift.sample(rng.f32()),
            size: tuning.size.sample(rng.f32()),
            base_opacity,
            phase_speed: tuning.pulse_speed.sample(rng.f32()),
            phase_offset: rng.f32() * PI * 2.0,
            current_opacity: base_opacity,
        }
    }

    /// Advance one frame: drift, wrap at the surface bounds, re-derive the
    /// pulsed opacity. `t_ms` is milliseconds since the page started.
    pub fn update(&mut self, width: f32, height: f32, t_ms: f64) {
        self.x += self.dx;
        self.y += self.dy;

        // Wrap around the surface rather than despawning.
        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }

        let phase = t_ms * self.phase_speed as f64 + self.phase_offset as f64;
        self.current_opacity = self.base_opacity + phase.sin() as f32 * PULSE_AMPLITUDE;
    }
}

/// Opacity of a connection line between particles `distance` apart.
///
/// Zero at and beyond `reach`, rising linearly to `peak` at distance zero.
pub fn link_opacity(distance: f32, reach: f32, peak: f32) -> f32 {
    if distance >= reach {
        0.0
    } else {
        (1.0 - distance / reach) * peak
    }
}

/// The particle pool plus its bounds.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    tuning: FieldTuning,
    active: bool,
}

impl ParticleField {
    /// Seed a field from OS entropy.
    pub fn new(tuning: FieldTuning, width: f32, height: f32) -> Self {
        Self::with_rng(tuning, width, height, &mut fastrand::Rng::new())
    }

    /// Seed a field from a caller-supplied generator (deterministic tests).
    pub fn with_rng(
        tuning: FieldTuning,
        width: f32,
        height: f32,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let particles = (0..tuning.count)
            .map(|_| Particle::seed(rng, width, height, &tuning))
            .collect();
        Self {
            particles,
            width,
            height,
            tuning,
            active: true,
        }
    }

    /// Resize to a new viewport. Positions are not rescaled; particles
    /// momentarily outside the new bounds wrap back in on their next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Stop the loop; subsequent `render` calls are no-ops.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Run one frame: clear, update-and-draw every particle, then draw the
    /// connection lines. Lines always reflect this frame's positions.
    pub fn render(&mut self, surface: &mut dyn Surface, t_ms: f64) {
        if !self.active {
            return;
        }

        surface.clear();

        for particle in &mut self.particles {
            particle.update(self.width, self.height, t_ms);
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.size,
                particle.current_opacity,
                Tint::Star,
            );
        }

        if let Some(reach) = self.tuning.link_distance {
            // O(count²) pair scan. count is a fixed small constant (80/150);
            // a spatial grid is a non-goal here.
            for i in 0..self.particles.len() {
                for j in (i + 1)..self.particles.len() {
                    let a = &self.particles[i];
                    let b = &self.particles[j];
                    let distance = (a.x - b.x).hypot(a.y - b.y);
                    if distance < reach {
                        let opacity = link_opacity(distance, reach, self.tuning.link_opacity);
                        surface.stroke_line(a.x, a.y, b.x, b.y, LINK_WIDTH, opacity, Tint::Link);
                    }
                }
            }
        }
    }
}
