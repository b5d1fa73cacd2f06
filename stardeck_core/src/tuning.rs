//! Per-page tuning constants.
//!
//! The deck page and the portfolio page share components but were tuned
//! separately (counts, thresholds, durations). The two constant sets are kept
//! as distinct named configurations rather than unified.

use std::time::Duration;

/// Inclusive range a particle attribute is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Sample a value in `[min, max)` from a unit random.
    pub fn sample(&self, unit: f32) -> f32 {
        self.min + (self.max - self.min) * unit
    }
}

/// Particle field configuration.
#[derive(Debug, Clone, Copy)]
pub struct FieldTuning {
    /// Fixed pool size. Deliberately a small constant: the per-frame
    /// connection scan is O(count²).
    pub count: usize,
    /// Per-axis drift speed span, units per frame.
    pub drift: Span,
    /// Dot radius span.
    pub size: Span,
    /// Base opacity span; the sinusoidal pulse adds ±0.2 on top.
    pub base_opacity: Span,
    /// Pulse phase speed span, radians per millisecond.
    pub pulse_speed: Span,
    /// Connection lines are drawn between pairs closer than this; `None`
    /// disables connections (the starfield variant).
    pub link_distance: Option<f32>,
    /// Connection opacity at distance zero.
    pub link_opacity: f32,
}

/// Counter formatting variant; see [`crate::counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStyle {
    /// Millions to one decimal with `.0` stripped, decimals to one place,
    /// integers locale-grouped (`1,234`).
    Deck,
    /// `X.XM` for millions, `NK` for thousands, plain integers otherwise.
    Portfolio,
}

/// Cursor glow configuration.
#[derive(Debug, Clone, Copy)]
pub struct GlowTuning {
    /// Glow radius in surface units.
    pub radius: f32,
    /// Peak opacity at the glow center.
    pub intensity: f32,
    /// Per-frame follow factor toward the pointer; `None` snaps directly.
    pub smoothing: Option<f32>,
}

/// One page's complete constant set.
#[derive(Debug, Clone, Copy)]
pub struct PageTuning {
    pub field: FieldTuning,
    /// Visible fraction at which reveal targets fire.
    pub reveal_threshold: f32,
    /// Stagger step between targets revealed together.
    pub reveal_stagger: Duration,
    pub counter_style: CounterStyle,
    pub glow: GlowTuning,
}

/// Pitch-deck page: 80 drifting particles with connection lines, late reveal
/// threshold, wide smoothed glow.
pub const DECK: PageTuning = PageTuning {
    field: FieldTuning {
        count: 80,
        drift: Span::new(-0.25, 0.25),
        size: Span::new(0.5, 2.5),
        base_opacity: Span::new(0.2, 0.7),
        pulse_speed: Span::new(0.01, 0.03),
        link_distance: Some(150.0),
        link_opacity: 0.15,
    },
    reveal_threshold: 0.5,
    reveal_stagger: Duration::from_millis(100),
    counter_style: CounterStyle::Deck,
    glow: GlowTuning {
        radius: 200.0,
        intensity: 0.08,
        smoothing: Some(0.1),
    },
};

/// Portfolio page: 150 twinkling stars without connections, eager reveal
/// threshold, tighter snap-follow glow.
pub const PORTFOLIO: PageTuning = PageTuning {
    field: FieldTuning {
        count: 150,
        drift: Span::new(0.0, 0.0),
        size: Span::new(1.0, 4.0),
        base_opacity: Span::new(0.3, 0.8),
        // Twinkle periods of 2-5 seconds.
        pulse_speed: Span::new(0.00126, 0.00314),
        link_distance: None,
        link_opacity: 0.0,
    },
    reveal_threshold: 0.1,
    reveal_stagger: Duration::from_millis(100),
    counter_style: CounterStyle::Portfolio,
    glow: GlowTuning {
        radius: 150.0,
        intensity: 0.15,
        smoothing: None,
    },
};

/// Autoplay period on the deck page.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Counter run length on both pages.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Dominant-axis displacement needed before a drag counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Scroll distance past which the portfolio chrome switches to its
/// "scrolled" style.
pub const NAVBAR_SCROLL_CUTOFF: f32 = 100.0;
