//! Color theme.
//!
//! One static palette instead of scattered inline styles; dynamic values
//! (opacities, gradient positions) are computed against it per frame.

use ratatui::style::Color;

pub type Rgb = (u8, u8, u8);

/// Deep navy page background.
pub const BG: Rgb = (8, 10, 22);
/// Particle dots and starfield.
pub const STAR: Rgb = (226, 232, 240);
/// Indigo accent: connection lines, active indicators, links.
pub const ACCENT: Rgb = (99, 102, 241);
/// Gradient mid stop.
pub const PINK: Rgb = (236, 72, 153);
/// Gradient end stop.
pub const AMBER: Rgb = (245, 158, 11);
/// Success states.
pub const GREEN: Rgb = (34, 197, 94);
/// Body text.
pub const TEXT: Rgb = (205, 209, 196);
/// Secondary text.
pub const MUTED: Rgb = (120, 128, 150);

/// Linear blend between two colors.
pub fn blend(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Fade a color toward the page background by `opacity` (1.0 = full color).
pub fn faded(color: Rgb, opacity: f32) -> Color {
    let (r, g, b) = blend(BG, color, opacity);
    Color::Rgb(r, g, b)
}

/// Solid theme color.
pub fn solid(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Three-stop progress gradient (indigo → pink → amber) sampled at `t`.
pub fn gradient(t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        blend(ACCENT, PINK, t * 2.0)
    } else {
        blend(PINK, AMBER, (t - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(BG, STAR, 0.0), BG);
        assert_eq!(blend(BG, STAR, 1.0), STAR);
    }

    #[test]
    fn test_blend_clamps() {
        assert_eq!(blend(BG, STAR, -1.0), BG);
        assert_eq!(blend(BG, STAR, 2.0), STAR);
    }

    #[test]
    fn test_gradient_hits_all_stops() {
        assert_eq!(gradient(0.0), ACCENT);
        assert_eq!(gradient(0.5), PINK);
        assert_eq!(gradient(1.0), AMBER);
    }
}
