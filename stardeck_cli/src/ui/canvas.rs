//! Braille-cell drawing surface.
//!
//! Implements the engine's `Surface` over a braille pixel grid: every
//! terminal cell holds 2×4 dots, and one dot stands for an 8×8 block of
//! virtual pixels, so an ordinary 160×48 terminal behaves like a
//! 2560×1536-unit canvas — the scale the page constants (link reach 150,
//! glow radius 200) were tuned for.
//!
//! Star and link primitives rasterize to dots on separate layers so they can
//! carry different theme colors; the glow layer tints cell backgrounds
//! instead of adding dots.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use stardeck_core::surface::{Surface, Tint};

use super::theme;

/// Virtual units per braille dot.
pub const PIXEL_SCALE: f32 = 8.0;

/// Dot bit for pixel (x in 0..2, y in 0..4) within one cell.
const DOT_BITS: [[u16; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

const BRAILLE_BASE: u32 = 0x2800;

/// Dots dimmer than this do not render.
const MIN_VISIBLE: f32 = 0.02;

pub struct BrailleCanvas {
    cols: u16,
    rows: u16,
    wpx: usize,
    hpx: usize,
    star: Vec<f32>,
    link: Vec<f32>,
    glow: Vec<f32>,
}

impl BrailleCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let wpx = cols as usize * 2;
        let hpx = rows as usize * 4;
        Self {
            cols,
            rows,
            wpx,
            hpx,
            star: vec![0.0; wpx * hpx],
            link: vec![0.0; wpx * hpx],
            glow: vec![0.0; wpx * hpx],
        }
    }

    /// Resize to a new cell grid, dropping the old frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        *self = Self::new(cols, rows);
    }

    fn layer_mut(&mut self, tint: Tint) -> &mut Vec<f32> {
        match tint {
            Tint::Star => &mut self.star,
            Tint::Link => &mut self.link,
            Tint::Glow => &mut self.glow,
        }
    }

    fn plot(&mut self, tint: Tint, px: i32, py: i32, opacity: f32) {
        if px < 0 || py < 0 || px as usize >= self.wpx || py as usize >= self.hpx {
            return;
        }
        let index = py as usize * self.wpx + px as usize;
        let layer = self.layer_mut(tint);
        if opacity > layer[index] {
            layer[index] = opacity;
        }
    }

    /// Paint the frame into a ratatui buffer.
    pub fn draw_into(&self, area: Rect, buf: &mut Buffer) {
        let cols = self.cols.min(area.width);
        let rows = self.rows.min(area.height);
        for cy in 0..rows {
            for cx in 0..cols {
                let mut bits: u16 = 0;
                let mut star_max = 0.0f32;
                let mut link_max = 0.0f32;
                let mut glow_sum = 0.0f32;

                for dy in 0..4usize {
                    for dx in 0..2usize {
                        let px = cx as usize * 2 + dx;
                        let py = cy as usize * 4 + dy;
                        let index = py * self.wpx + px;
                        let star = self.star[index];
                        let link = self.link[index];
                        if star > MIN_VISIBLE || link > MIN_VISIBLE {
                            bits |= DOT_BITS[dy][dx];
                        }
                        star_max = star_max.max(star);
                        link_max = link_max.max(link);
                        glow_sum += self.glow[index];
                    }
                }

                let glow_avg = glow_sum / 8.0;
                let cell = &mut buf[(area.x + cx, area.y + cy)];
                if glow_avg > MIN_VISIBLE {
                    cell.set_bg(theme::faded(theme::ACCENT, glow_avg.min(1.0)));
                }
                if bits != 0 {
                    let ch = char::from_u32(BRAILLE_BASE + bits as u32).unwrap_or(' ');
                    let fg = if star_max >= link_max {
                        theme::faded(theme::STAR, star_max.min(1.0))
                    } else {
                        theme::faded(theme::ACCENT, link_max.min(1.0))
                    };
                    cell.set_char(ch);
                    cell.set_style(Style::default().fg(fg));
                }
            }
        }
    }
}

impl Surface for BrailleCanvas {
    fn size(&self) -> (f32, f32) {
        (
            self.wpx as f32 * PIXEL_SCALE,
            self.hpx as f32 * PIXEL_SCALE,
        )
    }

    fn clear(&mut self) {
        self.star.fill(0.0);
        self.link.fill(0.0);
        self.glow.fill(0.0);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, opacity: f32, tint: Tint) {
        let cx = x / PIXEL_SCALE;
        let cy = y / PIXEL_SCALE;
        let r = (radius / PIXEL_SCALE).max(0.4);
        let soft = matches!(tint, Tint::Glow);

        let min_x = (cx - r).floor() as i32;
        let max_x = (cx + r).ceil() as i32;
        let min_y = (cy - r).floor() as i32;
        let max_y = (cy + r).ceil() as i32;
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= r {
                    let level = if soft {
                        // Radial falloff toward the rim.
                        opacity * (1.0 - dist / r)
                    } else {
                        opacity
                    };
                    self.plot(tint, px, py, level.max(0.0));
                }
            }
        }
    }

    fn stroke_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        _width: f32,
        opacity: f32,
        tint: Tint,
    ) {
        let ax = x0 / PIXEL_SCALE;
        let ay = y0 / PIXEL_SCALE;
        let bx = x1 / PIXEL_SCALE;
        let by = y1 / PIXEL_SCALE;
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as i32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let px = (ax + (bx - ax) * t).round() as i32;
            let py = (ay + (by - ay) * t).round() as i32;
            self.plot(tint, px, py, opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_virtual_size_scales_cells() {
        let canvas = BrailleCanvas::new(80, 24);
        assert_eq!(canvas.size(), (80.0 * 2.0 * 8.0, 24.0 * 4.0 * 8.0));
    }

    #[test]
    fn test_clear_resets_layers() {
        let mut canvas = BrailleCanvas::new(10, 10);
        canvas.fill_circle(40.0, 40.0, 8.0, 0.8, Tint::Star);
        assert!(canvas.star.iter().any(|o| *o > 0.0));
        canvas.clear();
        assert!(canvas.star.iter().all(|o| *o == 0.0));
    }

    #[test]
    fn test_circle_lands_on_star_layer() {
        let mut canvas = BrailleCanvas::new(10, 10);
        canvas.fill_circle(40.0, 40.0, 8.0, 0.8, Tint::Star);
        // Pixel (5,5) is the circle center.
        let index = 5 * canvas.wpx + 5;
        assert_eq!(canvas.star[index], 0.8);
        assert_eq!(canvas.link[index], 0.0);
    }

    #[test]
    fn test_line_connects_endpoints() {
        let mut canvas = BrailleCanvas::new(10, 10);
        canvas.stroke_line(0.0, 0.0, 152.0, 0.0, 0.5, 0.1, Tint::Link);
        let start = canvas.link[0];
        let end = canvas.link[19];
        assert!(start > 0.0);
        assert!(end > 0.0);
    }

    #[test]
    fn test_out_of_bounds_plots_are_dropped() {
        let mut canvas = BrailleCanvas::new(4, 4);
        // Far outside; must not panic or wrap.
        canvas.fill_circle(-500.0, -500.0, 8.0, 1.0, Tint::Star);
        canvas.fill_circle(5000.0, 5000.0, 8.0, 1.0, Tint::Star);
        assert!(canvas.star.iter().all(|o| *o == 0.0));
    }

    #[test]
    fn test_resize_reallocates() {
        let mut canvas = BrailleCanvas::new(4, 4);
        canvas.resize(8, 2);
        assert_eq!(canvas.size(), (8.0 * 2.0 * 8.0, 2.0 * 4.0 * 8.0));
        assert_eq!(canvas.star.len(), 16 * 8);
    }
}
