//! Drawing surface abstraction.
//!
//! The engine never talks to a terminal or a pixel buffer directly; it draws
//! through this trait. The CLI provides a braille-cell implementation sized to
//! the viewport; tests provide recording stubs.

/// What a primitive is drawn as; the front-end maps tints to theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Particle dots and stars.
    Star,
    /// Connection lines between nearby particles.
    Link,
    /// The pointer glow halo.
    Glow,
}

/// A 2D drawing context sized to the viewport.
///
/// Coordinates are surface units with the origin at the top-left. Opacity is
/// `0.0..=1.0`; how it maps to terminal colors is the implementation's
/// business.
pub trait Surface {
    /// Current surface size in units.
    fn size(&self) -> (f32, f32);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, opacity: f32, tint: Tint);

    /// Draw a stroked line segment.
    fn stroke_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        opacity: f32,
        tint: Tint,
    );
}
