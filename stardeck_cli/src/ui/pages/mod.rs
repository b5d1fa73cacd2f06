//! The two page implementations and their shared drawing helpers.

pub mod deck;
pub mod portfolio;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

pub use deck::DeckPage;
pub use portfolio::PortfolioPage;

/// Write `text` at (x, y) inside `area`, clipping at the right edge and
/// dropping rows outside the area entirely (slides scroll past both edges).
pub fn put_str(buf: &mut Buffer, area: Rect, x: u16, y: i32, text: &str, style: Style) {
    if y < 0 || y >= area.height as i32 {
        return;
    }
    let max_width = area.width.saturating_sub(x) as usize;
    if max_width == 0 {
        return;
    }
    buf.set_stringn(
        area.x + x,
        area.y + y as u16,
        text,
        max_width,
        style,
    );
}

/// Write `text` horizontally centered on row `y`.
pub fn put_centered(buf: &mut Buffer, area: Rect, y: i32, text: &str, style: Style) {
    let width = text.width() as u16;
    let x = area.width.saturating_sub(width) / 2;
    put_str(buf, area, x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_put_str_clips_rows_outside_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        put_str(&mut buf, area, 0, -1, "above", Style::default());
        put_str(&mut buf, area, 0, 5, "below", Style::default());
        put_str(&mut buf, area, 0, 2, "shown", Style::default());
        assert_eq!(buf[(0, 2)].symbol(), "s");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_put_str_clips_right_edge() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        put_str(
            &mut buf,
            area,
            0,
            0,
            "overflowing",
            Style::default().fg(Color::White),
        );
        assert_eq!(buf[(3, 0)].symbol(), "r");
    }

    #[test]
    fn test_put_centered() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        put_centered(&mut buf, area, 0, "abcd", Style::default());
        assert_eq!(buf[(3, 0)].symbol(), "a");
    }
}
