//! Particle Field Demo
//!
//! Runs the connected particle field full-screen for a few seconds:
//! drifting dots with pulsing opacity and proximity links, rendered on the
//! braille canvas. Press q to leave early.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stardeck_cli::ui::canvas::BrailleCanvas;
use stardeck_core::surface::Surface;
use stardeck_core::tuning;
use stardeck_core::ParticleField;

#[tokio::main]
async fn main() -> Result<()> {
    println!("★ stardeck particle field demo — 10 seconds, q to quit\n");
    std::thread::sleep(Duration::from_millis(800));

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut canvas = BrailleCanvas::new(size.width, size.height);
    let (width, height) = canvas.size();
    let mut field = ParticleField::new(tuning::DECK.field, width, height);

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        let t_ms = start.elapsed().as_secs_f64() * 1000.0;
        field.render(&mut canvas, t_ms);

        terminal.draw(|frame| {
            canvas.draw_into(frame.area(), frame.buffer_mut());
        })?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    break;
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    println!("demo complete — 80 particles, O(n²) links, one frame loop");
    Ok(())
}
