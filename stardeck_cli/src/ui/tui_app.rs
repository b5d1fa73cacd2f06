//! Main TUI application: terminal setup, the cooperative event loop, and
//! teardown. Input events, frame ticks and timer deadlines all interleave on
//! this single loop; each handler runs to completion before the next.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stardeck_core::utils::logger;

use crate::ui::pages::{DeckPage, PortfolioPage};

/// Which page this process presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Deck,
    Portfolio,
}

enum Page {
    Deck(DeckPage),
    Portfolio(PortfolioPage),
}

impl Page {
    fn handle_key(&mut self, key: crossterm::event::KeyEvent, now: Instant) {
        match self {
            Page::Deck(page) => page.handle_key(key, now),
            Page::Portfolio(page) => page.handle_key(key, now),
        }
    }

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent, now: Instant) {
        match self {
            Page::Deck(page) => page.handle_mouse(mouse, now),
            Page::Portfolio(page) => page.handle_mouse(mouse, now),
        }
    }

    fn handle_resize(&mut self, cols: u16, rows: u16) {
        match self {
            Page::Deck(page) => page.handle_resize(cols, rows),
            Page::Portfolio(page) => page.handle_resize(cols, rows),
        }
    }

    fn pointer_left(&mut self) {
        match self {
            Page::Deck(page) => page.pointer_left(),
            Page::Portfolio(page) => page.pointer_left(),
        }
    }

    fn tick(&mut self, now: Instant) {
        match self {
            Page::Deck(page) => page.tick(now),
            Page::Portfolio(page) => page.tick(now),
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame, now: Instant) {
        match self {
            Page::Deck(page) => page.render(frame, now),
            Page::Portfolio(page) => page.render(frame, now),
        }
    }
}

/// Main TUI Application
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    page: Page,
    frame_budget: Duration,
    fullscreen: bool,
}

impl TuiApp {
    pub fn new(kind: PageKind, fps: u16, autoplay: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;

        let start = Instant::now();
        let page = match kind {
            PageKind::Deck => Page::Deck(DeckPage::new(size.width, size.height, autoplay, start)),
            PageKind::Portfolio => {
                Page::Portfolio(PortfolioPage::new(size.width, size.height, start))
            }
        };

        let fps = fps.clamp(10, 120);
        Ok(Self {
            terminal,
            page,
            frame_budget: Duration::from_millis(1000 / fps as u64),
            fullscreen: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();
            self.terminal.draw(|frame| self.page.render(frame, now))?;

            // Sleep inside poll for the rest of the frame; events wake us.
            if event::poll(self.frame_budget)? {
                match event::read()? {
                    Event::Key(key) => {
                        // Press only, to avoid double-firing on repeat-capable
                        // terminals.
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Char('c')
                                if key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                return Ok(());
                            }
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_fullscreen(),
                            _ => self.page.handle_key(key, Instant::now()),
                        }
                    }
                    Event::Mouse(mouse) => self.page.handle_mouse(mouse, Instant::now()),
                    Event::Resize(cols, rows) => self.page.handle_resize(cols, rows),
                    Event::FocusLost => self.page.pointer_left(),
                    _ => {}
                }
            }

            self.page.tick(Instant::now());
        }
    }

    /// Ask the hosting terminal to enter or leave fullscreen. Not every
    /// emulator honors the window-op; a failure is logged and the
    /// presentation carries on windowed.
    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        let result = request_fullscreen(self.fullscreen);
        if let Err(err) = result {
            logger::warn(&format!("fullscreen not available: {}", err));
            self.fullscreen = false;
        }
    }
}

fn request_fullscreen(on: bool) -> io::Result<()> {
    // xterm window manipulation: CSI 9;1t maximizes, CSI 9;0t restores.
    let mut stdout = io::stdout();
    write!(stdout, "\x1b[9;{}t", if on { 1 } else { 0 })?;
    stdout.flush()
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.terminal.clear();
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}
