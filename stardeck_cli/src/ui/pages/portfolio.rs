//! The portfolio landing page: stacked sections under a fixed navbar, over a
//! twinkling starfield, with scroll-triggered reveals, counters, a project
//! filter and a simulated contact form.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use stardeck_core::counter::CounterAnimation;
use stardeck_core::effects::filter::CardState;
use stardeck_core::effects::scroll_effects::{navbar_scrolled, parallax_offset, scroll_progress};
use stardeck_core::effects::{ContactForm, FormPhase, GlowFollower, ProjectFilter, TimelineProgress, Typewriter};
use stardeck_core::particles::ParticleField;
use stardeck_core::reveal::RevealObserver;
use stardeck_core::surface::Surface;
use stardeck_core::tuning::{self, CounterStyle};

use super::deck::fill_background;
use super::{put_centered, put_str};
use crate::ui::canvas::{BrailleCanvas, PIXEL_SCALE};
use crate::ui::theme;

const REVEAL_FADE: Duration = Duration::from_millis(600);
const CELL_H: f32 = 4.0 * PIXEL_SCALE;
const WHEEL_STEP: f32 = 2.0;

/// Rows reserved for the fixed chrome (progress bar + navbar).
const CHROME_ROWS: u16 = 3;

struct SectionSpec {
    title: &'static str,
    height: u16,
}

static SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "",
        height: 18,
    },
    SectionSpec {
        title: "BY THE NUMBERS",
        height: 10,
    },
    SectionSpec {
        title: "SELECTED WORK",
        height: 17,
    },
    SectionSpec {
        title: "HOW WE WORK",
        height: 10,
    },
    SectionSpec {
        title: "START A PROJECT",
        height: 14,
    },
];

const HERO: usize = 0;
const STATS: usize = 1;
const PROJECTS: usize = 2;
const PROCESS: usize = 3;
const CONTACT: usize = 4;

struct Project {
    name: &'static str,
    category: &'static str,
}

static PROJECTS_LIST: &[Project] = &[
    Project {
        name: "Lumen Analytics",
        category: "web",
    },
    Project {
        name: "Orbit Wallet",
        category: "mobile",
    },
    Project {
        name: "Nimbus Rebrand",
        category: "branding",
    },
    Project {
        name: "Atlas Commerce",
        category: "web",
    },
    Project {
        name: "Pulse Fitness",
        category: "mobile",
    },
    Project {
        name: "Vega Identity",
        category: "branding",
    },
];

struct PortfolioStat {
    label: &'static str,
    value: f64,
}

static STATS_LIST: &[PortfolioStat] = &[
    PortfolioStat {
        label: "audience reached",
        value: 1_200_000.0,
    },
    PortfolioStat {
        label: "hours of craft",
        value: 15_000.0,
    },
    PortfolioStat {
        label: "projects delivered",
        value: 120.0,
    },
    PortfolioStat {
        label: "client retention %",
        value: 98.0,
    },
];

static PROCESS_STEPS: &[&str] = &["Listen", "Design", "Build", "Grow"];

static TYPEWRITER_WORDS: &[&str] = &[
    "Generate Revenue",
    "Drive Conversions",
    "Build Trust",
    "Scale Fast",
];

/// Reveal target ids: one per section header, then the project cards.
fn header_id(section: usize) -> usize {
    section
}

fn card_id(card: usize) -> usize {
    SECTIONS.len() + card
}

pub struct PortfolioPage {
    field: ParticleField,
    glow: GlowFollower,
    typewriter: Typewriter,
    filter: ProjectFilter,
    filter_changed_at: Option<Instant>,
    form: ContactForm,
    timeline: TimelineProgress,
    reveals: RevealObserver,
    counter_gate: RevealObserver,
    counters: HashMap<usize, CounterAnimation>,
    canvas: BrailleCanvas,
    scroll_rows: f32,
    scroll_target: Option<f32>,
    start: Instant,
    cols: u16,
    rows: u16,
}

impl PortfolioPage {
    pub fn new(cols: u16, rows: u16, start: Instant) -> Self {
        let canvas = BrailleCanvas::new(cols, rows);
        let (width, height) = canvas.size();
        let field = ParticleField::new(tuning::PORTFOLIO.field, width, height);

        let mut reveals = RevealObserver::new(
            tuning::PORTFOLIO.reveal_threshold,
            tuning::PORTFOLIO.reveal_stagger,
        );
        for section in 0..SECTIONS.len() {
            reveals.observe(header_id(section));
        }
        for card in 0..PROJECTS_LIST.len() {
            reveals.observe(card_id(card));
        }

        let mut counter_gate = RevealObserver::new(0.5, Duration::ZERO);
        for stat in 0..STATS_LIST.len() {
            counter_gate.observe(stat);
        }

        Self {
            field,
            glow: GlowFollower::new(tuning::PORTFOLIO.glow),
            typewriter: Typewriter::new(
                TYPEWRITER_WORDS.iter().map(|w| w.to_string()).collect(),
                start,
            ),
            filter: ProjectFilter::new(vec![
                "all".to_string(),
                "web".to_string(),
                "mobile".to_string(),
                "branding".to_string(),
            ]),
            filter_changed_at: None,
            form: ContactForm::new(),
            timeline: TimelineProgress::new(),
            reveals,
            counter_gate,
            counters: HashMap::new(),
            canvas,
            scroll_rows: 0.0,
            scroll_target: None,
            start,
            cols,
            rows,
        }
    }

    fn total_rows(&self) -> f32 {
        SECTIONS.iter().map(|s| s.height as f32).sum()
    }

    fn max_scroll(&self) -> f32 {
        let viewport = self.rows.saturating_sub(CHROME_ROWS) as f32;
        (self.total_rows() - viewport).max(0.0)
    }

    /// Top row of a section within the scrolled content.
    fn section_top(&self, section: usize) -> f32 {
        SECTIONS[..section].iter().map(|s| s.height as f32).sum()
    }

    /// Fraction of a section inside the viewport.
    fn section_visibility(&self, section: usize) -> f32 {
        let viewport = self.rows.saturating_sub(CHROME_ROWS) as f32;
        let top = self.section_top(section) - self.scroll_rows;
        let bottom = top + SECTIONS[section].height as f32;
        let overlap = bottom.min(viewport) - top.max(0.0);
        (overlap / SECTIONS[section].height as f32).clamp(0.0, 1.0)
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.canvas.resize(cols, rows);
        let (width, height) = self.canvas.size();
        self.field.resize(width, height);
        self.scroll_rows = self.scroll_rows.clamp(0.0, self.max_scroll());
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => self.scroll_by(1.0),
            KeyCode::Up => self.scroll_by(-1.0),
            KeyCode::PageDown => self.scroll_by(self.rows as f32 * 0.8),
            KeyCode::PageUp => self.scroll_by(-(self.rows as f32 * 0.8)),
            KeyCode::Home => self.scroll_target = Some(0.0),
            KeyCode::End => self.scroll_target = Some(self.max_scroll()),
            KeyCode::Tab => {
                // Smooth-scroll to the next section, like the anchor links.
                let next = (0..SECTIONS.len())
                    .map(|s| self.section_top(s))
                    .find(|top| *top > self.scroll_rows + 0.5)
                    .unwrap_or(0.0);
                self.scroll_target = Some(next.min(self.max_scroll()));
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if self.filter.select(index) {
                    self.filter_changed_at = Some(now);
                }
            }
            KeyCode::Enter => {
                if self.section_visibility(CONTACT) > 0.0 {
                    self.form.submit(now);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, _now: Instant) {
        let vx = event.column as f32 * 2.0 * PIXEL_SCALE;
        let vy = event.row as f32 * CELL_H;
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.glow.pointer_moved(vx, vy),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }
    }

    pub fn pointer_left(&mut self) {
        self.glow.pointer_left();
    }

    fn scroll_by(&mut self, rows: f32) {
        self.scroll_target = None;
        self.scroll_rows = (self.scroll_rows + rows).clamp(0.0, self.max_scroll());
    }

    pub fn tick(&mut self, now: Instant) {
        self.typewriter.tick(now);
        self.form.tick(now);

        // Smooth scroll toward a requested anchor.
        if let Some(target) = self.scroll_target {
            let diff = target - self.scroll_rows;
            if diff.abs() < 0.05 {
                self.scroll_rows = target;
                self.scroll_target = None;
            } else {
                self.scroll_rows += diff * 0.15;
            }
        }

        // Feed the observers this frame's visibility.
        let mut samples: Vec<(usize, f32)> = (0..SECTIONS.len())
            .map(|s| (header_id(s), self.section_visibility(s)))
            .collect();
        let projects_visible = self.section_visibility(PROJECTS);
        for card in 0..PROJECTS_LIST.len() {
            samples.push((card_id(card), projects_visible));
        }
        self.reveals.update(&samples, now);

        let stats_visible = self.section_visibility(STATS);
        let stat_samples: Vec<(usize, f32)> =
            (0..STATS_LIST.len()).map(|s| (s, stats_visible)).collect();
        self.counter_gate.update(&stat_samples, now);
        for (index, stat) in STATS_LIST.iter().enumerate() {
            if self.counter_gate.has_fired(index) {
                self.counters.entry(index).or_insert_with(|| {
                    CounterAnimation::new(CounterStyle::Portfolio, stat.value, false, now)
                });
            }
        }

        if self.section_visibility(PROCESS) >= 0.5 {
            self.timeline.trigger(now);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        if area.width != self.cols || area.height != self.rows {
            self.handle_resize(area.width, area.height);
        }

        let t_ms = now.duration_since(self.start).as_secs_f64() * 1000.0;
        self.field.render(&mut self.canvas, t_ms);
        self.glow.render(&mut self.canvas);

        let buf = frame.buffer_mut();
        fill_background(area, buf);
        self.canvas.draw_into(area, buf);

        let content = Rect {
            x: area.x,
            y: area.y + CHROME_ROWS,
            width: area.width,
            height: area.height.saturating_sub(CHROME_ROWS),
        };
        self.render_parallax_shapes(content, buf);
        self.render_sections(content, buf, now);
        self.render_chrome(area, buf);
    }

    fn render_parallax_shapes(&self, area: Rect, buf: &mut Buffer) {
        // Decorative floats drifting slower than the content.
        let scroll_px = self.scroll_rows * CELL_H;
        let shapes = [("✦", 3.0_f32, 0.15_f32), ("◆", 9.0, 0.55), ("●", 15.0, 0.85)];
        for (index, (glyph, base_row, x_frac)) in shapes.iter().enumerate() {
            let offset_rows = parallax_offset(scroll_px, index) / CELL_H;
            let y = (*base_row - self.scroll_rows + offset_rows).round() as i32;
            let x = (area.width as f32 * x_frac) as u16;
            put_str(
                buf,
                area,
                x,
                y,
                glyph,
                Style::default()
                    .fg(theme::solid(theme::ACCENT))
                    .add_modifier(Modifier::DIM),
            );
        }
    }

    fn reveal_style(&self, id: usize, now: Instant, base: Style) -> Option<(Style, i32)> {
        let fade = self.reveals.fade_in(id, now, REVEAL_FADE);
        if fade <= 0.0 {
            return None;
        }
        let style = if fade >= 1.0 {
            base
        } else {
            base.add_modifier(Modifier::DIM)
        };
        let rise = if fade < 0.5 { 1 } else { 0 };
        Some((style, rise))
    }

    fn render_sections(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        for section in 0..SECTIONS.len() {
            let top = (self.section_top(section) - self.scroll_rows).round() as i32;
            if top >= area.height as i32
                || top + SECTIONS[section].height as i32 <= 0
            {
                continue;
            }
            match section {
                HERO => self.render_hero(area, buf, top),
                STATS => self.render_stats(area, buf, top, now),
                PROJECTS => self.render_projects(area, buf, top, now),
                PROCESS => self.render_process(area, buf, top, now),
                CONTACT => self.render_contact(area, buf, top, now),
                _ => {}
            }

            if !SECTIONS[section].title.is_empty() {
                if let Some((style, rise)) = self.reveal_style(
                    header_id(section),
                    now,
                    Style::default()
                        .fg(theme::solid(theme::ACCENT))
                        .add_modifier(Modifier::BOLD),
                ) {
                    put_centered(buf, area, top + 1 + rise, SECTIONS[section].title, style);
                }
            }
        }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer, top: i32) {
        put_centered(
            buf,
            area,
            top + 5,
            "S T A R D E C K",
            Style::default()
                .fg(theme::solid(theme::TEXT))
                .add_modifier(Modifier::BOLD),
        );
        let typed = format!("We help teams {}▌", self.typewriter.text());
        put_centered(
            buf,
            area,
            top + 8,
            &typed,
            Style::default().fg(theme::solid(theme::ACCENT)),
        );
        put_centered(
            buf,
            area,
            top + 11,
            "Digital experiences with gravity.",
            Style::default().fg(theme::solid(theme::MUTED)),
        );
        put_centered(
            buf,
            area,
            top + 14,
            "scroll ↓ · tab jumps sections · 1-4 filter work · q quits",
            Style::default()
                .fg(theme::solid(theme::MUTED))
                .add_modifier(Modifier::DIM),
        );
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer, top: i32, now: Instant) {
        let slot = area.width / STATS_LIST.len() as u16;
        for (index, stat) in STATS_LIST.iter().enumerate() {
            let value = self
                .counters
                .get(&index)
                .map(|counter| counter.text_at(now))
                .unwrap_or_else(|| "0".to_string());
            let x = slot * index as u16 + slot / 2;
            let x = x.saturating_sub(value.len() as u16 / 2);
            put_str(
                buf,
                area,
                x,
                top + 4,
                &value,
                Style::default()
                    .fg(theme::solid(theme::ACCENT))
                    .add_modifier(Modifier::BOLD),
            );
            let x = (slot * index as u16 + slot / 2).saturating_sub(stat.label.len() as u16 / 2);
            put_str(
                buf,
                area,
                x,
                top + 6,
                stat.label,
                Style::default().fg(theme::solid(theme::MUTED)),
            );
        }
    }

    fn render_projects(&self, area: Rect, buf: &mut Buffer, top: i32, now: Instant) {
        // Filter buttons; exactly one active.
        let mut x = 4u16;
        for (index, category) in self.filter.categories().iter().enumerate() {
            let label = format!("[{}] {}", index + 1, category);
            let style = if index == self.filter.active() {
                Style::default()
                    .fg(theme::solid(theme::ACCENT))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::solid(theme::MUTED))
            };
            put_str(buf, area, x, top + 3, &label, style);
            x += label.len() as u16 + 3;
        }

        // Cards in a 3-wide grid, entering with the fade-in-up style.
        let recently_changed = self
            .filter_changed_at
            .map(|at| now.duration_since(at) < Duration::from_millis(500))
            .unwrap_or(false);
        let slot = area.width / 3;
        let mut shown = 0usize;
        for (index, project) in PROJECTS_LIST.iter().enumerate() {
            let state = self.filter.card_state(project.category, recently_changed);
            if state == CardState::Hidden {
                continue;
            }
            let Some((style, rise)) = self.reveal_style(
                card_id(index),
                now,
                Style::default().fg(theme::solid(theme::TEXT)),
            ) else {
                shown += 1;
                continue;
            };
            let style = if state == CardState::Entering {
                style.add_modifier(Modifier::ITALIC)
            } else {
                style
            };
            let col = (shown % 3) as u16;
            let row = (shown / 3) as i32;
            let y = top + 5 + row * 4 + rise;
            let x = slot * col + 3;
            put_str(buf, area, x, y, "┌──────────────────┐", style);
            let name = format!("│ {:<16} │", project.name);
            put_str(buf, area, x, y + 1, &name, style);
            let tag = format!("│ {:<16} │", project.category);
            put_str(
                buf,
                area,
                x,
                y + 2,
                &tag,
                style.add_modifier(Modifier::DIM),
            );
            put_str(buf, area, x, y + 3, "└──────────────────┘", style);
            shown += 1;
        }
    }

    fn render_process(&self, area: Rect, buf: &mut Buffer, top: i32, now: Instant) {
        let slot = area.width / PROCESS_STEPS.len() as u16;
        for (index, step) in PROCESS_STEPS.iter().enumerate() {
            let x = (slot * index as u16 + slot / 2).saturating_sub(step.len() as u16 / 2);
            put_str(
                buf,
                area,
                x,
                top + 4,
                step,
                Style::default().fg(theme::solid(theme::TEXT)),
            );
        }
        // Timeline fill runs under the steps once the section has been seen.
        let fraction = self.timeline.fraction(now);
        let width = area.width.saturating_sub(8) as f32;
        let filled = (width * fraction) as usize;
        if filled > 0 {
            let bar: String = "━".repeat(filled);
            put_str(
                buf,
                area,
                4,
                top + 6,
                &bar,
                Style::default().fg(theme::solid(theme::ACCENT)),
            );
        }
    }

    fn render_contact(&self, area: Rect, buf: &mut Buffer, top: i32, _now: Instant) {
        let fields = ["Name:    _________________", "Email:   _________________", "Message: _________________"];
        for (index, field) in fields.iter().enumerate() {
            put_centered(
                buf,
                area,
                top + 3 + index as i32 * 2,
                field,
                Style::default().fg(theme::solid(theme::TEXT)),
            );
        }

        let (label_style, spinner) = match self.form.phase() {
            FormPhase::Idle => (
                Style::default()
                    .fg(theme::solid(theme::ACCENT))
                    .add_modifier(Modifier::BOLD),
                "",
            ),
            FormPhase::Sending => (
                Style::default()
                    .fg(theme::solid(theme::MUTED))
                    .add_modifier(Modifier::DIM),
                "◐ ",
            ),
            FormPhase::Sent => (
                Style::default()
                    .fg(theme::solid(theme::GREEN))
                    .add_modifier(Modifier::BOLD),
                "",
            ),
        };
        let label = format!("{}[ {} ]", spinner, self.form.button_label());
        put_centered(buf, area, top + 10, &label, label_style);
        if self.form.phase() == FormPhase::Idle {
            put_centered(
                buf,
                area,
                top + 12,
                "press enter to send",
                Style::default()
                    .fg(theme::solid(theme::MUTED))
                    .add_modifier(Modifier::DIM),
            );
        }
    }

    fn render_chrome(&self, area: Rect, buf: &mut Buffer) {
        // Scroll progress across the very top.
        let progress = scroll_progress(self.scroll_rows, self.max_scroll());
        let filled = (progress * area.width as f32).round() as u16;
        for x in 0..filled.min(area.width) {
            let color = theme::gradient(x as f32 / area.width.max(1) as f32);
            put_str(
                buf,
                area,
                x,
                0,
                "▔",
                Style::default().fg(theme::solid(color)),
            );
        }

        // Navbar, condensing once scrolled past the cutoff.
        let scrolled = navbar_scrolled(self.scroll_rows * CELL_H);
        let brand_style = if scrolled {
            Style::default()
                .fg(theme::solid(theme::ACCENT))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme::solid(theme::TEXT))
                .add_modifier(Modifier::BOLD)
        };
        put_str(buf, area, 2, 1, "STARDECK ◆", brand_style);
        let links = "work · services · about · contact";
        let x = area.width.saturating_sub(links.len() as u16 + 2);
        put_str(
            buf,
            area,
            x,
            1,
            links,
            Style::default().fg(theme::solid(theme::MUTED)),
        );
        if scrolled {
            let rule: String = "─".repeat(area.width as usize);
            put_str(
                buf,
                area,
                0,
                2,
                &rule,
                Style::default()
                    .fg(theme::solid(theme::MUTED))
                    .add_modifier(Modifier::DIM),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_layout_is_contiguous() {
        let page = PortfolioPage::new(80, 24, Instant::now());
        assert_eq!(page.section_top(HERO), 0.0);
        assert_eq!(page.section_top(STATS), 18.0);
        assert_eq!(page.section_top(CONTACT), 55.0);
        assert_eq!(page.total_rows(), 69.0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let start = Instant::now();
        let mut page = PortfolioPage::new(80, 24, start);
        page.scroll_by(-10.0);
        assert_eq!(page.scroll_rows, 0.0);
        page.scroll_by(1000.0);
        assert_eq!(page.scroll_rows, page.max_scroll());
    }

    #[test]
    fn test_counters_fire_once_when_stats_scroll_in() {
        let start = Instant::now();
        let mut page = PortfolioPage::new(80, 24, start);

        // Stats section off-screen: nothing runs.
        page.tick(start);
        assert!(page.counters.is_empty());

        // Scroll the stats section into view.
        page.scroll_by(18.0);
        let visible = start + Duration::from_millis(100);
        page.tick(visible);
        assert_eq!(page.counters.len(), STATS_LIST.len());

        let done = visible + Duration::from_millis(2000);
        assert_eq!(page.counters[&0].text_at(done), "1.2M");
        assert_eq!(page.counters[&1].text_at(done), "15K");

        // Scrolling away and back must not restart them.
        page.scroll_by(-18.0);
        page.tick(done);
        page.scroll_by(18.0);
        page.tick(done + Duration::from_millis(100));
        assert!(page.counters[&0].is_done(done + Duration::from_millis(100)));
    }

    #[test]
    fn test_filter_keys_select_category() {
        let start = Instant::now();
        let mut page = PortfolioPage::new(80, 24, start);
        page.handle_key(KeyEvent::from(KeyCode::Char('2')), start);
        assert_eq!(page.filter.active_category(), "web");
        assert!(page.filter_changed_at.is_some());
    }

    #[test]
    fn test_form_submits_only_when_contact_visible() {
        let start = Instant::now();
        let mut page = PortfolioPage::new(80, 24, start);

        page.handle_key(KeyEvent::from(KeyCode::Enter), start);
        assert_eq!(page.form.phase(), FormPhase::Idle);

        page.handle_key(KeyEvent::from(KeyCode::End), start);
        // Let the smooth scroll land.
        let mut now = start;
        for _ in 0..120 {
            now += Duration::from_millis(16);
            page.tick(now);
        }
        assert!(page.section_visibility(CONTACT) > 0.0);
        page.handle_key(KeyEvent::from(KeyCode::Enter), now);
        assert_eq!(page.form.phase(), FormPhase::Sending);
    }

    #[test]
    fn test_hero_reveals_immediately_at_top() {
        let start = Instant::now();
        let mut page = PortfolioPage::new(80, 24, start);
        page.tick(start);
        assert!(page.reveals.has_fired(header_id(HERO)));
        // Contact section is far below the fold.
        assert!(!page.reveals.has_fired(header_id(CONTACT)));
    }
}
