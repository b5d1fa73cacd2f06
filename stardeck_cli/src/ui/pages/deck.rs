//! The pitch-deck page: twelve full-viewport slides stacked vertically over a
//! connected particle field, with keyboard/drag navigation and autoplay.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use stardeck_core::counter::CounterAnimation;
use stardeck_core::deck::{Deck, ScrollView, SwipeAction, SwipeTracker};
use stardeck_core::effects::{GlowFollower, KeyboardHint, TimelineProgress};
use stardeck_core::particles::ParticleField;
use stardeck_core::reveal::RevealObserver;
use stardeck_core::surface::Surface;
use stardeck_core::tuning::{self, CounterStyle};

use super::{put_centered, put_str};
use crate::ui::canvas::{BrailleCanvas, PIXEL_SCALE};
use crate::ui::theme;

/// Reveal fade-in length once an element's stagger delay elapses.
const REVEAL_FADE: Duration = Duration::from_millis(600);

/// Startup delay before the first slide's reveals fire.
const FIRST_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Virtual units per terminal cell, for pointer coordinates.
const CELL_W: f32 = 2.0 * PIXEL_SCALE;
const CELL_H: f32 = 4.0 * PIXEL_SCALE;

/// Free-scroll step per wheel notch, in viewport units.
const WHEEL_STEP: f32 = 0.12;

struct Stat {
    label: &'static str,
    value: f64,
    large_hint: bool,
    suffix: &'static str,
}

enum SlideBody {
    Hero {
        tagline: &'static str,
    },
    Bullets {
        items: &'static [&'static str],
    },
    Stats {
        stats: &'static [Stat],
    },
    Process {
        steps: &'static [&'static str],
    },
}

struct Slide {
    kicker: &'static str,
    heading: &'static str,
    body: SlideBody,
}

static SLIDES: &[Slide] = &[
    Slide {
        kicker: "STARDECK STUDIO",
        heading: "Launches that feel like premieres",
        body: SlideBody::Hero {
            tagline: "Cinematic product stories for ambitious teams",
        },
    },
    Slide {
        kicker: "THE PROBLEM",
        heading: "Great products ship with forgettable stories",
        body: SlideBody::Bullets {
            items: &[
                "Launch pages read like spec sheets",
                "Attention is gone in the first eight seconds",
                "Teams rebuild the same deck for every audience",
            ],
        },
    },
    Slide {
        kicker: "THE SOLUTION",
        heading: "One narrative, staged everywhere",
        body: SlideBody::Bullets {
            items: &[
                "A single story system for web, deck and demo",
                "Motion and pacing tuned to the message",
                "Hand-off your team can actually maintain",
            ],
        },
    },
    Slide {
        kicker: "THE PRODUCT",
        heading: "A presentation engine, not a template",
        body: SlideBody::Bullets {
            items: &[
                "Slides, reveals and counters driven by one state machine",
                "Decorative layers that never fight the content",
                "Keyboard, touch and autoplay out of the box",
            ],
        },
    },
    Slide {
        kicker: "THE MARKET",
        heading: "Numbers that carry the room",
        body: SlideBody::Stats {
            stats: &[
                Stat {
                    label: "impressions delivered",
                    value: 2_500_000.0,
                    large_hint: true,
                    suffix: "M",
                },
                Stat {
                    label: "average engagement rating",
                    value: 4.5,
                    large_hint: false,
                    suffix: "",
                },
                Stat {
                    label: "launches shipped",
                    value: 1_234.0,
                    large_hint: false,
                    suffix: "",
                },
            ],
        },
    },
    Slide {
        kicker: "TRACTION",
        heading: "Quarter over quarter, the story compounds",
        body: SlideBody::Stats {
            stats: &[
                Stat {
                    label: "returning clients",
                    value: 87.0,
                    large_hint: false,
                    suffix: "%",
                },
                Stat {
                    label: "industries served",
                    value: 23.0,
                    large_hint: false,
                    suffix: "",
                },
                Stat {
                    label: "revenue influenced",
                    value: 12_000_000.0,
                    large_hint: true,
                    suffix: "M",
                },
            ],
        },
    },
    Slide {
        kicker: "HOW WE WORK",
        heading: "Four weeks from brief to curtain call",
        body: SlideBody::Process {
            steps: &["Discover", "Script", "Stage", "Launch"],
        },
    },
    Slide {
        kicker: "THE TEAM",
        heading: "Directors, not decorators",
        body: SlideBody::Bullets {
            items: &[
                "Narrative leads from film and games",
                "Engineers who sweat the sixteenth millisecond",
                "One crew per engagement, start to finish",
            ],
        },
    },
    Slide {
        kicker: "PROOF",
        heading: "What clients say when the lights come up",
        body: SlideBody::Bullets {
            items: &[
                "\"The launch outperformed our paid channel.\"",
                "\"First deck our CEO presented unchanged.\"",
                "\"It felt like a trailer, not a meeting.\"",
            ],
        },
    },
    Slide {
        kicker: "PRICING",
        heading: "Three ways to start",
        body: SlideBody::Bullets {
            items: &[
                "Short — one launch moment, two weeks",
                "Feature — full story system, four weeks",
                "Season — embedded crew, quarterly",
            ],
        },
    },
    Slide {
        kicker: "ROADMAP",
        heading: "Where the stage goes next",
        body: SlideBody::Bullets {
            items: &[
                "Self-serve staging for returning teams",
                "Live-audience reactions wired into pacing",
                "A library of opening scenes worth stealing",
            ],
        },
    },
    Slide {
        kicker: "CURTAIN",
        heading: "Let's put your product on stage",
        body: SlideBody::Hero {
            tagline: "hello@stardeck.studio",
        },
    },
];

fn element_count(slide: &Slide) -> usize {
    // Element 0 is the heading (with its kicker); the rest follow in order.
    1 + match &slide.body {
        SlideBody::Hero { .. } => 1,
        SlideBody::Bullets { items } => items.len(),
        SlideBody::Stats { stats } => stats.len(),
        SlideBody::Process { steps } => steps.len(),
    }
}

pub struct DeckPage {
    deck: Deck,
    view: ScrollView,
    field: ParticleField,
    glow: GlowFollower,
    swipe: SwipeTracker,
    hint: KeyboardHint,
    timeline: TimelineProgress,
    /// One observer per slide; element stagger runs within the slide.
    reveals: Vec<RevealObserver>,
    counters: HashMap<(usize, usize), CounterAnimation>,
    canvas: BrailleCanvas,
    start: Instant,
    cols: u16,
    rows: u16,
}

impl DeckPage {
    pub fn new(cols: u16, rows: u16, autoplay: bool, start: Instant) -> Self {
        let canvas = BrailleCanvas::new(cols, rows);
        let (width, height) = canvas.size();
        let field = ParticleField::new(tuning::DECK.field, width, height);
        let mut deck = Deck::new(SLIDES.len());
        if autoplay {
            deck.toggle_autoplay(start);
        }
        let reveals = SLIDES
            .iter()
            .map(|slide| {
                let mut observer = RevealObserver::new(
                    tuning::DECK.reveal_threshold,
                    tuning::DECK.reveal_stagger,
                );
                for element in 0..element_count(slide) {
                    observer.observe(element);
                }
                // Hero taglines hold back longer than the computed stagger.
                if let SlideBody::Hero { .. } = slide.body {
                    observer.observe_with_delay(1, Duration::from_millis(400));
                }
                observer
            })
            .collect();

        Self {
            deck,
            view: ScrollView::new(SLIDES.len()),
            field,
            glow: GlowFollower::new(tuning::DECK.glow),
            swipe: SwipeTracker::default(),
            hint: KeyboardHint::new(start),
            timeline: TimelineProgress::new(),
            reveals,
            counters: HashMap::new(),
            canvas,
            start,
            cols,
            rows,
        }
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.canvas.resize(cols, rows);
        let (width, height) = self.canvas.size();
        self.field.resize(width, height);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Right | KeyCode::Down => {
                if self.deck.advance(now) {
                    self.view.animate_to_slide(self.deck.current(), now);
                }
            }
            KeyCode::Left | KeyCode::Up => {
                if self.deck.retreat(now) {
                    self.view.animate_to_slide(self.deck.current(), now);
                }
            }
            KeyCode::Char(' ') => {
                self.deck.toggle_autoplay(now);
            }
            KeyCode::Home => {
                if self.deck.go_to_slide(1, now) {
                    self.view.animate_to_slide(1, now);
                }
            }
            KeyCode::End => {
                let last = self.deck.total();
                if self.deck.go_to_slide(last, now) {
                    self.view.animate_to_slide(last, now);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        let vx = event.column as f32 * CELL_W;
        let vy = event.row as f32 * CELL_H;
        match event.kind {
            MouseEventKind::Moved => self.glow.pointer_moved(vx, vy),
            MouseEventKind::ScrollDown => self.view.scroll_by(WHEEL_STEP, now),
            MouseEventKind::ScrollUp => self.view.scroll_by(-WHEEL_STEP, now),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(slide) = self.indicator_at(event.column, event.row) {
                    if self.deck.go_to_slide(slide, now) {
                        self.view.animate_to_slide(slide, now);
                    }
                } else {
                    self.swipe.begin(vx, vy);
                    self.glow.pointer_moved(vx, vy);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.glow.pointer_moved(vx, vy),
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.end(vx, vy) {
                Some(SwipeAction::Advance) => {
                    if self.deck.advance(now) {
                        self.view.animate_to_slide(self.deck.current(), now);
                    }
                }
                Some(SwipeAction::Retreat) => {
                    if self.deck.retreat(now) {
                        self.view.animate_to_slide(self.deck.current(), now);
                    }
                }
                None => {}
            },
            _ => {}
        }
    }

    pub fn pointer_left(&mut self) {
        self.glow.pointer_left();
        self.swipe.cancel();
    }

    /// Which slide an indicator dot at this cell addresses, if any.
    fn indicator_at(&self, column: u16, row: u16) -> Option<usize> {
        if column + 2 != self.cols {
            return None;
        }
        let total = self.deck.total() as u16;
        let top = self.rows.saturating_sub(total) / 2;
        if row >= top && row < top + total {
            Some((row - top + 1) as usize)
        } else {
            None
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.view.settle(now);

        if let Some(target) = self.deck.poll_autoplay(now) {
            self.view.animate_to_slide(target, now);
        }

        // Reconcile to free scrolling. While a programmatic scroll is in
        // flight the watcher stays out of it.
        if !self.view.is_animating() {
            if let Some(dominant) = self.view.dominant(now) {
                self.deck.sync_from_scroll(dominant);
            }
        }

        if now.duration_since(self.start) < FIRST_REVEAL_DELAY {
            return;
        }

        if let Some(dominant) = self.view.dominant(now) {
            let index = dominant - 1;
            let slide = &SLIDES[index];
            let samples: Vec<(usize, f32)> =
                (0..element_count(slide)).map(|e| (e, 1.0)).collect();
            self.reveals[index].update(&samples, now);

            match &slide.body {
                SlideBody::Stats { stats } => {
                    for (si, stat) in stats.iter().enumerate() {
                        // Element ids start after the heading.
                        if self.reveals[index].has_fired(si + 1) {
                            self.counters.entry((index, si)).or_insert_with(|| {
                                CounterAnimation::new(
                                    CounterStyle::Deck,
                                    stat.value,
                                    stat.large_hint,
                                    now,
                                )
                            });
                        }
                    }
                }
                SlideBody::Process { .. } => self.timeline.trigger(now),
                _ => {}
            }
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
        self.render_slides(area, buf, now);
        self.render_chrome(area, buf, now);
    }

    fn render_slides(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let height = area.height as f32;
        let offset_rows = self.view.offset(now) * height;

        for (index, slide) in SLIDES.iter().enumerate() {
            let base = index as f32 * height - offset_rows;
            if base >= height || base + height <= 0.0 {
                continue;
            }
            let top = base.round() as i32;
            self.render_slide(index, slide, area, buf, top, now);
        }
    }

    fn element_style(&self, slide: usize, element: usize, now: Instant, base: Style) -> Option<(Style, i32)> {
        let fade = self.reveals[slide].fade_in(element, now, REVEAL_FADE);
        if fade <= 0.0 {
            return None;
        }
        let style = if fade >= 1.0 {
            base
        } else {
            base.add_modifier(Modifier::DIM)
        };
        // translateY analog: elements settle upward as they fade in.
        let rise = if fade < 0.5 { 1 } else { 0 };
        Some((style, rise))
    }

    fn render_slide(
        &self,
        index: usize,
        slide: &Slide,
        area: Rect,
        buf: &mut Buffer,
        top: i32,
        now: Instant,
    ) {
        let mid = top + area.height as i32 / 2;

        if let Some((style, rise)) = self.element_style(
            index,
            0,
            now,
            Style::default().fg(theme::solid(theme::ACCENT)),
        ) {
            put_centered(buf, area, mid - 5 + rise, slide.kicker, style);
            let heading_style = if style.add_modifier.contains(Modifier::DIM) {
                Style::default()
                    .fg(theme::solid(theme::TEXT))
                    .add_modifier(Modifier::DIM)
            } else {
                Style::default()
                    .fg(theme::solid(theme::TEXT))
                    .add_modifier(Modifier::BOLD)
            };
            put_centered(buf, area, mid - 3 + rise, slide.heading, heading_style);
        }

        match &slide.body {
            SlideBody::Hero { tagline } => {
                if let Some((style, rise)) = self.element_style(
                    index,
                    1,
                    now,
                    Style::default().fg(theme::solid(theme::MUTED)),
                ) {
                    put_centered(buf, area, mid + rise, tagline, style);
                }
            }
            SlideBody::Bullets { items } => {
                for (bi, item) in items.iter().enumerate() {
                    if let Some((style, rise)) = self.element_style(
                        index,
                        bi + 1,
                        now,
                        Style::default().fg(theme::solid(theme::TEXT)),
                    ) {
                        let line = format!("▸ {}", item);
                        put_centered(buf, area, mid + bi as i32 * 2 + rise, &line, style);
                    }
                }
            }
            SlideBody::Stats { stats } => {
                for (si, stat) in stats.iter().enumerate() {
                    if let Some((style, rise)) = self.element_style(
                        index,
                        si + 1,
                        now,
                        Style::default()
                            .fg(theme::solid(theme::ACCENT))
                            .add_modifier(Modifier::BOLD),
                    ) {
                        let value = self
                            .counters
                            .get(&(index, si))
                            .map(|counter| counter.text_at(now))
                            .unwrap_or_else(|| "0".to_string());
                        let line = format!("{}{}  {}", value, stat.suffix, stat.label);
                        put_centered(buf, area, mid + si as i32 * 2 + rise, &line, style);
                    }
                }
            }
            SlideBody::Process { steps } => {
                for (pi, step) in steps.iter().enumerate() {
                    if let Some((style, rise)) = self.element_style(
                        index,
                        pi + 1,
                        now,
                        Style::default().fg(theme::solid(theme::TEXT)),
                    ) {
                        let line = format!("{}. {}", pi + 1, step);
                        put_centered(buf, area, mid + pi as i32 * 2 + rise, &line, style);
                    }
                }
                // Timeline under the steps, filling once triggered.
                let fraction = self.timeline.fraction(now);
                if fraction > 0.0 {
                    let width = (area.width as f32 * 0.5) as usize;
                    let filled = (width as f32 * fraction).round() as usize;
                    let bar: String = "━".repeat(filled);
                    let x = (area.width as usize - width) as u16 / 2;
                    put_str(
                        buf,
                        area,
                        x,
                        mid + steps.len() as i32 * 2 + 1,
                        &bar,
                        Style::default().fg(theme::solid(theme::ACCENT)),
                    );
                }
            }
        }
    }

    fn render_chrome(&mut self, area: Rect, buf: &mut Buffer, now: Instant) {
        // Progress bar across the top, filled to current/total.
        let filled = (self.deck.progress_percent() / 100.0 * area.width as f32).round() as u16;
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

        // Indicator dots down the right edge, one per slide.
        let total = self.deck.total() as u16;
        let top = area.height.saturating_sub(total) / 2;
        for i in 0..total {
            let active = i as usize == self.deck.active_indicator();
            let (dot, style) = if active {
                ("●", Style::default().fg(theme::solid(theme::ACCENT)))
            } else {
                ("○", Style::default().fg(theme::solid(theme::MUTED)))
            };
            put_str(
                buf,
                area,
                area.width.saturating_sub(2),
                (top + i) as i32,
                dot,
                style,
            );
        }

        // Slide counter, bottom left, with its swap transition.
        let swap = self.deck.swap_style(now);
        let label = format!("{} / {:02}", swap.text, self.deck.total());
        let counter_style = if swap.opacity < 1.0 {
            Style::default()
                .fg(theme::solid(theme::TEXT))
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(theme::solid(theme::TEXT))
        };
        let row = area.height as i32 - 2 - if swap.rise > 0.5 { 1 } else { 0 };
        put_str(buf, area, 2, row, &label, counter_style);

        // Prev/next affordances, bottom right.
        let prev_style = if self.deck.prev_enabled() {
            Style::default().fg(theme::solid(theme::TEXT))
        } else {
            Style::default()
                .fg(theme::solid(theme::MUTED))
                .add_modifier(Modifier::DIM)
        };
        let next_style = if self.deck.next_enabled() {
            Style::default().fg(theme::solid(theme::TEXT))
        } else {
            Style::default()
                .fg(theme::solid(theme::MUTED))
                .add_modifier(Modifier::DIM)
        };
        let x = area.width.saturating_sub(16);
        put_str(buf, area, x, area.height as i32 - 2, "‹ prev", prev_style);
        put_str(
            buf,
            area,
            x + 8,
            area.height as i32 - 2,
            "next ›",
            next_style,
        );

        // Autoplay state, bottom center.
        let auto = if self.deck.autoplay_active() {
            ("■ auto", Style::default().fg(theme::solid(theme::ACCENT)))
        } else {
            ("▶ auto", Style::default().fg(theme::solid(theme::MUTED)))
        };
        put_centered(buf, area, area.height as i32 - 2, auto.0, auto.1);

        // Keyboard hint overlay until it fades away.
        if !self.hint.is_gone(now) {
            let opacity = self.hint.opacity(now);
            let style = Style::default().fg(theme::faded(theme::TEXT, opacity));
            put_centered(
                buf,
                area,
                area.height as i32 - 4,
                "← → navigate · space autoplay · f fullscreen · q quit",
                style,
            );
        }
    }
}

/// Paint the page background color across the whole area.
pub(crate) fn fill_background(area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].set_bg(theme::solid(theme::BG));
        }
    }
}
