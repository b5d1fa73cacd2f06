#![allow(dead_code)]

pub mod config;
pub mod ui;

// Re-export the engine for demos and tests.
pub use stardeck_core::{
    counter, deck, effects, particles, reveal, surface, tuning, utils, CounterAnimation, Deck,
    ParticleField, RevealObserver, StardeckError, StardeckResult,
};
pub use ui::canvas::BrailleCanvas;
pub use ui::tui_app::{PageKind, TuiApp};
