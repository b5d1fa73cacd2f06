#![allow(dead_code)]

//! stardeck presentation engine.
//!
//! Everything with behavior lives here: slide navigation and autoplay, the
//! particle field, reveal observation, counters and the decorative effects.
//! Drawing goes through [`surface::Surface`]; time comes in as explicit
//! `Instant`s so every component runs in tests without sleeping. The terminal
//! front-end lives in the `stardeck_cli` crate.

pub mod counter;
pub mod deck;
pub mod effects;
pub mod particles;
pub mod reveal;
pub mod surface;
pub mod tuning;
pub mod utils;

pub use counter::CounterAnimation;
pub use deck::{Deck, NavigationState, ScrollView, SwipeAction, SwipeTracker};
pub use particles::ParticleField;
pub use reveal::RevealObserver;
pub use surface::{Surface, Tint};
pub use tuning::{CounterStyle, PageTuning};
pub use utils::error::{StardeckError, StardeckResult};
