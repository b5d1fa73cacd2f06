//! Decorative event-driven glue shared by the two pages.

pub mod filter;
pub mod form;
pub mod glow;
pub mod hint;
pub mod scroll_effects;
pub mod timeline;
pub mod typewriter;

pub use filter::ProjectFilter;
pub use form::{ContactForm, FormPhase};
pub use glow::GlowFollower;
pub use hint::KeyboardHint;
pub use timeline::TimelineProgress;
pub use typewriter::Typewriter;
