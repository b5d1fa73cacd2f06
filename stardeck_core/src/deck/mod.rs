//! Slide deck navigation.
//!
//! One [`Deck`] instance per page owns the navigation and autoplay state; the
//! [`ScrollView`] tracks the viewport during free scrolling and reports the
//! dominant slide back; the [`SwipeTracker`] turns pointer drags into
//! navigation intents. No module-level globals — everything is threaded
//! through the event loop explicitly.

pub mod navigator;
pub mod scroll;
pub mod swipe;

pub use navigator::{Deck, NavigationState, SwapStyle};
pub use scroll::ScrollView;
pub use swipe::{SwipeAction, SwipeTracker};
