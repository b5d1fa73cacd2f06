//! Simulated contact-form submission.
//!
//! There is no network: submitting shows a sending state for two seconds,
//! a success state for three, then returns to idle. Submits while busy are
//! ignored.

use std::time::{Duration, Instant};

const SENDING_DURATION: Duration = Duration::from_millis(2000);
const SUCCESS_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Sent,
}

enum State {
    Idle,
    Sending { until: Instant },
    Sent { until: Instant },
}

pub struct ContactForm {
    state: State,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Press the submit button. Only accepted while idle.
    pub fn submit(&mut self, now: Instant) -> bool {
        match self.state {
            State::Idle => {
                self.state = State::Sending {
                    until: now + SENDING_DURATION,
                };
                true
            }
            _ => false,
        }
    }

    /// Advance due transitions.
    pub fn tick(&mut self, now: Instant) {
        loop {
            match self.state {
                State::Sending { until } if now >= until => {
                    self.state = State::Sent {
                        until: until + SUCCESS_DURATION,
                    };
                }
                State::Sent { until } if now >= until => {
                    self.state = State::Idle;
                }
                _ => break,
            }
        }
    }

    pub fn phase(&self) -> FormPhase {
        match self.state {
            State::Idle => FormPhase::Idle,
            State::Sending { .. } => FormPhase::Sending,
            State::Sent { .. } => FormPhase::Sent,
        }
    }

    /// Submit-button label for the current phase.
    pub fn button_label(&self) -> &'static str {
        match self.state {
            State::Idle => "Send Message",
            State::Sending { .. } => "Sending...",
            State::Sent { .. } => "✓ Message Sent!",
        }
    }

    /// Whether the button accepts input right now.
    pub fn button_enabled(&self) -> bool {
        matches!(self.state, State::Idle)
    }
}
