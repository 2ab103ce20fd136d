//! Single-slot transient alert banner.
//!
//! At most one alert lives at a time. Showing a new one replaces the slot
//! atomically: the previous alert's pending outro is abandoned, never
//! played. The host loop drives expiry by calling [`AlertNotifier::tick`].

use std::time::{Duration, Instant};

use crate::transitions::{Region, Transition, TransitionDriver};

/// How long an alert stays up before its outro plays.
pub const ALERT_HOLD: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub struct AlertNotifier {
    text: String,
    deadline: Option<Instant>,
    hold: Duration,
}

impl Default for AlertNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertNotifier {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            deadline: None,
            hold: ALERT_HOLD,
        }
    }

    /// Text currently published to the banner.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while an alert is up and its outro has not played yet.
    pub fn active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Publish `text` and play the intro, replacing any live alert. The
    /// replaced alert's remaining wait and outro are dropped entirely.
    pub fn show(&mut self, text: impl Into<String>, transitions: &mut dyn TransitionDriver) {
        self.show_at(text, transitions, Instant::now());
    }

    /// Play the outro and clear the slot once the hold deadline passes.
    pub fn tick(&mut self, transitions: &mut dyn TransitionDriver) {
        self.tick_at(transitions, Instant::now());
    }

    fn show_at(
        &mut self,
        text: impl Into<String>,
        transitions: &mut dyn TransitionDriver,
        now: Instant,
    ) {
        if self.deadline.is_some() {
            tracing::debug!(text = %self.text, "alert replaced before its outro");
        }
        self.text = text.into();
        self.deadline = Some(now + self.hold);
        transitions.play(Region::Alert, Transition::AlertIntro);
    }

    fn tick_at(&mut self, transitions: &mut dyn TransitionDriver, now: Instant) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.deadline = None;
        transitions.play(Region::Alert, Transition::AlertOutro);
    }
}
