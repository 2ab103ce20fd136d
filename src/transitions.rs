//! View-transition seam.
//!
//! The console never animates anything itself; it only names which region
//! should play which transition. Implementations must stop any in-flight
//! transition on the region before starting the new one, so a request is
//! always a preemption, never a queue.

use std::fmt;

/// UI regions that can play a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The whole main window chrome.
    Main,
    /// One of the main sub-panel pages.
    Page(usize),
    /// The overview walkthrough overlay.
    Overview,
    /// The drone selection overlay.
    Selection,
    /// The single-slot alert banner.
    Alert,
}

/// Transition names the console requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Intro,
    Outro,
    PageIntro,
    PageOutro,
    SeparateIn,
    SeparateOut,
    FadeIn,
    FadeOut,
    AlertIntro,
    AlertOutro,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Transition::Intro => "intro",
            Transition::Outro => "outro",
            Transition::PageIntro => "page-intro",
            Transition::PageOutro => "page-outro",
            Transition::SeparateIn => "separate-in",
            Transition::SeparateOut => "separate-out",
            Transition::FadeIn => "fade-in",
            Transition::FadeOut => "fade-out",
            Transition::AlertIntro => "alert-intro",
            Transition::AlertOutro => "alert-outro",
        };
        write!(f, "{}", s)
    }
}

/// Fire-and-forget transition playback.
pub trait TransitionDriver {
    /// Play `transition` on `region`, preempting whatever that region was
    /// already playing.
    fn play(&mut self, region: Region, transition: Transition);
}

/// Driver that drops every request; useful for headless embeddings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTransitions;

impl TransitionDriver for NullTransitions {
    fn play(&mut self, _region: Region, _transition: Transition) {}
}
