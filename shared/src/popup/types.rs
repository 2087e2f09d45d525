use chrono::{DateTime, Utc};
use std::time::Duration;

/// Timers the popup needs. The host keeps at most one live handle per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Delay between page load and mounting
    Present,
    /// Delay between mounting and activating the overlay
    Settle,
    /// Delay between leaving a slide and activating the next
    SlideTransition,
    /// Repeating autoplay advance
    Autoplay,
    /// Closing animation before unmount
    CloseTransition,
}

/// Work the controller asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `timer` once after `after`, replacing any live handle of that kind
    Schedule { timer: TimerKind, after: Duration },
    /// Fire `timer` every `every`, replacing any live handle of that kind
    Repeat { timer: TimerKind, every: Duration },
    /// Drop the live handle of this kind, if any
    Cancel(TimerKind),
}

/// Every input the popup reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    /// Page finished loading on an eligible route
    PageLoaded { now: DateTime<Utc> },
    /// A scheduled timer fired
    Timer(TimerKind),
    /// Indicator dot for a slide was clicked
    IndicatorClicked(usize),
    /// A slide's "Next" button was clicked (carries its target slide)
    NextClicked(usize),
    /// Pointer entered the popup body
    HoverStart,
    /// Pointer left the popup body
    HoverEnd,
    CloseClicked,
    /// Click on the overlay; `on_backdrop` is false when the click landed on
    /// the popup content and only bubbled up
    OverlayClicked { on_backdrop: bool },
    EscapePressed,
    /// The final slide's call-to-action link was followed
    CallToAction,
}

/// Visual state of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStyle {
    Idle,
    /// Just left; carries the transitional "prev" styling
    Leaving,
    Active,
}

/// State of a mounted popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    pub(crate) current_slide: usize,
    pub(crate) slides: Vec<SlideStyle>,
    pub(crate) autoplay_active: bool,
    pub(crate) visible: bool,
    pub(crate) overlay_active: bool,
}

impl PopupState {
    pub(crate) fn mounted(slide_count: usize) -> Self {
        let mut slides = vec![SlideStyle::Idle; slide_count];
        slides[0] = SlideStyle::Active;
        Self {
            current_slide: 0,
            slides,
            autoplay_active: false,
            visible: true,
            overlay_active: false,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_style(&self, index: usize) -> Option<SlideStyle> {
        self.slides.get(index).copied()
    }

    /// Indicators follow the current slide immediately.
    pub fn is_indicator_active(&self, index: usize) -> bool {
        index == self.current_slide
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }
}

/// Coarse popup lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupPhase {
    /// Nothing mounted. `scheduled` is set once the gate passed and the
    /// presentation delay is running.
    Hidden { scheduled: bool },
    Presenting(PopupState),
    /// Closing animation running; the shown flag is already persisted
    Dismissing(PopupState),
    /// Terminal for this page
    Dismissed,
}
