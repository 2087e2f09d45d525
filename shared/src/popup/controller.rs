use super::types::{Effect, PopupEvent, PopupPhase, PopupState, SlideStyle, TimerKind};
use super::{should_present, PopupError};
use crate::config::PopupConfig;
use crate::session_flags::SessionFlags;
use crate::storage::SessionStore;
use chrono::{DateTime, Utc};

/// Drives the welcome popup from page load to dismissal.
///
/// `Hidden` -> (presentation delay) -> `Presenting` -> (close, backdrop click,
/// Escape or CTA) -> `Dismissing` -> (close transition) -> `Dismissed`.
///
/// All input arrives through [`dispatch`](Self::dispatch); the returned
/// effects are timer operations for the host to carry out. Inputs that do not
/// apply to the current phase, including stale timer callbacks, are ignored.
pub struct WelcomePopupController<S> {
    config: PopupConfig,
    flags: SessionFlags<S>,
    slide_count: usize,
    phase: PopupPhase,
    evaluated: bool,
}

impl<S: SessionStore> WelcomePopupController<S> {
    pub fn new(
        config: PopupConfig,
        flags: SessionFlags<S>,
        slide_count: usize,
    ) -> Result<Self, PopupError> {
        if slide_count == 0 {
            return Err(PopupError::EmptySlideSet);
        }
        Ok(Self {
            config,
            flags,
            slide_count,
            phase: PopupPhase::Hidden { scheduled: false },
            evaluated: false,
        })
    }

    pub fn phase(&self) -> &PopupPhase {
        &self.phase
    }

    /// State of the mounted popup, including while it animates closed.
    pub fn state(&self) -> Option<&PopupState> {
        match &self.phase {
            PopupPhase::Presenting(state) | PopupPhase::Dismissing(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_presenting(&self) -> bool {
        matches!(self.phase, PopupPhase::Presenting(_))
    }

    pub fn flags(&self) -> &SessionFlags<S> {
        &self.flags
    }

    pub fn dispatch(&mut self, event: PopupEvent) -> Vec<Effect> {
        match event {
            PopupEvent::PageLoaded { now } => self.on_page_loaded(now),
            PopupEvent::Timer(timer) => self.on_timer(timer),
            PopupEvent::IndicatorClicked(index) | PopupEvent::NextClicked(index) => {
                self.navigate(index)
            }
            PopupEvent::HoverStart => self.pause_autoplay(),
            PopupEvent::HoverEnd => self.start_autoplay(),
            PopupEvent::OverlayClicked { on_backdrop: false } => Vec::new(),
            PopupEvent::OverlayClicked { on_backdrop: true }
            | PopupEvent::CloseClicked
            | PopupEvent::EscapePressed
            | PopupEvent::CallToAction => self.dismiss(),
        }
    }

    /// Move to `index`: the current slide starts leaving, `index` becomes
    /// current right away and turns active once the slide transition fires.
    ///
    /// Out-of-range indices are rejected and leave the state untouched.
    pub fn go_to_slide(&mut self, index: usize) -> Result<Vec<Effect>, PopupError> {
        let delay = self.config.slide_transition();
        let PopupPhase::Presenting(state) = &mut self.phase else {
            return Err(PopupError::NotPresenting);
        };
        if index >= state.slide_count() {
            return Err(PopupError::SlideOutOfRange {
                index,
                count: state.slide_count(),
            });
        }

        let previous = state.current_slide;
        state.slides[previous] = SlideStyle::Leaving;
        state.current_slide = index;

        Ok(vec![Effect::Schedule {
            timer: TimerKind::SlideTransition,
            after: delay,
        }])
    }

    /// (Re)start autoplay. Always cancels the previous schedule first, so at
    /// most one autoplay timer is ever live.
    pub fn start_autoplay(&mut self) -> Vec<Effect> {
        let every = self.config.autoplay_interval();
        let PopupPhase::Presenting(state) = &mut self.phase else {
            return Vec::new();
        };
        state.autoplay_active = true;
        vec![
            Effect::Cancel(TimerKind::Autoplay),
            Effect::Repeat {
                timer: TimerKind::Autoplay,
                every,
            },
        ]
    }

    pub fn pause_autoplay(&mut self) -> Vec<Effect> {
        match &mut self.phase {
            PopupPhase::Presenting(state) if state.autoplay_active => {
                state.autoplay_active = false;
                vec![Effect::Cancel(TimerKind::Autoplay)]
            }
            _ => Vec::new(),
        }
    }

    /// Begin closing. Persists the shown flag; a no-op unless presenting.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        let mut state = match std::mem::replace(&mut self.phase, PopupPhase::Dismissed) {
            PopupPhase::Presenting(state) => state,
            other => {
                self.phase = other;
                return Vec::new();
            }
        };

        log::info!("Welcome popup dismissed on slide {}", state.current_slide);
        state.autoplay_active = false;
        state.overlay_active = false;
        self.flags.mark_popup_shown();
        self.phase = PopupPhase::Dismissing(state);

        vec![
            Effect::Cancel(TimerKind::Autoplay),
            Effect::Cancel(TimerKind::Settle),
            Effect::Cancel(TimerKind::SlideTransition),
            Effect::Schedule {
                timer: TimerKind::CloseTransition,
                after: self.config.close_transition(),
            },
        ]
    }

    fn on_page_loaded(&mut self, now: DateTime<Utc>) -> Vec<Effect> {
        if self.evaluated {
            return Vec::new();
        }
        self.evaluated = true;

        if !should_present(&self.flags, now, &self.config) {
            log::debug!("Welcome popup not eligible this page load");
            return Vec::new();
        }

        self.phase = PopupPhase::Hidden { scheduled: true };
        vec![Effect::Schedule {
            timer: TimerKind::Present,
            after: self.config.presentation_delay(),
        }]
    }

    fn on_timer(&mut self, timer: TimerKind) -> Vec<Effect> {
        match (timer, &mut self.phase) {
            (TimerKind::Present, PopupPhase::Hidden { scheduled: true }) => self.mount(),
            (TimerKind::Settle, PopupPhase::Presenting(state)) => {
                state.overlay_active = true;
                Vec::new()
            }
            (TimerKind::SlideTransition, PopupPhase::Presenting(state)) => {
                let current = state.current_slide;
                for (index, style) in state.slides.iter_mut().enumerate() {
                    *style = if index == current {
                        SlideStyle::Active
                    } else {
                        SlideStyle::Idle
                    };
                }
                Vec::new()
            }
            (TimerKind::Autoplay, PopupPhase::Presenting(state)) if state.autoplay_active => {
                let next = (state.current_slide + 1) % state.slide_count();
                self.go_to_slide(next).unwrap_or_default()
            }
            (TimerKind::CloseTransition, PopupPhase::Dismissing(_)) => {
                self.phase = PopupPhase::Dismissed;
                Vec::new()
            }
            (timer, phase) => {
                log::debug!("Ignoring stale {:?} timer in {:?}", timer, phase);
                Vec::new()
            }
        }
    }

    fn mount(&mut self) -> Vec<Effect> {
        log::debug!("Presenting welcome popup");
        self.phase = PopupPhase::Presenting(PopupState::mounted(self.slide_count));

        let mut effects = self.start_autoplay();
        effects.push(Effect::Schedule {
            timer: TimerKind::Settle,
            after: self.config.settle_delay(),
        });
        effects
    }

    fn navigate(&mut self, index: usize) -> Vec<Effect> {
        if !self.is_presenting() {
            return Vec::new();
        }
        match self.go_to_slide(index) {
            Ok(mut effects) => {
                effects.extend(self.start_autoplay());
                effects
            }
            Err(e) => {
                log::warn!("Rejected popup navigation: {}", e);
                Vec::new()
            }
        }
    }
}
