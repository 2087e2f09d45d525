//! WelcomePopup component - once-per-session onboarding carousel

use crate::storage::BrowserSessionStore;
use crate::utils;
use chrono::Utc;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use shared::popup::slides::{Slide, SlideAction, WELCOME_SLIDES};
use shared::{
    Effect, PopupConfig, PopupEvent, PopupState, SessionFlags, SlideStyle, TimerKind,
    WelcomePopupController,
};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WelcomePopupProps {
    pub config: PopupConfig,
}

/// Live gloo timer. Dropping the handle cancels it.
enum TimerHandle {
    #[allow(dead_code)]
    Once(Timeout),
    #[allow(dead_code)]
    Repeating(Interval),
}

/// Hosts a [`WelcomePopupController`]: forwards DOM events to it, runs the
/// timers it asks for and renders its state.
pub struct WelcomePopup {
    controller: Option<WelcomePopupController<BrowserSessionStore>>,
    timers: HashMap<TimerKind, TimerHandle>,
    #[allow(dead_code)]
    escape_listener: Option<EventListener>,
}

impl Component for WelcomePopup {
    type Message = PopupEvent;
    type Properties = WelcomePopupProps;

    fn create(ctx: &Context<Self>) -> Self {
        let flags = SessionFlags::new(BrowserSessionStore::open());
        let controller = match WelcomePopupController::new(
            ctx.props().config.clone(),
            flags,
            WELCOME_SLIDES.len(),
        ) {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::error!("Welcome popup disabled: {}", e);
                None
            }
        };

        let escape_listener = web_sys::window().and_then(|w| w.document()).map(|document| {
            let link = ctx.link().clone();
            EventListener::new(&document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|e| e.key() == "Escape");
                if is_escape {
                    link.send_message(PopupEvent::EscapePressed);
                }
            })
        });

        let mut popup = Self {
            controller,
            timers: HashMap::new(),
            escape_listener,
        };
        popup.handle(ctx, PopupEvent::PageLoaded { now: Utc::now() });
        popup
    }

    fn update(&mut self, ctx: &Context<Self>, event: Self::Message) -> bool {
        self.handle(ctx, event);
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timers.clear();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(state) = self.controller.as_ref().and_then(|c| c.state()) else {
            return html! {};
        };
        let link = ctx.link();

        let overlay_class = classes!(
            "welcome-popup-overlay",
            state.overlay_active().then_some("active")
        );
        let on_overlay_click = link.callback(|e: MouseEvent| PopupEvent::OverlayClicked {
            on_backdrop: is_backdrop_click(&e),
        });

        html! {
            <div class={overlay_class} id="welcomePopup" onclick={on_overlay_click}>
                <div
                    class="welcome-popup"
                    onmouseenter={link.callback(|_| PopupEvent::HoverStart)}
                    onmouseleave={link.callback(|_| PopupEvent::HoverEnd)}
                >
                    <button
                        class="popup-close"
                        id="popupClose"
                        aria-label="Close"
                        onclick={link.callback(|_| PopupEvent::CloseClicked)}
                    >
                        { "×" }
                    </button>
                    <div class="popup-slider">
                        { for WELCOME_SLIDES.iter().enumerate().map(|(index, slide)| {
                            self.view_slide(ctx, state, index, slide)
                        }) }
                    </div>
                    <div class="popup-indicators">
                        { for (0..state.slide_count()).map(|index| {
                            let dot_class = classes!(
                                "popup-dot",
                                state.is_indicator_active(index).then_some("active")
                            );
                            html! {
                                <div
                                    class={dot_class}
                                    data-slide={index.to_string()}
                                    onclick={link.callback(move |_| PopupEvent::IndicatorClicked(index))}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        }
    }
}

impl WelcomePopup {
    fn handle(&mut self, ctx: &Context<Self>, event: PopupEvent) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let effects = controller.dispatch(event);
        self.apply(ctx, effects);
    }

    /// Carry out timer effects. Inserting a handle drops (cancels) any
    /// previous handle of the same kind.
    fn apply(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { timer, after } => {
                    let link = ctx.link().clone();
                    let handle = Timeout::new(utils::timer_millis(after), move || {
                        link.send_message(PopupEvent::Timer(timer));
                    });
                    self.timers.insert(timer, TimerHandle::Once(handle));
                }
                Effect::Repeat { timer, every } => {
                    let link = ctx.link().clone();
                    let handle = Interval::new(utils::timer_millis(every), move || {
                        link.send_message(PopupEvent::Timer(timer));
                    });
                    self.timers.insert(timer, TimerHandle::Repeating(handle));
                }
                Effect::Cancel(timer) => {
                    self.timers.remove(&timer);
                }
            }
        }
    }

    fn view_slide(
        &self,
        ctx: &Context<Self>,
        state: &PopupState,
        index: usize,
        slide: &Slide,
    ) -> Html {
        let link = ctx.link();
        let class = classes!("popup-slide", slide_class(state.slide_style(index)));

        let action = match slide.action {
            SlideAction::Next { target, label } => html! {
                <button
                    class="popup-next-btn"
                    data-next={target.to_string()}
                    onclick={link.callback(move |_| PopupEvent::NextClicked(target))}
                >
                    { label }
                </button>
            },
            // Navigation proceeds normally; the popup only records the dismissal
            SlideAction::CallToAction { href, label } => html! {
                <a
                    href={href}
                    class="popup-cta"
                    onclick={link.callback(|_| PopupEvent::CallToAction)}
                >
                    { label }
                </a>
            },
        };

        html! {
            <div class={class}>
                <div class="slide-content">
                    <div class="icon">{ slide.icon }</div>
                    <h2>{ slide.title }</h2>
                    <p>{ slide.body }</p>
                </div>
                { action }
            </div>
        }
    }
}

/// CSS modifier for a slide.
fn slide_class(style: Option<SlideStyle>) -> Option<&'static str> {
    match style? {
        SlideStyle::Active => Some("active"),
        SlideStyle::Leaving => Some("prev"),
        SlideStyle::Idle => None,
    }
}

/// True when the click landed on the overlay itself rather than bubbling up
/// from the popup content.
fn is_backdrop_click(e: &MouseEvent) -> bool {
    match (e.target(), e.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_classes() {
        assert_eq!(slide_class(Some(SlideStyle::Active)), Some("active"));
        assert_eq!(slide_class(Some(SlideStyle::Leaving)), Some("prev"));
        assert_eq!(slide_class(Some(SlideStyle::Idle)), None);
        assert_eq!(slide_class(None), None);
    }
}
