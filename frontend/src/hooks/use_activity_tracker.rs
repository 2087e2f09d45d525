//! Hook that feeds page-wide user activity into the session tracker.

use crate::storage::BrowserSessionStore;
use chrono::Utc;
use gloo::events::EventListener;
use shared::{ActivityEvent, PopupConfig, SessionActivityTracker, SessionFlags};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::VisibilityState;
use yew::prelude::*;

type SharedTracker = Rc<RefCell<SessionActivityTracker<BrowserSessionStore>>>;

/// Keep `lastActiveAt` fresh for as long as the calling component is mounted.
///
/// Records the page load once, then listens for the tab becoming visible,
/// window focus, pointer movement and key presses. Listeners are removed when
/// the component unmounts.
///
/// Effects run after the whole tree has been created, so child components
/// (the welcome popup in particular) read `lastActiveAt` before the load
/// write lands.
#[hook]
pub fn use_activity_tracker(config: PopupConfig) {
    use_effect_with((), move |_| {
        let listeners = install_listeners(&config);
        move || drop(listeners)
    });
}

fn install_listeners(config: &PopupConfig) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };

    let tracker: SharedTracker = Rc::new(RefCell::new(SessionActivityTracker::new(
        config,
        SessionFlags::new(BrowserSessionStore::open()),
    )));
    record(&tracker, ActivityEvent::Load);

    let on_visibility = {
        let tracker = tracker.clone();
        let document = document.clone();
        move |_: &web_sys::Event| {
            if document.visibility_state() == VisibilityState::Visible {
                record(&tracker, ActivityEvent::BecameVisible);
            }
        }
    };

    vec![
        EventListener::new(&document, "visibilitychange", on_visibility),
        EventListener::new(&window, "focus", recorder(&tracker, ActivityEvent::Focus)),
        EventListener::new(
            &document,
            "mousemove",
            recorder(&tracker, ActivityEvent::PointerMove),
        ),
        EventListener::new(&document, "keydown", recorder(&tracker, ActivityEvent::KeyPress)),
    ]
}

fn recorder(
    tracker: &SharedTracker,
    event: ActivityEvent,
) -> impl FnMut(&web_sys::Event) + 'static {
    let tracker = tracker.clone();
    move |_| record(&tracker, event)
}

fn record(tracker: &SharedTracker, event: ActivityEvent) {
    tracker.borrow_mut().record_activity(event, Utc::now());
}
