//! Browser-independent core of the dataPrice site scripts.
//!
//! Everything in this crate is plain Rust so it can be unit-tested natively;
//! the `frontend` crate wires it to the DOM, session storage and timers.

// Default delays, windows and storage keys
pub mod defaults;

// Tunable timings
pub mod config;
pub use config::PopupConfig;

// Session storage abstraction and the popup's own flags
pub mod storage;
pub use storage::{MemoryStore, SessionStore, StorageError};

pub mod session_flags;
pub use session_flags::SessionFlags;

// "Last active" liveness tracking
pub mod activity;
pub use activity::{ActivityEvent, SessionActivityTracker};

// Welcome popup state machine and content
pub mod popup;
pub use popup::{
    should_present, Effect, PopupError, PopupEvent, PopupPhase, PopupState, SlideStyle,
    TimerKind, WelcomePopupController,
};

pub mod routes;
pub use routes::is_home_path;
