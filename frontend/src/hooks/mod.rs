//! Custom Yew hooks for the site scripts.

mod use_activity_tracker;

pub use use_activity_tracker::use_activity_tracker;
