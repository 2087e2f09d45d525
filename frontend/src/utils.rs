use shared::PopupConfig;
use std::time::Duration;
use web_sys::{window, Element};

/// Body attribute carrying an optional JSON override of [`PopupConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-popup-config";

/// Append an empty `<div id=...>` to `<body>` for the app to render into.
/// Returns `None` when there is no document body to host it.
pub fn mount_point(id: &str) -> Option<Element> {
    let document = window()?.document()?;
    let body = document.body()?;
    let root = document.create_element("div").ok()?;
    root.set_id(id);
    body.append_child(&root).ok()?;
    Some(root)
}

/// Popup timings, overridable with `<body data-popup-config='{"autoplay_interval_ms": 5000}'>`.
pub fn load_popup_config() -> PopupConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

    match raw {
        Some(json) => parse_popup_config(&json),
        None => PopupConfig::default(),
    }
}

fn parse_popup_config(json: &str) -> PopupConfig {
    PopupConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
        PopupConfig::default()
    })
}

/// Milliseconds for gloo timers, saturating at `u32::MAX`.
pub fn timer_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_millis_converts_and_saturates() {
        assert_eq!(timer_millis(Duration::from_millis(300)), 300);
        assert_eq!(timer_millis(Duration::from_secs(3)), 3_000);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX / 1_000)), u32::MAX);
    }

    #[test]
    fn bad_config_falls_back_to_defaults() {
        assert_eq!(parse_popup_config("nope"), PopupConfig::default());
        assert_eq!(
            parse_popup_config(r#"{"presentation_delay_ms": 2500}"#).presentation_delay_ms,
            2_500
        );
    }
}
