mod components;
mod hooks;
mod storage;
pub mod utils;

use components::WelcomePopup;
use hooks::use_activity_tracker;
use shared::{is_home_path, PopupConfig};
use yew::prelude::*;
use yew_router::prelude::*;

/// Id of the element the app renders into, appended to the static page's `<body>`.
const MOUNT_ID: &str = "site-scripts";

#[derive(Properties, PartialEq)]
struct SiteScriptsProps {
    config: PopupConfig,
}

/// Page-wide behaviour: activity tracking everywhere, the welcome popup on
/// the landing page only.
#[function_component(SiteScripts)]
fn site_scripts(props: &SiteScriptsProps) -> Html {
    use_activity_tracker(props.config.clone());

    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    if is_home_path(&path) {
        html! { <WelcomePopup config={props.config.clone()} /> }
    } else {
        html! {}
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| utils::load_popup_config());

    html! {
        <BrowserRouter>
            <SiteScripts config={(*config).clone()} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());

    match utils::mount_point(MOUNT_ID) {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => gloo::console::warn!("No document body, site scripts not started"),
    }
}
