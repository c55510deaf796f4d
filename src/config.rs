//! Page Configuration
//!
//! Reads optional overrides from `<meta name="koboland-config" content="{...}">`.

use koboland_widgets::{UiConfig, WidgetResult};
use wasm_bindgen::JsCast;

const CONFIG_META: &str = "meta[name=\"koboland-config\"]";

/// Load the page configuration; defaults when the page provides none
pub fn load() -> WidgetResult<UiConfig> {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(CONFIG_META).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content());

    match content {
        Some(json) if !json.trim().is_empty() => UiConfig::from_json(&json),
        _ => Ok(UiConfig::default()),
    }
}
