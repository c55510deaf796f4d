//! Turbolinks Bindings
//!
//! The page cache that renders server HTML without a full reload.

use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Turbolinks, js_name = visit)]
    fn turbolinks_visit(location: &str, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = Turbolinks, js_name = clearCache)]
    fn turbolinks_clear_cache() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Turbolinks", "Snapshot"], js_name = fromHTMLString)]
    fn snapshot_from_html_string(html: &str) -> Result<JsValue, JsValue>;
}

/// How a visit changes browser history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitAction {
    Advance,
    Replace,
    Restore,
}

#[derive(Serialize)]
struct VisitOptions {
    action: VisitAction,
}

fn js_error(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

/// Navigate to `url`
pub fn visit(url: &str, action: VisitAction) -> Result<(), String> {
    let options =
        serde_wasm_bindgen::to_value(&VisitOptions { action }).map_err(|e| e.to_string())?;
    turbolinks_visit(url, &options).map_err(|e| js_error("Turbolinks.visit", e))
}

pub fn clear_cache() -> Result<(), String> {
    turbolinks_clear_cache().map_err(|e| js_error("Turbolinks.clearCache", e))
}

/// Store `html` as the cached snapshot for `url`
pub fn cache_snapshot(url: &str, html: &str) -> Result<(), String> {
    let turbolinks = Reflect::get(&js_sys::global(), &"Turbolinks".into())
        .map_err(|e| js_error("Turbolinks", e))?;
    let controller = Reflect::get(&turbolinks, &"controller".into())
        .map_err(|e| js_error("Turbolinks.controller", e))?;
    let cache = Reflect::get(&controller, &"cache".into())
        .map_err(|e| js_error("Turbolinks.controller.cache", e))?;
    let put: Function = Reflect::get(&cache, &"put".into())
        .map_err(|e| js_error("cache.put", e))?
        .dyn_into()
        .map_err(|e| js_error("cache.put", e))?;

    let snapshot =
        snapshot_from_html_string(html).map_err(|e| js_error("Snapshot.fromHTMLString", e))?;
    put.call2(&cache, &url.into(), &snapshot)
        .map(|_| ())
        .map_err(|e| js_error("cache.put", e))
}

/// Cache server HTML under `url` and show it
pub fn render_html(url: &str, html: &str, action: VisitAction) -> Result<(), String> {
    cache_snapshot(url, html)?;
    visit(url, action)
}

/// Current page location
pub fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
