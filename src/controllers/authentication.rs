//! Authentication Controller
//!
//! Logout without a full reload. Turbolinks visits to the logout path are
//! cancelled so a cached or prefetched page never logs the user out.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Reflect;
use koboland_widgets::location::targets_path;
use koboland_widgets::UiConfig;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Element, Event};

use super::Controller;
use crate::api;
use crate::dom;
use crate::navigation::{self, VisitAction};

pub struct AuthenticationController {
    config: Rc<UiConfig>,
}

pub fn connect(_element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    guard_logout_visits(&config.endpoints.logout);
    Some(Rc::new(AuthenticationController { config: config.clone() }))
}

/// URL a `turbolinks:before-visit` event is heading to
fn visit_url(event: &Event) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    Reflect::get(&detail, &"url".into()).ok()?.as_string()
}

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

/// Install the document listener once per page lifetime
fn guard_logout_visits(logout_path: &str) {
    if GUARDED.with(|g| g.replace(true)) {
        return;
    }
    let Some(doc) = dom::document() else {
        return;
    };
    let logout_path = logout_path.to_string();
    let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Some(url) = visit_url(&ev) {
            if targets_path(&url, &logout_path) {
                log::debug!("[AUTH] Cancelled visit to {}", url);
                ev.prevent_default();
            }
        }
    });
    let _ = doc.add_event_listener_with_callback(
        "turbolinks:before-visit",
        listener.as_ref().unchecked_ref(),
    );
    listener.forget();
}

impl Controller for AuthenticationController {
    fn handle(&self, method: &str, event: &Event) {
        match method {
            "logout" => {
                event.prevent_default();
                self.logout();
            }
            other => log::warn!("[AUTH] Unknown action {}", other),
        }
    }
}

impl AuthenticationController {
    fn logout(&self) {
        let url = self.config.endpoints.logout.clone();
        log::info!("[AUTH] Logging out");
        spawn_local(async move {
            let page = match api::logout(&url).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!("[AUTH] Logout failed: {}", e);
                    return;
                }
            };
            if let Err(e) = navigation::clear_cache() {
                log::warn!("[AUTH] {}", e);
            }
            let Some(here) = navigation::current_href() else {
                log::error!("[AUTH] No current location");
                return;
            };
            if let Err(e) = navigation::render_html(&here, &page.html, VisitAction::Replace) {
                log::error!("[AUTH] Failed to render page after logout: {}", e);
            }
        });
    }
}
