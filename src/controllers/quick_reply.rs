//! Quick reply form: every field posted as JSON, the answer shown in place.

use std::rc::Rc;

use koboland_widgets::form::fields_to_json;
use koboland_widgets::UiConfig;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Binding, Controller};
use crate::navigation::{self, VisitAction};
use crate::{api, csrf};

pub struct QuickReplyController {
    form: HtmlFormElement,
    config: Rc<UiConfig>,
}

pub fn connect(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    let Ok(form) = element.clone().dyn_into::<HtmlFormElement>() else {
        log::warn!("[REPLY] quick-reply needs a form element");
        return None;
    };
    Some(Rc::new(QuickReplyController {
        form,
        config: config.clone(),
    }))
}

/// `(name, value)` of every textarea and input, in document order
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(nodes) = form.query_selector_all("textarea, input") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| {
            if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                Some((input.name(), input.value()))
            } else {
                node.dyn_ref::<HtmlTextAreaElement>()
                    .map(|area| (area.name(), area.value()))
            }
        })
        .collect()
}

impl Controller for QuickReplyController {
    fn handle(&self, method: &str, event: &Event) {
        match method {
            "submit" => {
                event.prevent_default();
                self.submit();
            }
            other => log::warn!("[REPLY] Unknown action {}", other),
        }
    }

    fn bindings(&self) -> Vec<Binding> {
        vec![Binding {
            target: self.form.clone().into(),
            event: "submit",
            method: "submit",
            capture: false,
        }]
    }
}

impl QuickReplyController {
    fn submit(&self) {
        let fields = fields_to_json(form_fields(&self.form));
        let url = self.config.endpoints.quick_reply.clone();
        let token = csrf::token(&self.config.csrf_cookie);
        let form = self.form.clone();
        log::info!("[REPLY] Posting reply to {}", url);

        spawn_local(async move {
            let page = match api::submit_quick_reply(&url, &fields, token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!("[REPLY] Reply failed: {}", e);
                    return;
                }
            };
            if !page.is_ok() {
                log::warn!("[REPLY] {} answered {}", url, page.status);
                return;
            }
            form.reset();
            let Some(here) = navigation::current_href() else {
                log::error!("[REPLY] No current location");
                return;
            };
            if let Err(e) = navigation::render_html(&here, &page.html, VisitAction::Restore) {
                log::error!("[REPLY] Failed to render reply: {}", e);
            }
        });
    }
}
