//! Form Validation Controller
//!
//! Keeps the submit button of a `data-validate` form disabled until the
//! form can be sent.

use std::rc::Rc;

use koboland_widgets::form::{should_enable_submit, FormSnapshot};
use koboland_widgets::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use super::{Binding, Controller};

const VALIDATE_ATTR: &str = "data-validate";

pub struct FormValidationController {
    element: Element,
}

pub fn connect(element: &Element, _config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    let controller = FormValidationController {
        element: element.clone(),
    };
    controller.refresh();
    Some(Rc::new(controller))
}

fn select<T: JsCast>(scope: &Element, selector: &str) -> Option<T> {
    scope.query_selector(selector).ok().flatten()?.dyn_into().ok()
}

/// Field that fired `event`, when it sits in a form marked for validation
fn validated_field(event: &Event) -> Option<Element> {
    let field: Element = event.target()?.dyn_into().ok()?;
    field.closest(&format!("form[{}]", VALIDATE_ATTR)).ok().flatten()?;
    Some(field)
}

impl Controller for FormValidationController {
    fn handle(&self, method: &str, event: &Event) {
        let Some(field) = validated_field(event) else {
            return;
        };
        match method {
            "refresh" => self.refresh(),
            "changed" => {
                let is_file = field.get_attribute("type").as_deref() == Some("file");
                let is_board = field.get_attribute("name").as_deref() == Some("board");
                if is_file || is_board {
                    self.refresh();
                }
            }
            "blur" => {
                if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                    log::debug!("[FORM] {} valid: {}", input.name(), input.validity().valid());
                }
            }
            other => log::warn!("[FORM] Unknown action {}", other),
        }
    }

    /// Captured so `blur`, which does not bubble, reaches the form too
    fn bindings(&self) -> Vec<Binding> {
        [("keyup", "refresh"), ("change", "changed"), ("blur", "blur")]
            .into_iter()
            .map(|(event, method)| Binding {
                target: self.element.clone().into(),
                event,
                method,
                capture: true,
            })
            .collect()
    }
}

impl FormValidationController {
    fn snapshot(&self) -> FormSnapshot {
        let scope = &self.element;
        let title = select::<HtmlInputElement>(scope, "input[name=\"title\"]").map(|i| i.value());
        let board = select::<HtmlSelectElement>(scope, "select[name=\"board\"]").map(|s| s.value());
        let content =
            select::<HtmlTextAreaElement>(scope, "textarea[name=\"content\"]").map(|t| t.value());
        let file_count = select::<HtmlInputElement>(scope, "input[name=\"files\"]")
            .and_then(|i| i.files())
            .map(|f| f.length() as usize)
            .unwrap_or(0);
        FormSnapshot {
            title,
            board,
            content,
            file_count,
        }
    }

    fn refresh(&self) {
        let Some(button) = select::<HtmlButtonElement>(&self.element, "button") else {
            return;
        };
        let enabled = should_enable_submit(&self.snapshot());
        button.set_disabled(!enabled);
    }
}
