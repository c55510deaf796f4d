//! DOM Adapter
//!
//! Bridges widget elements to the pure layer: attributes in, display
//! patches out. Targets follow the `data-target="<controller>.<name>"`
//! convention and belong to the nearest enclosing controller element.

use koboland_widgets::{AttributeSource, DisplayPatch, DomOp};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Attribute view of a DOM element
pub struct ElementAttrs<'a>(pub &'a Element);

impl AttributeSource for ElementAttrs<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn controller_selector(identifier: &str) -> String {
    format!("[data-controller~=\"{}\"]", identifier)
}

/// Whether `node` belongs to `scope` rather than a nested controller of the same kind
pub fn in_scope(scope: &Element, node: &Element, identifier: &str) -> bool {
    match node.closest(&controller_selector(identifier)) {
        Ok(Some(owner)) => owner == *scope,
        _ => false,
    }
}

/// Elements under `scope` (including itself) matching `selector` and owned by it
pub fn scoped_elements(scope: &Element, selector: &str, identifier: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if scope.matches(selector).unwrap_or(false) {
        found.push(scope.clone());
    }
    if let Ok(nodes) = scope.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                if in_scope(scope, &element, identifier) {
                    found.push(element);
                }
            }
        }
    }
    found
}

/// First target with the given name
pub fn find_target(scope: &Element, identifier: &str, name: &str) -> Option<Element> {
    let selector = format!("[data-target~=\"{}.{}\"]", identifier, name);
    scoped_elements(scope, &selector, identifier).into_iter().next()
}

/// Apply a display patch to a widget
pub fn apply_patch(element: &Element, identifier: &str, patch: &DisplayPatch) {
    for op in patch.ops() {
        match op {
            DomOp::SetAttribute { name, value } => {
                let _ = element.set_attribute(name, value);
            }
            DomOp::SetText { target, text } => match find_target(element, identifier, target) {
                Some(node) => node.set_text_content(Some(text)),
                None => log::debug!("[DOM] {} has no target {}", identifier, target),
            },
            DomOp::SetClass { target, class, on } => {
                match find_target(element, identifier, target) {
                    Some(node) => {
                        let classes = node.class_list();
                        let _ = if *on { classes.add_1(class) } else { classes.remove_1(class) };
                    }
                    None => log::debug!("[DOM] {} has no target {}", identifier, target),
                }
            }
        }
    }
}
