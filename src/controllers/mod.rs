//! Controllers
//!
//! Each controller attaches to elements listing its identifier in
//! `data-controller` and receives the actions declared in `data-action`.
//! Wiring runs at startup and after every Turbolinks page load. Before
//! Turbolinks swaps the page body, every live controller is disconnected:
//! its listeners are removed and its state dropped.

mod authentication;
mod follow;
mod form_validation;
mod quick_reply;
mod registry;
mod votable;
mod votable_form;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use koboland_widgets::actions::{has_controller, parse_actions};
use koboland_widgets::UiConfig;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::dom;
use registry::Registry;

/// Receives the actions bound to one controller instance
pub trait Controller {
    fn handle(&self, method: &str, event: &Event);

    /// Listeners needed beyond the `data-action` bindings
    fn bindings(&self) -> Vec<Binding> {
        Vec::new()
    }

    /// Release resources held outside the controller itself
    fn disconnect(&self) {}
}

/// A DOM event routed to a controller method
pub struct Binding {
    pub target: EventTarget,
    pub event: &'static str,
    pub method: &'static str,
    pub capture: bool,
}

type Connector = fn(&Element, &Rc<UiConfig>) -> Option<Rc<dyn Controller>>;

/// Identifier -> connector. Order only matters for log output.
const CONTROLLERS: &[(&str, Connector)] = &[
    ("votable", votable::connect),
    ("board", follow::connect_board),
    ("topic", follow::connect_topic),
    ("user", follow::connect_user),
    ("authentication", authentication::connect),
    ("votable-creation", votable_form::connect_creation),
    ("votable-update", votable_form::connect_update),
    ("quick-reply", quick_reply::connect),
    ("form-validation", form_validation::connect),
];

/// Expando property listing the controllers attached to an element.
/// Not an attribute, so page-cache snapshots of the element do not inherit it.
const CONNECTED_KEY: &str = "__kobolandControllers";

/// Installed event listener; removed from its target on drop
struct Listener {
    target: EventTarget,
    event: String,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// A connected controller and the listeners that reach it
struct Connection {
    identifier: &'static str,
    element: Element,
    controller: Rc<dyn Controller>,
    _listeners: Vec<Listener>,
}

impl Drop for Connection {
    fn drop(&mut self) {
        log::trace!("[APP] Disconnecting {}", self.identifier);
        self.controller.disconnect();
    }
}

thread_local! {
    static CONNECTIONS: RefCell<Registry<Connection>> = RefCell::new(Registry::new());
}

fn connected_ids(element: &Element) -> String {
    Reflect::get(element, &CONNECTED_KEY.into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn mark_connected(element: &Element, identifier: &str) {
    let mut ids = connected_ids(element);
    ids.push(' ');
    ids.push_str(identifier);
    let _ = Reflect::set(element, &CONNECTED_KEY.into(), &ids.into());
}

/// Connect every controller element on the page that is not connected yet
pub fn connect_all(config: &Rc<UiConfig>) {
    let Some(doc) = dom::document() else {
        return;
    };
    let mut connected = 0;
    for &(identifier, connect) in CONTROLLERS {
        let Ok(nodes) = doc.query_selector_all(&dom::controller_selector(identifier)) else {
            continue;
        };
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if has_controller(&connected_ids(&element), identifier) {
                continue;
            }
            mark_connected(&element, identifier);
            if let Some(controller) = connect(&element, config) {
                let mut listeners = bind_actions(&element, identifier, &controller);
                listeners.extend(
                    controller
                        .bindings()
                        .into_iter()
                        .map(|binding| listen(binding, &controller)),
                );
                CONNECTIONS.with(|c| {
                    c.borrow_mut().add(Connection {
                        identifier,
                        element,
                        controller,
                        _listeners: listeners,
                    })
                });
                connected += 1;
            }
        }
    }
    let live = CONNECTIONS.with(|c| c.borrow().len());
    log::debug!("[APP] Connected {} controllers ({} live)", connected, live);
}

/// Drop every live controller.
///
/// The connections are released on a later task: this may run from inside
/// one of their own listeners, which must not be freed while executing.
pub fn disconnect_all() {
    let stale = CONNECTIONS.with(|c| c.borrow_mut().take());
    if stale.is_empty() {
        return;
    }
    log::debug!("[APP] Disconnecting {} controllers", stale.len());
    // Permanent elements survive the render and must be connected again
    for connection in &stale {
        let _ = Reflect::delete_property(connection.element.as_ref(), &CONNECTED_KEY.into());
    }
    spawn_local(async move {
        drop(stale);
    });
}

fn listen(binding: Binding, controller: &Rc<dyn Controller>) -> Listener {
    let controller = controller.clone();
    let method = binding.method;
    let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        controller.handle(method, &ev);
    });
    let _ = binding.target.add_event_listener_with_callback_and_bool(
        binding.event,
        closure.as_ref().unchecked_ref(),
        binding.capture,
    );
    Listener {
        target: binding.target,
        event: binding.event.to_string(),
        capture: binding.capture,
        closure,
    }
}

/// Route `data-action` events for `identifier` inside `element` to `controller`
fn bind_actions(
    element: &Element,
    identifier: &str,
    controller: &Rc<dyn Controller>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for node in dom::scoped_elements(element, "[data-action]", identifier) {
        let value = node.get_attribute("data-action").unwrap_or_default();
        for action in parse_actions(&value, &node.tag_name()) {
            if action.controller != identifier {
                continue;
            }
            let controller = controller.clone();
            let method = action.method;
            let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                controller.handle(&method, &ev);
            });
            let target: EventTarget = node.clone().into();
            let _ = target
                .add_event_listener_with_callback(&action.event, closure.as_ref().unchecked_ref());
            listeners.push(Listener {
                target,
                event: action.event,
                capture: false,
                closure,
            });
        }
    }
    listeners
}

fn on_document(event: &str, handler: impl FnMut(Event) + 'static) {
    let Some(doc) = dom::document() else {
        return;
    };
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Connect now, after every Turbolinks page load, and disconnect before
/// each render replaces the body
pub fn start(config: Rc<UiConfig>) {
    connect_all(&config);
    on_document("turbolinks:before-render", |_ev| disconnect_all());
    on_document("turbolinks:load", move |_ev| connect_all(&config));
}
