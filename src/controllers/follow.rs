//! Follow Controllers
//!
//! Board, topic and user follow buttons. Boards also open the topic form;
//! user pages open a chat.

use std::cell::RefCell;
use std::rc::Rc;

use koboland_widgets::follow::{chat_url, new_topic_url};
use koboland_widgets::{FollowWidget, Followable, UiConfig};
use leptos::task::spawn_local;
use web_sys::{Element, Event};

use super::Controller;
use crate::dom::{self, ElementAttrs};
use crate::navigation::{self, VisitAction};
use crate::{api, csrf, dispatch};

pub struct FollowController {
    identifier: &'static str,
    element: Element,
    widget: RefCell<FollowWidget>,
    config: Rc<UiConfig>,
}

fn connect(
    identifier: &'static str,
    kind: Followable,
    element: &Element,
    config: &Rc<UiConfig>,
) -> Option<Rc<dyn Controller>> {
    match FollowWidget::from_attributes(kind, &ElementAttrs(element)) {
        Ok(widget) => {
            log::debug!(
                "[FOLLOW] Connected {} {} (following: {})",
                identifier,
                widget.id,
                widget.is_following()
            );
            Some(Rc::new(FollowController {
                identifier,
                element: element.clone(),
                widget: RefCell::new(widget),
                config: config.clone(),
            }))
        }
        Err(e) => {
            log::warn!("[FOLLOW] Not connecting {}: {}", identifier, e);
            None
        }
    }
}

pub fn connect_board(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    connect("board", Followable::Board, element, config)
}

pub fn connect_topic(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    connect("topic", Followable::Topic, element, config)
}

pub fn connect_user(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    connect("user", Followable::User, element, config)
}

impl Controller for FollowController {
    fn handle(&self, method: &str, event: &Event) {
        event.prevent_default();
        let kind = self.widget.borrow().kind;
        match (method, kind) {
            ("follow", _) => self.follow(),
            ("new_topic", Followable::Board) => self.new_topic(),
            ("chat", Followable::User) => self.chat(),
            (other, _) => log::warn!("[FOLLOW] {} has no action {}", self.identifier, other),
        }
    }
}

impl FollowController {
    fn follow(&self) {
        let outcome = self.widget.borrow_mut().toggle(&self.config);
        dom::apply_patch(&self.element, self.identifier, &outcome.patch);
        dispatch::dispatch(self.element.clone(), outcome.notification, &self.config);
    }

    fn new_topic(&self) {
        let url = new_topic_url(&self.config.endpoints.new_topic, &self.widget.borrow().id);
        log::info!("[FOLLOW] New topic -> {}", url);
        if let Err(e) = navigation::visit(&url, VisitAction::Advance) {
            log::error!("[FOLLOW] Failed to open topic form: {}", e);
        }
    }

    fn chat(&self) {
        let url = chat_url(&self.config.endpoints.chat, &self.widget.borrow().id);
        let token = csrf::token(&self.config.csrf_cookie);
        log::info!("[FOLLOW] Chat -> {}", url);
        spawn_local(async move {
            match api::fetch_chat(&url, token.as_deref()).await {
                Ok(page) => {
                    if !page.is_ok() {
                        log::warn!("[FOLLOW] Chat page answered {}", page.status);
                    }
                    let rendered = navigation::render_html(&url, &page.html, VisitAction::Restore);
                    if let Err(e) = rendered {
                        log::error!("[FOLLOW] Failed to render chat: {}", e);
                    }
                }
                Err(e) => log::error!("[FOLLOW] Failed to load chat: {}", e),
            }
        });
    }
}
