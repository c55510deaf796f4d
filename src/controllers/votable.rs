//! Votable Controller
//!
//! Like, dislike and share buttons on a post or topic, plus the quote link.

use std::cell::RefCell;
use std::rc::Rc;

use koboland_widgets::{UiConfig, VotableWidget};
use web_sys::{Element, Event};

use super::Controller;
use crate::dom::{self, ElementAttrs};
use crate::navigation::{self, VisitAction};
use crate::dispatch;

const IDENTIFIER: &str = "votable";

pub struct VotableController {
    element: Element,
    widget: RefCell<VotableWidget>,
    config: Rc<UiConfig>,
}

pub fn connect(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    match VotableWidget::from_attributes(&ElementAttrs(element)) {
        Ok(widget) => {
            log::debug!("[VOTE] Connected {} {}", widget.class.as_str(), widget.id);
            Some(Rc::new(VotableController {
                element: element.clone(),
                widget: RefCell::new(widget),
                config: config.clone(),
            }))
        }
        Err(e) => {
            log::warn!("[VOTE] Not connecting votable: {}", e);
            None
        }
    }
}

impl Controller for VotableController {
    fn handle(&self, method: &str, event: &Event) {
        event.prevent_default();
        let outcome = {
            let mut widget = self.widget.borrow_mut();
            match method {
                "like" => widget.like(&self.config),
                "dislike" => widget.dislike(&self.config),
                "share" => widget.toggle_share(&self.config),
                "quote" => {
                    let url = widget.quote_url(&self.config.endpoints.comment);
                    drop(widget);
                    self.quote(&url);
                    return;
                }
                other => {
                    log::warn!("[VOTE] Unknown action {}", other);
                    return;
                }
            }
        };
        dom::apply_patch(&self.element, IDENTIFIER, &outcome.patch);
        dispatch::dispatch(self.element.clone(), outcome.notification, &self.config);
    }
}

impl VotableController {
    fn quote(&self, url: &str) {
        log::info!("[VOTE] Quote -> {}", url);
        if let Err(e) = navigation::visit(url, VisitAction::Advance) {
            log::error!("[VOTE] Failed to open reply form: {}", e);
        }
    }
}
