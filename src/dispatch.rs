//! Notification Dispatcher
//!
//! Fire-and-forget delivery of widget notifications. The widget has already
//! been patched when `dispatch` is called; nothing here touches widget state.
//! Failures are reported through a bubbling `koboland:sync` event and a
//! short-lived class on the widget so a page can reconcile if it wants to.

use std::time::Duration;

use gloo_timers::future::sleep;
use koboland_widgets::{Notification, SyncReport, UiConfig};
use leptos::task::spawn_local;
use web_sys::{CustomEvent, CustomEventInit, Element};

use crate::{api, csrf};

pub const SYNC_EVENT: &str = "koboland:sync";

/// Send one notification in the background
pub fn dispatch(element: Element, notification: Notification, config: &UiConfig) {
    let token = csrf::token(&config.csrf_cookie);
    if token.is_none() {
        log::debug!("[SYNC] No {} cookie, sending without token", config.csrf_cookie);
    }
    let failed_class = config.sync_failed_class.clone();
    let flash = Duration::from_millis(config.sync_failed_flash_ms as u64);

    log::info!("[SYNC] {} -> {} {}", notification.kind(), notification.url, notification.to_json());

    spawn_local(async move {
        let report = match api::send_notification(&notification, token.as_deref()).await {
            Ok(status) => SyncReport::from_status(&notification, status),
            Err(e) => SyncReport::from_error(&notification, &e),
        };

        if report.ok {
            log::debug!("[SYNC] {} delivered ({:?})", report.kind, report.status);
            return;
        }

        log::warn!("[SYNC] {} to {} failed: {}", report.kind, report.url, report.message);
        emit_report(&element, &report);
        flash_class(&element, &failed_class, flash).await;
    });
}

/// Fire the sync event from the widget
pub fn emit_report(element: &Element, report: &SyncReport) {
    let detail = match serde_wasm_bindgen::to_value(report) {
        Ok(detail) => detail,
        Err(e) => {
            log::error!("[SYNC] Failed to encode report: {}", e);
            return;
        }
    };
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(SYNC_EVENT, &init) {
        Ok(event) => {
            let _ = element.dispatch_event(&event);
        }
        Err(e) => log::error!("[SYNC] Failed to create event: {:?}", e),
    }
}

async fn flash_class(element: &Element, class: &str, duration: Duration) {
    if class.is_empty() {
        return;
    }
    let classes = element.class_list();
    let _ = classes.add_1(class);
    sleep(duration).await;
    let _ = classes.remove_1(class);
}
