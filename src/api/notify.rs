//! Widget Notifications
//!
//! Vote, share and follow requests. Callers do not wait on these for UI
//! state; the status only feeds the sync report.

use gloo_net::http::Request;
use koboland_widgets::Notification;
use super::with_csrf;

/// POST the notification body as JSON and return the response status
pub async fn send_notification(
    notification: &Notification,
    csrf: Option<&str>,
) -> Result<u16, String> {
    let request = with_csrf(Request::post(&notification.url), csrf)
        .json(&notification.body)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    Ok(response.status())
}
