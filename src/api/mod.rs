//! Server API Wrappers
//!
//! HTTP bindings to the forum server, organized by domain.

mod notify;
mod session;
mod votable;

use gloo_net::http::{RequestBuilder, Response};

// Re-export all public items
pub use notify::*;
pub use session::*;
pub use votable::*;

const CSRF_HEADER: &str = "X-CSRFToken";

/// HTML page returned by the server, with the URL it finally came from
#[derive(Debug, Clone)]
pub struct HtmlResponse {
    pub url: String,
    pub status: u16,
    pub html: String,
}

impl HtmlResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn with_csrf(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header(CSRF_HEADER, token),
        None => builder,
    }
}

async fn read_html(response: Response) -> Result<HtmlResponse, String> {
    let url = response.url();
    let status = response.status();
    let html = response.text().await.map_err(|e| e.to_string())?;
    Ok(HtmlResponse { url, status, html })
}
