//! Post and Topic Submission
//!
//! Multipart create/edit requests and the JSON quick reply.

use gloo_net::http::Request;
use web_sys::FormData;
use super::{read_html, with_csrf, HtmlResponse};

/// POST a multipart form; the server answers with (or redirects to) a page
pub async fn submit_votable(
    url: &str,
    form: FormData,
    csrf: Option<&str>,
) -> Result<HtmlResponse, String> {
    let request = with_csrf(Request::post(url), csrf)
        .body(form)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    read_html(response).await
}

/// POST form fields as a JSON object
pub async fn submit_quick_reply(
    url: &str,
    fields: &serde_json::Value,
    csrf: Option<&str>,
) -> Result<HtmlResponse, String> {
    let request = with_csrf(Request::post(url), csrf)
        .json(fields)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    read_html(response).await
}
