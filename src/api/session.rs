//! Session Pages
//!
//! Logout and chat pages, fetched as HTML for the page cache.

use gloo_net::http::Request;
use super::{read_html, with_csrf, HtmlResponse};

pub async fn logout(url: &str) -> Result<HtmlResponse, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    read_html(response).await
}

pub async fn fetch_chat(url: &str, csrf: Option<&str>) -> Result<HtmlResponse, String> {
    let response = with_csrf(Request::get(url), csrf)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_html(response).await
}
