//! Anti-forgery token from the session cookie.

use koboland_widgets::cookie::find_cookie;
use wasm_bindgen::JsCast;

/// Current token, if the cookie is set
pub fn token(cookie_name: &str) -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    find_cookie(&cookies, cookie_name)
}
