//! Cookie Lookup
//!
//! Finds a named value in a `document.cookie` string.

use percent_encoding::percent_decode_str;

/// Value of the first cookie called `name`, percent-decoded
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let cookies = "sessionid=abc; csrftoken=t0k%3Den; theme=dark";
        assert_eq!(find_cookie(cookies, "csrftoken").as_deref(), Some("t0k=en"));
        assert_eq!(find_cookie(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(find_cookie(cookies, "missing"), None);
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        let cookies = "csrftoken_old=1;csrftoken=2";
        assert_eq!(find_cookie(cookies, "csrftoken").as_deref(), Some("2"));
        assert_eq!(find_cookie(cookies, "csrf"), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(find_cookie("", "csrftoken"), None);
        assert_eq!(find_cookie("a=1", ""), None);
    }
}
