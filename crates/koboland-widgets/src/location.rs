//! URL helpers for page-cache navigation.

/// Path component of an absolute or relative URL, without query or fragment
pub fn path_of(url: &str) -> &str {
    let path = match url.find("://") {
        Some(i) => {
            let rest = &url[i + 3..];
            rest.find('/').map(|j| &rest[j..]).unwrap_or("/")
        }
        None => url,
    };
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Whether `url` points at `path` on any host
pub fn targets_path(url: &str, path: &str) -> bool {
    path_of(url) == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("http://localhost:8000/logout/"), "/logout/");
        assert_eq!(path_of("https://example.org"), "/");
        assert_eq!(path_of("/chat/user/ann?x=1#top"), "/chat/user/ann");
    }

    #[test]
    fn test_targets_path() {
        assert!(targets_path("http://localhost:8000/logout/", "/logout/"));
        assert!(targets_path("/logout/", "/logout/"));
        assert!(!targets_path("http://localhost:8000/logout/again/", "/logout/"));
    }
}
