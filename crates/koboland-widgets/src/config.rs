//! UI Configuration
//!
//! Endpoint paths and presentation constants. Every field has a default so a
//! page can override any subset through a JSON document.

use serde::{Deserialize, Serialize};
use crate::error::{WidgetError, WidgetResult};

/// Server paths used by the controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub vote: String,
    pub follow_board: String,
    pub follow_topic: String,
    pub follow_user: String,
    pub post_add: String,
    pub topic_add: String,
    pub post_edit: String,
    pub topic_edit: String,
    pub quick_reply: String,
    pub logout: String,
    pub chat: String,
    pub comment: String,
    pub new_topic: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            vote: "/api-auth/vote/".to_string(),
            follow_board: "/api/board/follow/".to_string(),
            follow_topic: "/api-auth/follow/topic/".to_string(),
            follow_user: "/api/user/follow/".to_string(),
            post_add: "/api/post/add/".to_string(),
            topic_add: "/api/topic/add/".to_string(),
            post_edit: "/api/post/edit/".to_string(),
            topic_edit: "/api/topic/edit/".to_string(),
            quick_reply: "/post/".to_string(),
            logout: "/logout/".to_string(),
            chat: "/chat/".to_string(),
            comment: "/comment/".to_string(),
            new_topic: "/topic/add".to_string(),
        }
    }
}

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Cookie holding the anti-forgery token
    pub csrf_cookie: String,
    /// Class marking an active like/dislike/share control
    pub checked_class: String,
    /// Upper bound on files attached to one submission
    pub max_file_count: usize,
    /// Class flashed on a widget whose notification failed
    pub sync_failed_class: String,
    pub sync_failed_flash_ms: u32,
    /// `log` level name (error, warn, info, debug, trace)
    pub log_level: String,
    pub endpoints: Endpoints,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_string(),
            checked_class: "btn-toggled".to_string(),
            max_file_count: 4,
            sync_failed_class: "sync-failed".to_string(),
            sync_failed_flash_ms: 3000,
            log_level: "info".to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let config: UiConfig =
            serde_json::from_str(json).map_err(|e| WidgetError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.max_file_count == 0 {
            return Err(WidgetError::InvalidConfig("max_file_count must be at least 1".into()));
        }
        if self.csrf_cookie.trim().is_empty() {
            return Err(WidgetError::InvalidConfig("csrf_cookie must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.checked_class, "btn-toggled");
        assert_eq!(config.max_file_count, 4);
        assert_eq!(config.endpoints.vote, "/api-auth/vote/");
        assert_eq!(config.endpoints.follow_topic, "/api-auth/follow/topic/");
    }

    #[test]
    fn test_partial_override() {
        let config = UiConfig::from_json(
            r#"{"max_file_count": 2, "endpoints": {"vote": "/api/vote/"}}"#,
        )
        .unwrap();
        assert_eq!(config.max_file_count, 2);
        assert_eq!(config.endpoints.vote, "/api/vote/");
        // Untouched fields keep their defaults
        assert_eq!(config.endpoints.logout, "/logout/");
        assert_eq!(config.csrf_cookie, "csrftoken");
    }

    #[test]
    fn test_rejects_zero_files() {
        let err = UiConfig::from_json(r#"{"max_file_count": 0}"#).unwrap_err();
        assert!(matches!(err, WidgetError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(UiConfig::from_json("{not json").is_err());
    }
}
