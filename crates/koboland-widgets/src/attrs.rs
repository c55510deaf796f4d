//! Attribute-Backed State
//!
//! Server-rendered widgets carry their initial state as `data-*` attributes.
//! This module names those attributes and parses them into typed values.

use std::collections::HashMap;
use crate::error::{WidgetError, WidgetResult};

// Votable widgets
pub const ITEM_CLASS: &str = "data-item-class";
pub const ITEM_ID: &str = "data-item-id";
pub const ITEM_VOTE_STATE: &str = "data-item-vote-state";
pub const ITEM_LIKE_COUNT: &str = "data-item-like-count";
pub const ITEM_DISLIKE_COUNT: &str = "data-item-dislike-count";
pub const ITEM_SHARE_COUNT: &str = "data-item-share-count";
pub const ITEM_SHARED: &str = "data-item-shared";

// Followable widgets
pub const BOARD_ID: &str = "data-board-id";
pub const BOARD_IS_FOLLOWED: &str = "data-board-is-followed";
pub const TOPIC_ID: &str = "data-topic-id";
pub const TOPIC_IS_FOLLOWED: &str = "data-topic-is-followed";
pub const USER_ID: &str = "data-item";
pub const USER_IS_FOLLOWED: &str = "data-is-followed";

/// Read access to a widget's attributes
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for HashMap<&str, &str> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}

/// Required, non-empty string attribute
pub fn required(source: &impl AttributeSource, name: &str) -> WidgetResult<String> {
    match source.attribute(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(WidgetError::MissingAttribute(name.to_string())),
    }
}

/// Non-negative counter. Missing means 0, negative clamps to 0.
pub fn count(source: &impl AttributeSource, name: &str) -> WidgetResult<u32> {
    let Some(raw) = source.attribute(name) else {
        return Ok(0);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: i64 = trimmed.parse().map_err(|_| WidgetError::invalid(name, &raw))?;
    Ok(value.clamp(0, u32::MAX as i64) as u32)
}

/// `true` (any case) or `1`; anything else, including absence, is false
pub fn flag(source: &impl AttributeSource, name: &str) -> bool {
    source
        .attribute(name)
        .map(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_required() {
        let source = attrs(&[(ITEM_ID, " 42 "), (ITEM_CLASS, "")]);
        assert_eq!(required(&source, ITEM_ID).unwrap(), "42");
        assert_eq!(
            required(&source, ITEM_CLASS),
            Err(WidgetError::MissingAttribute(ITEM_CLASS.to_string()))
        );
        assert!(required(&source, BOARD_ID).is_err());
    }

    #[test]
    fn test_count() {
        let source = attrs(&[
            (ITEM_LIKE_COUNT, "7"),
            (ITEM_DISLIKE_COUNT, "-3"),
            (ITEM_SHARE_COUNT, "lots"),
        ]);
        assert_eq!(count(&source, ITEM_LIKE_COUNT).unwrap(), 7);
        assert_eq!(count(&source, ITEM_DISLIKE_COUNT).unwrap(), 0);
        assert!(count(&source, ITEM_SHARE_COUNT).is_err());
        assert_eq!(count(&source, "data-missing").unwrap(), 0);
    }

    #[test]
    fn test_flag() {
        let source = attrs(&[
            (BOARD_IS_FOLLOWED, "True"),
            (ITEM_SHARED, "1"),
            (TOPIC_IS_FOLLOWED, "false"),
            (USER_IS_FOLLOWED, "0"),
        ]);
        assert!(flag(&source, BOARD_IS_FOLLOWED));
        assert!(flag(&source, ITEM_SHARED));
        assert!(!flag(&source, TOPIC_IS_FOLLOWED));
        assert!(!flag(&source, USER_IS_FOLLOWED));
        assert!(!flag(&source, "data-missing"));
    }
}
