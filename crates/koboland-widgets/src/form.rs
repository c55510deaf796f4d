//! Form Rules
//!
//! Submit-button gating for topic and post forms, and the JSON body of a
//! quick reply.

use serde_json::{Map, Value};

/// The fields the submit rule looks at. `None` means the form has no such field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub title: Option<String>,
    pub board: Option<String>,
    pub content: Option<String>,
    pub file_count: usize,
}

/// A form may be submitted when every present required field is filled and
/// it carries either content or at least one file.
pub fn should_enable_submit(form: &FormSnapshot) -> bool {
    if matches!(&form.title, Some(title) if title.is_empty()) {
        return false;
    }
    if matches!(&form.board, Some(board) if board.is_empty()) {
        return false;
    }
    let has_content = form.content.as_deref().map(|c| !c.is_empty()).unwrap_or(false);
    has_content || form.file_count > 0
}

/// JSON object of `name -> value`; unnamed fields are skipped, later
/// fields with the same name win.
pub fn fields_to_json<I, K, V>(fields: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();
    for (name, value) in fields {
        let name = name.into();
        if name.is_empty() {
            continue;
        }
        map.insert(name, Value::String(value.into()));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(
        title: Option<&str>,
        board: Option<&str>,
        content: &str,
        files: usize,
    ) -> FormSnapshot {
        FormSnapshot {
            title: title.map(String::from),
            board: board.map(String::from),
            content: Some(content.to_string()),
            file_count: files,
        }
    }

    #[test]
    fn test_post_form() {
        assert!(!should_enable_submit(&snapshot(None, None, "", 0)));
        assert!(should_enable_submit(&snapshot(None, None, "hi", 0)));
        assert!(should_enable_submit(&snapshot(None, None, "", 1)));
    }

    #[test]
    fn test_topic_form() {
        assert!(!should_enable_submit(&snapshot(Some(""), Some("3"), "body", 0)));
        assert!(!should_enable_submit(&snapshot(Some("Title"), Some(""), "body", 0)));
        assert!(should_enable_submit(&snapshot(Some("Title"), Some("3"), "body", 0)));
        assert!(!should_enable_submit(&snapshot(Some("Title"), Some("3"), "", 0)));
    }

    #[test]
    fn test_missing_content_field() {
        let form = FormSnapshot { file_count: 0, ..FormSnapshot::default() };
        assert!(!should_enable_submit(&form));
    }

    #[test]
    fn test_fields_to_json() {
        let value = fields_to_json(vec![
            ("content", "hello"),
            ("", "ignored"),
            ("topic", "4"),
            ("content", "again"),
        ]);
        assert_eq!(value, json!({"content": "again", "topic": "4"}));
    }
}
