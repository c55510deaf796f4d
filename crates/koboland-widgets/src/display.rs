//! Display Patches
//!
//! The DOM side effects of a transition, computed as data. The browser layer
//! applies them in order; nothing here is re-derived from a server response.

/// One DOM write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    /// Set an attribute on the widget element itself
    SetAttribute { name: String, value: String },
    /// Replace the text of a named target
    SetText { target: String, text: String },
    /// Add or remove a class on a named target
    SetClass { target: String, class: String, on: bool },
}

/// Ordered DOM writes for one widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPatch {
    ops: Vec<DomOp>,
}

impl DisplayPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.ops.push(DomOp::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn text(mut self, target: &str, text: impl Into<String>) -> Self {
        self.ops.push(DomOp::SetText {
            target: target.to_string(),
            text: text.into(),
        });
        self
    }

    pub fn class(mut self, target: &str, class: &str, on: bool) -> Self {
        self.ops.push(DomOp::SetClass {
            target: target.to_string(),
            class: class.to_string(),
            on,
        });
        self
    }

    pub fn ops(&self) -> &[DomOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Value the patch writes for an attribute, if any (last write wins)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            DomOp::SetAttribute { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Text the patch writes to a target, if any (last write wins)
    pub fn target_text(&self, target: &str) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            DomOp::SetText { target: t, text } if t == target => Some(text.as_str()),
            _ => None,
        })
    }

    /// Class state the patch leaves on a target, if it touches it
    pub fn target_class(&self, target: &str, class: &str) -> Option<bool> {
        self.ops.iter().rev().find_map(|op| match op {
            DomOp::SetClass { target: t, class: c, on } if t == target && c == class => Some(*on),
            _ => None,
        })
    }
}

/// Counter text: empty when zero, else the number
pub fn count_text(count: u32) -> String {
    if count > 0 {
        count.to_string()
    } else {
        String::new()
    }
}

/// Follow button label for a given state
pub fn follow_label(following: bool) -> &'static str {
    if following { "Unfollow" } else { "Follow" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(0), "");
        assert_eq!(count_text(12), "12");
    }

    #[test]
    fn test_last_write_wins() {
        let patch = DisplayPatch::new()
            .attr("data-x", 1)
            .text("likeCount", "1")
            .attr("data-x", 2)
            .class("like", "btn-toggled", true)
            .class("like", "btn-toggled", false);
        assert_eq!(patch.ops().len(), 5);
        assert_eq!(patch.attribute("data-x"), Some("2"));
        assert_eq!(patch.target_text("likeCount"), Some("1"));
        assert_eq!(patch.target_class("like", "btn-toggled"), Some(false));
        assert_eq!(patch.target_class("dislike", "btn-toggled"), None);
    }

    #[test]
    fn test_follow_label() {
        assert_eq!(follow_label(true), "Unfollow");
        assert_eq!(follow_label(false), "Follow");
    }
}
