//! Action Descriptors
//!
//! Parses `data-action="click->votable#like submit->votable-creation#send"`.
//! The event part is optional; its default depends on the element's tag.

/// One `event->controller#method` binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub event: String,
    pub controller: String,
    pub method: String,
}

/// Event bound when a descriptor names none
pub fn default_event(tag_name: &str) -> &'static str {
    match tag_name.to_ascii_lowercase().as_str() {
        "form" => "submit",
        "input" | "select" | "textarea" => "change",
        _ => "click",
    }
}

/// Parse a single descriptor; `None` when malformed
pub fn parse_descriptor(token: &str, tag_name: &str) -> Option<ActionDescriptor> {
    let (event, target) = match token.split_once("->") {
        Some((event, target)) => (event.trim(), target),
        None => (default_event(tag_name), token),
    };
    let (controller, method) = target.split_once('#')?;
    let (controller, method) = (controller.trim(), method.trim());
    if event.is_empty() || controller.is_empty() || method.is_empty() {
        return None;
    }
    Some(ActionDescriptor {
        event: event.to_string(),
        controller: controller.to_string(),
        method: method.to_string(),
    })
}

/// Parse a whitespace-separated `data-action` value, skipping malformed parts
pub fn parse_actions(value: &str, tag_name: &str) -> Vec<ActionDescriptor> {
    value
        .split_whitespace()
        .filter_map(|token| parse_descriptor(token, tag_name))
        .collect()
}

/// Whether a `data-controller` value lists an identifier
pub fn has_controller(value: &str, identifier: &str) -> bool {
    value.split_whitespace().any(|id| id == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_event() {
        let actions = parse_actions("click->votable#like  mouseover->votable#peek", "BUTTON");
        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0],
            ActionDescriptor {
                event: "click".into(),
                controller: "votable".into(),
                method: "like".into()
            }
        );
        assert_eq!(actions[1].event, "mouseover");
    }

    #[test]
    fn test_default_events() {
        assert_eq!(parse_descriptor("board#follow", "A").unwrap().event, "click");
        assert_eq!(parse_descriptor("quick-reply#send", "form").unwrap().event, "submit");
        assert_eq!(parse_descriptor("x#y", "SELECT").unwrap().event, "change");
    }

    #[test]
    fn test_malformed() {
        assert!(parse_descriptor("votable", "button").is_none());
        assert!(parse_descriptor("click->#like", "button").is_none());
        assert!(parse_descriptor("->votable#like", "button").is_none());
        assert!(parse_descriptor("votable#", "button").is_none());
        assert_eq!(parse_actions("bad votable#share", "button").len(), 1);
    }

    #[test]
    fn test_has_controller() {
        assert!(has_controller("votable form-validation", "form-validation"));
        assert!(!has_controller("votable-creation", "votable"));
    }
}
