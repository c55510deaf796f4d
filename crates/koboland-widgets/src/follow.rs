//! Follow Widget
//!
//! Binary follow toggle shared by board, topic and user pages. Each
//! followable kind only differs in attribute names, endpoint and payload key.

use crate::attrs::{self, AttributeSource};
use crate::config::{Endpoints, UiConfig};
use crate::display::{follow_label, DisplayPatch};
use crate::error::WidgetResult;
use crate::notify::{FollowKey, FollowPayload, Notification, NotificationBody, Outcome};
use crate::toggle::BinaryToggle;

pub const TARGET_FOLLOW: &str = "follow";

/// Kind of followable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followable {
    Board,
    Topic,
    User,
}

impl Followable {
    pub fn id_attribute(&self) -> &'static str {
        match self {
            Followable::Board => attrs::BOARD_ID,
            Followable::Topic => attrs::TOPIC_ID,
            Followable::User => attrs::USER_ID,
        }
    }

    pub fn state_attribute(&self) -> &'static str {
        match self {
            Followable::Board => attrs::BOARD_IS_FOLLOWED,
            Followable::Topic => attrs::TOPIC_IS_FOLLOWED,
            Followable::User => attrs::USER_IS_FOLLOWED,
        }
    }

    pub fn endpoint<'a>(&self, endpoints: &'a Endpoints) -> &'a str {
        match self {
            Followable::Board => &endpoints.follow_board,
            Followable::Topic => &endpoints.follow_topic,
            Followable::User => &endpoints.follow_user,
        }
    }

    fn key(&self, id: String) -> FollowKey {
        match self {
            Followable::Board => FollowKey::Board(id),
            Followable::Topic => FollowKey::Topic(id),
            Followable::User => FollowKey::User(id),
        }
    }
}

/// In-memory state of one follow widget
#[derive(Debug, Clone, PartialEq)]
pub struct FollowWidget {
    pub kind: Followable,
    pub id: String,
    pub followed: BinaryToggle,
}

impl FollowWidget {
    pub fn from_attributes(kind: Followable, source: &impl AttributeSource) -> WidgetResult<Self> {
        let id = attrs::required(source, kind.id_attribute())?;
        let followed = attrs::flag(source, kind.state_attribute());
        Ok(Self {
            kind,
            id,
            followed: BinaryToggle::new(followed),
        })
    }

    pub fn is_following(&self) -> bool {
        self.followed.active
    }

    /// Flip the follow state: one patch, one notification
    pub fn toggle(&mut self, config: &UiConfig) -> Outcome {
        let follow = self.followed.flip();
        let patch = DisplayPatch::new()
            .attr(self.kind.state_attribute(), follow)
            .text(TARGET_FOLLOW, follow_label(follow));
        let notification = Notification {
            url: self.kind.endpoint(&config.endpoints).to_string(),
            body: NotificationBody::Follow(FollowPayload {
                key: self.kind.key(self.id.clone()),
                follow,
            }),
        };
        Outcome { patch, notification }
    }
}

/// Topic creation form preselected for a board
pub fn new_topic_url(new_topic_path: &str, board_id: &str) -> String {
    format!("{}?board={}", new_topic_path, board_id)
}

/// Chat page with a user
pub fn chat_url(chat_path: &str, user_id: &str) -> String {
    format!("{}user/{}", chat_path, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_board_toggle() {
        let source: HashMap<&str, &str> =
            [(attrs::BOARD_ID, "9"), (attrs::BOARD_IS_FOLLOWED, "False")].into_iter().collect();
        let mut widget = FollowWidget::from_attributes(Followable::Board, &source).unwrap();
        assert!(!widget.is_following());

        let outcome = widget.toggle(&UiConfig::default());
        assert!(widget.is_following());
        assert_eq!(outcome.patch.attribute(attrs::BOARD_IS_FOLLOWED), Some("true"));
        assert_eq!(outcome.patch.target_text(TARGET_FOLLOW), Some("Unfollow"));
        assert_eq!(outcome.notification.url, "/api/board/follow/");
        assert_eq!(
            outcome.notification.body,
            NotificationBody::Follow(FollowPayload {
                key: FollowKey::Board("9".into()),
                follow: true,
            })
        );
    }

    #[test]
    fn test_user_attributes() {
        let source: HashMap<&str, &str> = [
            (attrs::USER_ID, "ann"),
            (attrs::USER_IS_FOLLOWED, "true"),
            ("data-is-following", "false"),
        ]
        .into_iter()
        .collect();
        let mut widget = FollowWidget::from_attributes(Followable::User, &source).unwrap();
        assert_eq!(
            widget,
            FollowWidget {
                kind: Followable::User,
                id: "ann".to_string(),
                followed: BinaryToggle::new(true),
            }
        );

        let outcome = widget.toggle(&UiConfig::default());
        assert_eq!(outcome.patch.attribute(attrs::USER_IS_FOLLOWED), Some("false"));
        assert_eq!(outcome.patch.target_text(TARGET_FOLLOW), Some("Follow"));
        assert_eq!(outcome.notification.url, "/api/user/follow/");
    }

    #[test]
    fn test_topic_requires_id() {
        let source: HashMap<&str, &str> = HashMap::new();
        assert!(FollowWidget::from_attributes(Followable::Topic, &source).is_err());
    }

    #[test]
    fn test_urls() {
        assert_eq!(new_topic_url("/topic/add", "3"), "/topic/add?board=3");
        assert_eq!(chat_url("/chat/", "ann"), "/chat/user/ann");
    }
}
