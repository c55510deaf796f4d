//! Server Notifications
//!
//! Request bodies for the vote, share and follow endpoints. A transition
//! produces exactly one `Notification` alongside its `DisplayPatch`.

use serde::Serialize;
use crate::display::DisplayPatch;
use crate::toggle::Vote;

/// `vote_type` values the vote endpoint uses for the share axis
pub const SHARE: i8 = 2;
pub const UNSHARE: i8 = -2;

/// Vote on a post or topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VotePayload {
    pub votable_id: String,
    pub votable_type: &'static str,
    pub vote_type: Vote,
}

/// Share or unshare a post or topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharePayload {
    pub votable_id: String,
    pub votable_type: &'static str,
    pub vote_type: i8,
    pub is_shared: bool,
}

/// Entity key of a follow request, serialized as `{"<entity>": id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowKey {
    Board(String),
    Topic(String),
    User(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowPayload {
    #[serde(flatten)]
    pub key: FollowKey,
    pub follow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NotificationBody {
    Vote(VotePayload),
    Share(SharePayload),
    Follow(FollowPayload),
}

/// One outbound JSON request
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub url: String,
    pub body: NotificationBody,
}

impl Notification {
    /// Short tag used in logs and sync reports
    pub fn kind(&self) -> &'static str {
        match &self.body {
            NotificationBody::Vote(_) => "vote",
            NotificationBody::Share(_) => "share",
            NotificationBody::Follow(_) => "follow",
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_default()
    }
}

/// Outcome of a dispatched notification, reported to page listeners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    pub ok: bool,
    pub kind: &'static str,
    pub url: String,
    pub status: Option<u16>,
    pub message: String,
}

impl SyncReport {
    /// Any 2xx status counts as delivered
    pub fn from_status(notification: &Notification, status: u16) -> Self {
        let ok = (200..300).contains(&status);
        Self {
            ok,
            kind: notification.kind(),
            url: notification.url.clone(),
            status: Some(status),
            message: if ok {
                String::new()
            } else {
                format!("server answered {}", status)
            },
        }
    }

    /// The request never produced a response
    pub fn from_error(notification: &Notification, error: &str) -> Self {
        Self {
            ok: false,
            kind: notification.kind(),
            url: notification.url.clone(),
            status: None,
            message: error.to_string(),
        }
    }
}

/// Everything one user action produces: one DOM patch, one request
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub patch: DisplayPatch,
    pub notification: Notification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vote_body() {
        let body = NotificationBody::Vote(VotePayload {
            votable_id: "12".into(),
            votable_type: "post",
            vote_type: Vote::Dislike,
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"votable_id": "12", "votable_type": "post", "vote_type": -1})
        );
    }

    #[test]
    fn test_follow_body_uses_entity_key() {
        let body = NotificationBody::Follow(FollowPayload {
            key: FollowKey::Board("7".into()),
            follow: true,
        });
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"board": "7", "follow": true}));

        let body = NotificationBody::Follow(FollowPayload {
            key: FollowKey::User("ann".into()),
            follow: false,
        });
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"user": "ann", "follow": false}));
    }

    #[test]
    fn test_sync_report() {
        let notification = Notification {
            url: "/api/board/follow/".into(),
            body: NotificationBody::Follow(FollowPayload {
                key: FollowKey::Board("1".into()),
                follow: true,
            }),
        };
        let delivered = SyncReport::from_status(&notification, 201);
        assert!(delivered.ok);
        assert_eq!(delivered.kind, "follow");

        let rejected = SyncReport::from_status(&notification, 403);
        assert!(!rejected.ok);
        assert_eq!(rejected.message, "server answered 403");

        let lost = SyncReport::from_error(&notification, "NetworkError");
        assert!(!lost.ok);
        assert_eq!(lost.status, None);
        assert_eq!(
            serde_json::to_value(&lost).unwrap(),
            json!({
                "ok": false,
                "kind": "follow",
                "url": "/api/board/follow/",
                "status": null,
                "message": "NetworkError"
            })
        );
    }

    #[test]
    fn test_share_body() {
        let notification = Notification {
            url: "/api-auth/vote/".into(),
            body: NotificationBody::Share(SharePayload {
                votable_id: "3".into(),
                votable_type: "topic",
                vote_type: UNSHARE,
                is_shared: false,
            }),
        };
        assert_eq!(notification.kind(), "share");
        let value: serde_json::Value = serde_json::from_str(&notification.to_json()).unwrap();
        assert_eq!(
            value,
            json!({"votable_id": "3", "votable_type": "topic", "vote_type": -2, "is_shared": false})
        );
    }
}
