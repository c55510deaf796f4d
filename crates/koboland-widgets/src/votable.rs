//! Votable Widget
//!
//! Like / dislike / share buttons on a post or topic. The vote and share
//! axes are independent; they share only the item id and endpoint.

use crate::attrs::{self, AttributeSource};
use crate::config::UiConfig;
use crate::display::{count_text, DisplayPatch};
use crate::error::WidgetResult;
use crate::notify::{
    Notification, NotificationBody, Outcome, SharePayload, VotePayload, SHARE, UNSHARE,
};
use crate::toggle::{BinaryToggle, Vote, VoteTally};

// Target names inside a votable element
pub const TARGET_LIKE: &str = "like";
pub const TARGET_DISLIKE: &str = "dislike";
pub const TARGET_SHARE: &str = "share";
pub const TARGET_LIKE_COUNT: &str = "likeCount";
pub const TARGET_DISLIKE_COUNT: &str = "dislikeCount";
pub const TARGET_SHARE_COUNT: &str = "shareCount";

/// Kind of votable; selects the payload discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    Post,
    Topic,
}

impl ItemClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemClass::Post => "post",
            ItemClass::Topic => "topic",
        }
    }

    /// `post` is a post; anything else is treated as a topic
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("post") => ItemClass::Post,
            _ => ItemClass::Topic,
        }
    }
}

/// In-memory state of one votable widget
#[derive(Debug, Clone, PartialEq)]
pub struct VotableWidget {
    pub id: String,
    pub class: ItemClass,
    /// Parent topic of a post, used for quoting
    pub topic_id: Option<String>,
    pub tally: VoteTally,
    pub share: BinaryToggle,
}

impl VotableWidget {
    /// Read the widget from its server-rendered attributes
    pub fn from_attributes(source: &impl AttributeSource) -> WidgetResult<Self> {
        let id = attrs::required(source, attrs::ITEM_ID)?;
        let class = ItemClass::from_attr(source.attribute(attrs::ITEM_CLASS).as_deref());
        let vote = Vote::from_attr(source.attribute(attrs::ITEM_VOTE_STATE).as_deref());
        let likes = attrs::count(source, attrs::ITEM_LIKE_COUNT)?;
        let dislikes = attrs::count(source, attrs::ITEM_DISLIKE_COUNT)?;
        let shares = attrs::count(source, attrs::ITEM_SHARE_COUNT)?;
        let shared = attrs::flag(source, attrs::ITEM_SHARED);
        let topic_id = attrs::required(source, attrs::TOPIC_ID).ok();

        Ok(Self {
            id,
            class,
            topic_id,
            tally: VoteTally::new(vote, likes, dislikes),
            share: BinaryToggle::counted(shared, shares),
        })
    }

    pub fn like(&mut self, config: &UiConfig) -> Outcome {
        self.vote(Vote::Like, config)
    }

    pub fn dislike(&mut self, config: &UiConfig) -> Outcome {
        self.vote(Vote::Dislike, config)
    }

    /// Apply a vote request: one patch, one notification
    pub fn vote(&mut self, requested: Vote, config: &UiConfig) -> Outcome {
        self.tally.request(requested);
        let notification = Notification {
            url: config.endpoints.vote.clone(),
            body: NotificationBody::Vote(VotePayload {
                votable_id: self.id.clone(),
                votable_type: self.class.as_str(),
                vote_type: self.tally.vote,
            }),
        };
        Outcome {
            patch: self.vote_patch(&config.checked_class),
            notification,
        }
    }

    /// Flip the share axis: one patch, one notification
    pub fn toggle_share(&mut self, config: &UiConfig) -> Outcome {
        let shared = self.share.flip();
        let notification = Notification {
            url: config.endpoints.vote.clone(),
            body: NotificationBody::Share(SharePayload {
                votable_id: self.id.clone(),
                votable_type: self.class.as_str(),
                vote_type: if shared { SHARE } else { UNSHARE },
                is_shared: shared,
            }),
        };
        Outcome {
            patch: self.share_patch(&config.checked_class),
            notification,
        }
    }

    fn vote_patch(&self, checked_class: &str) -> DisplayPatch {
        let likes = self.tally.likes.get();
        let dislikes = self.tally.dislikes.get();
        DisplayPatch::new()
            .attr(attrs::ITEM_VOTE_STATE, self.tally.vote.as_i8())
            .attr(attrs::ITEM_LIKE_COUNT, likes)
            .attr(attrs::ITEM_DISLIKE_COUNT, dislikes)
            .text(TARGET_LIKE_COUNT, count_text(likes))
            .text(TARGET_DISLIKE_COUNT, count_text(dislikes))
            .class(TARGET_LIKE, checked_class, self.tally.vote == Vote::Like)
            .class(TARGET_DISLIKE, checked_class, self.tally.vote == Vote::Dislike)
    }

    fn share_patch(&self, checked_class: &str) -> DisplayPatch {
        let shares = self.share.count();
        DisplayPatch::new()
            .attr(attrs::ITEM_SHARED, if self.share.active { "1" } else { "0" })
            .attr(attrs::ITEM_SHARE_COUNT, shares)
            .text(TARGET_SHARE_COUNT, count_text(shares))
            .class(TARGET_SHARE, checked_class, self.share.active)
    }

    /// Reply form location that quotes this item
    pub fn quote_url(&self, comment_path: &str) -> String {
        match self.class {
            ItemClass::Topic => format!("{}?topic={}&quote_topic=1", comment_path, self.id),
            ItemClass::Post => format!(
                "{}?topic={}&post={}",
                comment_path,
                self.topic_id.as_deref().unwrap_or_default(),
                self.id
            ),
        }
    }
}
