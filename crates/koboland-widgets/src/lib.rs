//! Koboland Widgets
//!
//! Browser-independent core of the forum frontend:
//! - toggle: vote / share / follow state machines
//! - votable, follow: widget adapters reading server-rendered attributes
//! - display, notify: the DOM patch and request each action produces
//! - actions, cookie, upload, form, location: controller plumbing rules
//!
//! Nothing here touches the DOM or the network, so every decision the
//! controllers make is testable natively.

pub mod actions;
pub mod attrs;
pub mod config;
pub mod cookie;
pub mod display;
pub mod error;
pub mod follow;
pub mod form;
pub mod location;
pub mod notify;
pub mod toggle;
pub mod upload;
pub mod votable;


pub use attrs::AttributeSource;
pub use config::{Endpoints, UiConfig};
pub use display::{DisplayPatch, DomOp};
pub use error::{WidgetError, WidgetResult};
pub use follow::{FollowWidget, Followable};
pub use notify::{Notification, NotificationBody, Outcome, SyncReport};
pub use toggle::{transition, BinaryToggle, Counter, Vote, VoteTally, VoteTransition};
pub use votable::{ItemClass, VotableWidget};
