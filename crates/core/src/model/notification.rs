//! Notifications and their related-entity links.

use serde::{Deserialize, Serialize};

use crate::model::user::UserRef;
use crate::types::{EntityId, Timestamp};

/// Category of a notification, from the wire `type` field.
///
/// Unknown future categories decode as [`NotificationKind::Other`]
/// instead of failing the whole feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Application,
    Campaign,
    Message,
    #[serde(other)]
    Other,
}

/// The entity a notification points at, used for deep linking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedTo {
    /// Server-side model name: `"Application"`, `"Campaign"`, or
    /// `"Message"`.
    pub model: String,
    pub id: EntityId,
}

/// A system-generated alert for one recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub recipient: UserRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<UserRef>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_to: Option<RelatedTo>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: Timestamp,
}
