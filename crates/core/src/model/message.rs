//! Conversation messages.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::UserRef;
use crate::types::{EntityId, Timestamp};

/// One message in an application's conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub sender: UserRef,
    pub content: String,
    /// Set by the server when the sender holds an admin role; drives the
    /// side a bubble renders on.
    #[serde(default)]
    pub is_admin_message: bool,
    pub created_at: Timestamp,
}

/// Request body for `POST /api/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
    /// Id of the application whose thread receives the message.
    pub application: EntityId,
    #[validate(length(min = 1, message = "Message content is required"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_decodes_with_embedded_sender() {
        let message: Message = serde_json::from_str(
            r#"{
                "_id": "m1",
                "sender": { "_id": "u7", "fullName": "Joseph Okafor" },
                "content": "Thank you for the update",
                "isAdminMessage": false,
                "createdAt": "2024-05-02T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(message.id, "m1");
        assert_eq!(message.sender.id(), "u7");
        assert!(!message.is_admin_message);
    }

    #[test]
    fn admin_flag_defaults_to_false_when_absent() {
        let message: Message = serde_json::from_str(
            r#"{
                "id": "m2",
                "sender": "u7",
                "content": "hello",
                "createdAt": "2024-05-02T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert!(!message.is_admin_message);
    }
}
