//! Support applications and their submission payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::message::Message;
use crate::model::user::UserRef;
use crate::status::ApplicationStatus;
use crate::types::{EntityId, Timestamp};

/// A user's request for support, reviewed by admins.
///
/// `messages` is the application's conversation thread. The server keeps
/// it append-only and chronological; clients never re-sort it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub status: ApplicationStatus,
    pub user: UserRef,
    /// Id of the campaign this application targets, absent for general
    /// support requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<EntityId>,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Server URLs of the uploaded supporting documents.
    #[serde(default)]
    pub documents: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Text fields of `POST /api/applications`; the supporting documents ride
/// alongside in the same multipart request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplication {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Campaign the application targets; omitted for general requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<EntityId>,
}

/// Request body for `PUT /api/applications/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatus {
    pub status: ApplicationStatus,
    /// Review note recorded on the application's thread alongside the
    /// status change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
