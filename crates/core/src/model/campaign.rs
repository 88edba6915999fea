//! Fundraising campaigns and their admin payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::application::Application;
use crate::model::user::UserRef;
use crate::status::CampaignStatus;
use crate::types::{EntityId, Timestamp};

/// Bank account receiving donations for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[validate(length(min = 1, message = "Account number is required"))]
    pub account_number: String,
    #[validate(length(min = 1, message = "Account name is required"))]
    pub account_name: String,
    #[validate(length(min = 1, message = "Bank name is required"))]
    pub bank_name: String,
}

/// A fundraising initiative with a funding target and payout details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Ordered image URLs; the first is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    pub amount_needed: f64,
    pub bank_details: BankDetails,
    pub status: CampaignStatus,
    pub created_by: UserRef,
    /// Applications tied to this campaign, populated only on detail
    /// views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<Application>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/campaigns` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1.0, message = "Amount needed must be at least 1"))]
    pub amount_needed: f64,
    #[validate(nested)]
    pub bank_details: BankDetails,
}

/// Request body for `PUT /api/campaigns/{id}`; only the provided fields
/// change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_needed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

/// Request body for `PUT /api/campaigns/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCampaignStatus {
    pub status: CampaignStatus,
}
