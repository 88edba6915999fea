//! Campaign endpoints.

use givehub_core::model::{Campaign, CreateCampaign, UpdateCampaign, UpdateCampaignStatus};
use givehub_core::status::CampaignStatus;
use givehub_core::validation::{self, DocumentUpload};
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /api/campaigns` — every campaign regardless of status (the
    /// admin listing).
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let request = self.request(Method::GET, "/api/campaigns");
        self.send_json(request, "campaign list").await
    }

    /// `GET /api/campaigns/active` — the public listing.
    pub async fn active_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let request = self.request(Method::GET, "/api/campaigns/active");
        self.send_json(request, "active campaigns").await
    }

    /// `GET /api/campaigns/completed`
    pub async fn completed_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let request = self.request(Method::GET, "/api/campaigns/completed");
        self.send_json(request, "completed campaigns").await
    }

    /// `GET /api/campaigns/{id}`
    pub async fn campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        let request = self.request(Method::GET, &format!("/api/campaigns/{id}"));
        self.send_json(request, "campaign").await
    }

    /// `POST /api/campaigns` — admin only.
    pub async fn create_campaign(&self, input: &CreateCampaign) -> Result<Campaign, ApiError> {
        validation::validate_request(input)?;

        let request = self.request(Method::POST, "/api/campaigns").json(input);
        let campaign: Campaign = self.send_json(request, "campaign create").await?;

        tracing::info!(campaign_id = %campaign.id, title = %campaign.title, "Campaign created");
        Ok(campaign)
    }

    /// `PUT /api/campaigns/{id}` — partial update of the text fields and
    /// bank details.
    pub async fn update_campaign(
        &self,
        id: &str,
        input: &UpdateCampaign,
    ) -> Result<Campaign, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/campaigns/{id}"))
            .json(input);
        self.send_json(request, "campaign update").await
    }

    /// `PUT /api/campaigns/{id}/images` — replace the campaign's image
    /// set with the uploaded files (multipart).
    pub async fn update_campaign_images(
        &self,
        id: &str,
        images: &[DocumentUpload],
    ) -> Result<Campaign, ApiError> {
        validation::validate_files(images)?;

        let mut form = reqwest::multipart::Form::new();
        for image in images {
            let part = reqwest::multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }

        let request = self
            .request(Method::PUT, &format!("/api/campaigns/{id}/images"))
            .multipart(form);
        self.send_json(request, "campaign images").await
    }

    /// `PUT /api/campaigns/{id}/status`
    ///
    /// The endpoint accepts any status change, reactivation included; the
    /// same-status no-op guard lives in the workflow layer.
    pub async fn set_campaign_status(
        &self,
        id: &str,
        status: CampaignStatus,
    ) -> Result<Campaign, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/campaigns/{id}/status"))
            .json(&UpdateCampaignStatus { status });
        let campaign: Campaign = self.send_json(request, "campaign status").await?;

        tracing::info!(campaign_id = %id, status = %status, "Campaign status updated");
        Ok(campaign)
    }

    /// `DELETE /api/campaigns/{id}`
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/campaigns/{id}"));
        self.send_unit(request, "campaign delete").await
    }
}
