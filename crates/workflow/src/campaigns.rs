//! Campaign lifecycle actions and the application eligibility gate.
//!
//! Campaigns have no one-way lifecycle: completed and cancelled
//! campaigns may be reactivated, so [`CampaignDesk::set_status`] permits
//! any change and refuses only the same-status no-op. Applying to a
//! campaign runs the eligibility gate first, so inactive campaigns and
//! duplicate applications are refused with the precise reason before any
//! upload starts.

use givehub_client::ApiClient;
use givehub_core::eligibility;
use givehub_core::model::{Application, Campaign, SubmitApplication, User};
use givehub_core::status::{campaign as campaign_rules, CampaignStatus};
use givehub_core::validation::DocumentUpload;
use tokio_util::sync::CancellationToken;

use crate::error::WorkflowError;
use crate::guard::guarded;

/// Campaign management and application submission for one view.
pub struct CampaignDesk {
    client: ApiClient,
    cancel: CancellationToken,
}

impl CampaignDesk {
    pub fn new(client: ApiClient) -> Self {
        Self::with_cancellation(client, CancellationToken::new())
    }

    pub fn with_cancellation(client: ApiClient, cancel: CancellationToken) -> Self {
        Self { client, cancel }
    }

    /// Whether `user` may apply to `campaign` given their existing
    /// applications. The same rule gates [`CampaignDesk::apply`].
    pub fn can_apply(campaign: &Campaign, user: Option<&User>, existing: &[Application]) -> bool {
        eligibility::can_apply(campaign, user, existing)
    }

    /// Change a campaign's status, reactivation included. A transition
    /// to the current status is refused locally.
    pub async fn set_status(
        &self,
        campaign: &Campaign,
        new_status: CampaignStatus,
    ) -> Result<Campaign, WorkflowError> {
        campaign_rules::validate_transition(campaign.status, new_status)?;

        let updated = guarded(
            &self.cancel,
            self.client.set_campaign_status(&campaign.id, new_status),
        )
        .await?;

        tracing::info!(
            campaign_id = %campaign.id,
            from = campaign.status.as_str(),
            to = new_status.as_str(),
            "Campaign status changed"
        );

        Ok(updated)
    }

    /// Submit an application for `campaign` as `user`.
    ///
    /// Runs the eligibility gate, then submits with the campaign id
    /// pinned to the gated campaign regardless of what `input` carried.
    pub async fn apply(
        &self,
        campaign: &Campaign,
        user: &User,
        existing: &[Application],
        input: &SubmitApplication,
        documents: &[DocumentUpload],
    ) -> Result<Application, WorkflowError> {
        eligibility::check_can_apply(campaign, Some(user), existing)?;

        let submission = SubmitApplication {
            campaign: Some(campaign.id.clone()),
            ..input.clone()
        };

        let application = guarded(
            &self.cancel,
            self.client.submit_application(&submission, documents),
        )
        .await?;

        tracing::info!(
            application_id = %application.id,
            campaign_id = %campaign.id,
            user_id = %user.id,
            "Application submitted for campaign"
        );

        Ok(application)
    }
}
