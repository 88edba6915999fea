//! Campaign application eligibility.
//!
//! A user may apply to a campaign iff the campaign is active, the user is
//! signed in, and they have not already applied to that campaign. The
//! same rule gates the apply button and the workflow-level submission
//! path, so both agree on every refusal.

use crate::error::CoreError;
use crate::model::{Application, Campaign, User};
use crate::status::CampaignStatus;

/// True iff `user` may submit a new application for `campaign`.
///
/// `existing` is the user's current application list. Any scope that
/// includes their applications for this campaign works; entries for other
/// campaigns or other users are ignored.
pub fn can_apply(campaign: &Campaign, user: Option<&User>, existing: &[Application]) -> bool {
    check_can_apply(campaign, user, existing).is_ok()
}

/// Like [`can_apply`], but explains the refusal.
pub fn check_can_apply(
    campaign: &Campaign,
    user: Option<&User>,
    existing: &[Application],
) -> Result<(), CoreError> {
    if campaign.status != CampaignStatus::Active {
        return Err(CoreError::Validation(format!(
            "Campaign '{}' is not accepting applications",
            campaign.title
        )));
    }

    let user = user
        .ok_or_else(|| CoreError::Validation("You must be signed in to apply".to_string()))?;

    let already_applied = existing.iter().any(|application| {
        application.user.id() == user.id
            && application.campaign.as_deref() == Some(campaign.id.as_str())
    });

    if already_applied {
        return Err(CoreError::Conflict(
            "You have already applied to this campaign".to_string(),
        ));
    }

    Ok(())
}
