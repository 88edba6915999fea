//! Status vocabularies for applications and campaigns, plus the
//! transition rules the client enforces before issuing a request.
//!
//! Applications move one way: a pending application is approved or
//! rejected, and both outcomes are terminal. Campaigns deliberately have
//! no one-way graph: an admin may reactivate a completed or cancelled
//! campaign, so every change of campaign status is permitted and only a
//! same-status no-op is refused.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Application status
// ---------------------------------------------------------------------------

/// Review status of a support application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Campaign status
// ---------------------------------------------------------------------------

/// Lifecycle status of a fundraising campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transition rules
// ---------------------------------------------------------------------------

/// Application status transitions.
pub mod application {
    use super::ApplicationStatus::{self, *};
    use crate::error::CoreError;

    /// Returns the set of statuses reachable from `from`.
    ///
    /// Approved and rejected are terminal: the review screens never offer
    /// a reversal, and the controller refuses one.
    pub fn valid_transitions(from: ApplicationStatus) -> &'static [ApplicationStatus] {
        match from {
            Pending => &[Approved, Rejected],
            Approved | Rejected => &[],
        }
    }

    pub fn can_transition(from: ApplicationStatus, to: ApplicationStatus) -> bool {
        valid_transitions(from).contains(&to)
    }

    pub fn validate_transition(
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<(), CoreError> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity: "Application",
                from: from.as_str(),
                to: to.as_str(),
            })
        }
    }
}

/// Campaign status transitions.
pub mod campaign {
    use super::CampaignStatus::{self, *};
    use crate::error::CoreError;

    /// Returns the set of statuses reachable from `from`: every status
    /// except the current one, reactivation included.
    pub fn valid_transitions(from: CampaignStatus) -> &'static [CampaignStatus] {
        match from {
            Active => &[Completed, Cancelled],
            Completed => &[Active, Cancelled],
            Cancelled => &[Active, Completed],
        }
    }

    pub fn can_transition(from: CampaignStatus, to: CampaignStatus) -> bool {
        valid_transitions(from).contains(&to)
    }

    pub fn validate_transition(from: CampaignStatus, to: CampaignStatus) -> Result<(), CoreError> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                entity: "Campaign",
                from: from.as_str(),
                to: to.as_str(),
            })
        }
    }
}
