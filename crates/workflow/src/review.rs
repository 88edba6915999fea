//! Admin review of support applications.
//!
//! [`ReviewController`] mediates the status decisions an admin makes on
//! one or many applications. Transition validity is enforced here,
//! before any request: applications only move from pending to approved
//! or rejected, and a decision on an already-decided application is
//! refused locally.
//!
//! Bulk decisions run concurrently and are deliberately best-effort: one
//! failure neither stops nor rolls back the others. The outcome reports
//! every item individually so the caller can say exactly which
//! applications were left untouched.

use futures::future::join_all;
use givehub_client::ApiClient;
use givehub_core::error::CoreError;
use givehub_core::model::{Application, UpdateApplicationStatus};
use givehub_core::status::{application, ApplicationStatus};
use givehub_core::types::EntityId;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::WorkflowError;
use crate::guard::guarded;

// ---------------------------------------------------------------------------
// Confirmation
// ---------------------------------------------------------------------------

/// Explicit confirmation for destructive actions.
///
/// Deleting is irreversible, so the controllers refuse to run without
/// [`Confirm::Confirmed`]; a UI cannot reach the endpoint without
/// passing its confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Confirmed,
    NotConfirmed,
}

// ---------------------------------------------------------------------------
// Bulk outcome
// ---------------------------------------------------------------------------

/// Result of a bulk decision for a single application.
#[derive(Debug)]
pub struct BulkItem {
    pub application_id: EntityId,
    pub result: Result<Application, WorkflowError>,
}

/// Per-item results of a bulk decision. There is no atomicity: successes
/// stand even when siblings fail.
#[derive(Debug)]
pub struct BulkOutcome {
    /// Correlation id carried in the logs of every item.
    pub operation_id: Uuid,
    pub items: Vec<BulkItem>,
}

impl BulkOutcome {
    /// Number of applications whose status was updated.
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.result.is_ok()).count()
    }

    /// Number of applications left untouched.
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// The ids that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&EntityId, &WorkflowError)> {
        self.items.iter().filter_map(|item| match &item.result {
            Ok(_) => None,
            Err(error) => Some((&item.application_id, error)),
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Mediates application status decisions for the review screens.
pub struct ReviewController {
    client: ApiClient,
    cancel: CancellationToken,
}

impl ReviewController {
    /// Controller with its own cancellation scope.
    pub fn new(client: ApiClient) -> Self {
        Self::with_cancellation(client, CancellationToken::new())
    }

    /// Controller whose requests abort when `cancel` fires, typically a
    /// child token of the owning view.
    pub fn with_cancellation(client: ApiClient, cancel: CancellationToken) -> Self {
        Self { client, cancel }
    }

    /// Token aborting this controller's in-flight requests.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Decide a single application.
    ///
    /// `application` must still be pending and `decision` must be a real
    /// decision; anything else is refused before a request is issued.
    /// When `note` is `None`, an implicit status message is recorded on
    /// the thread so the applicant always sees the decision.
    pub async fn set_status(
        &self,
        application: &Application,
        decision: ApplicationStatus,
        note: Option<String>,
    ) -> Result<Application, WorkflowError> {
        application::validate_transition(application.status, decision)?;

        let update = UpdateApplicationStatus {
            status: decision,
            message: Some(note.unwrap_or_else(|| implicit_note(decision))),
        };

        let updated = guarded(
            &self.cancel,
            self.client.set_application_status(&application.id, &update),
        )
        .await?;

        tracing::info!(
            application_id = %application.id,
            from = application.status.as_str(),
            to = decision.as_str(),
            "Application decided"
        );

        Ok(updated)
    }

    /// Decide many applications at once, concurrently and best-effort.
    ///
    /// Items failing the transition rule are refused locally and appear
    /// in the outcome without a request having been made; the rest are
    /// issued together. Nothing is rolled back on partial failure.
    pub async fn bulk_set_status(
        &self,
        applications: &[Application],
        decision: ApplicationStatus,
    ) -> BulkOutcome {
        let operation_id = Uuid::new_v4();

        let decisions = applications.iter().map(|application| async move {
            let result = self.set_status(application, decision, None).await;
            if let Err(error) = &result {
                tracing::warn!(
                    %operation_id,
                    application_id = %application.id,
                    %error,
                    "Bulk item failed"
                );
            }
            BulkItem {
                application_id: application.id.clone(),
                result,
            }
        });

        let items = join_all(decisions).await;
        let outcome = BulkOutcome { operation_id, items };

        tracing::info!(
            %operation_id,
            total = outcome.items.len(),
            succeeded = outcome.succeeded(),
            failed = outcome.failed(),
            decision = decision.as_str(),
            "Bulk review finished"
        );

        outcome
    }

    /// Delete an application permanently. Refused without
    /// [`Confirm::Confirmed`].
    pub async fn delete(
        &self,
        application_id: &str,
        confirm: Confirm,
    ) -> Result<(), WorkflowError> {
        if confirm != Confirm::Confirmed {
            return Err(CoreError::NotConfirmed("delete an application").into());
        }

        guarded(&self.cancel, self.client.delete_application(application_id)).await?;

        tracing::info!(application_id, "Application deleted");
        Ok(())
    }
}

/// The thread message recorded when the reviewer leaves no note.
fn implicit_note(decision: ApplicationStatus) -> String {
    match decision {
        ApplicationStatus::Approved => "Your application has been approved.".to_string(),
        ApplicationStatus::Rejected => "Your application has been rejected.".to_string(),
        // Unreachable past validate_transition; kept total for match.
        ApplicationStatus::Pending => "Your application status has been updated.".to_string(),
    }
}
