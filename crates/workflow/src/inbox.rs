//! The messages page: conversations over application threads.
//!
//! [`Inbox`] owns the fetched application list and derives conversation
//! summaries on demand through `givehub_core::conversation`. Sending a
//! message goes through the API first; the local copy then gets the
//! created message appended immutably, so the next derivation shows the
//! new tail exactly once and recent ordering reflects it.
//!
//! Read cursors are the viewer's own bookkeeping (the platform API has
//! no per-message read-state); they start empty and advance as
//! conversations are opened.

use givehub_client::ApiClient;
use givehub_core::conversation::{self, AssembleOptions, Conversation, ReadCursors};
use givehub_core::model::{Application, Message, SendMessage};
use givehub_core::types::Timestamp;
use tokio_util::sync::CancellationToken;

use crate::error::WorkflowError;
use crate::guard::guarded;

/// Which applications the inbox shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxScope {
    /// Every application (the admin messages page).
    AllApplications,
    /// Only the signed-in user's applications.
    MyApplications,
}

/// Stateful conversation list for one messages view.
pub struct Inbox {
    client: ApiClient,
    scope: InboxScope,
    options: AssembleOptions,
    applications: Vec<Application>,
    cursors: Option<ReadCursors>,
    cancel: CancellationToken,
}

impl Inbox {
    pub fn new(client: ApiClient, scope: InboxScope) -> Self {
        Self::with_cancellation(client, scope, CancellationToken::new())
    }

    pub fn with_cancellation(
        client: ApiClient,
        scope: InboxScope,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            scope,
            options: AssembleOptions::default(),
            applications: Vec::new(),
            cursors: None,
            cancel,
        }
    }

    /// Track read positions for a viewer, enabling unread counts.
    pub fn with_read_cursors(mut self, cursors: ReadCursors) -> Self {
        self.cursors = Some(cursors);
        self
    }

    /// The assembly options (order, search, status filter), for the view
    /// to adjust between derivations.
    pub fn options_mut(&mut self) -> &mut AssembleOptions {
        &mut self.options
    }

    /// Refetch the application list for this scope.
    pub async fn refresh(&mut self) -> Result<(), WorkflowError> {
        let applications = match self.scope {
            InboxScope::AllApplications => {
                guarded(&self.cancel, self.client.list_applications()).await?
            }
            InboxScope::MyApplications => {
                guarded(&self.cancel, self.client.my_applications()).await?
            }
        };

        tracing::debug!(count = applications.len(), scope = ?self.scope, "Inbox refreshed");
        self.applications = applications;
        Ok(())
    }

    /// Derive the conversation list under the current options.
    pub fn conversations(&self) -> Vec<Conversation> {
        conversation::assemble(&self.applications, &self.options, self.cursors.as_ref())
    }

    /// Send a message on an application's thread.
    ///
    /// The server creates the message; the local application copy is
    /// then replaced by one carrying the appended thread. If the
    /// application is not in this inbox (a stale view), the message was
    /// still sent and is returned.
    pub async fn send_message(
        &mut self,
        application_id: &str,
        content: impl Into<String>,
    ) -> Result<Message, WorkflowError> {
        let input = SendMessage {
            application: application_id.to_string(),
            content: content.into(),
        };

        let message = guarded(&self.cancel, self.client.send_message(&input)).await?;

        match self
            .applications
            .iter()
            .position(|application| application.id == application_id)
        {
            Some(position) => {
                self.applications[position] =
                    conversation::append_message(&self.applications[position], message.clone());
            }
            None => {
                tracing::warn!(application_id, "Message sent for an application not in this inbox");
            }
        }

        tracing::debug!(application_id, message_id = %message.id, "Message sent");
        Ok(message)
    }

    /// Advance the viewer's read cursor for a conversation. A no-op when
    /// the inbox tracks no cursors.
    pub fn mark_conversation_read(&mut self, application_id: &str, at: Timestamp) {
        if let Some(cursors) = &mut self.cursors {
            cursors.mark_read(application_id, at);
        }
    }

    /// The fetched applications backing the conversation list.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}
