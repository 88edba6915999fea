//! Notification feed with server-acknowledged read-state.
//!
//! Local state only moves after the server confirms: `mark_read`,
//! `mark_all_read`, and `delete` leave the list untouched when the call
//! fails, and the error goes back to the caller. Nothing retries
//! automatically. Tab filtering is purely in-memory.

use givehub_client::ApiClient;
use givehub_core::model::Notification;
use givehub_core::CoreError;
use tokio_util::sync::CancellationToken;

use crate::error::WorkflowError;
use crate::guard::guarded;

/// Tabs of the notifications view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
    Read,
}

/// Stateful notification list for one view.
pub struct NotificationFeed {
    client: ApiClient,
    notifications: Vec<Notification>,
    cancel: CancellationToken,
}

impl NotificationFeed {
    pub fn new(client: ApiClient) -> Self {
        Self::with_cancellation(client, CancellationToken::new())
    }

    pub fn with_cancellation(client: ApiClient, cancel: CancellationToken) -> Self {
        Self {
            client,
            notifications: Vec::new(),
            cancel,
        }
    }

    /// Reload the feed from the server.
    pub async fn refresh(&mut self) -> Result<(), WorkflowError> {
        let notifications = guarded(&self.cancel, self.client.notifications()).await?;
        tracing::debug!(count = notifications.len(), "Notification feed refreshed");
        self.notifications = notifications;
        Ok(())
    }

    /// Unread entries in the loaded feed (no network).
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Unread count from the dedicated endpoint, for the bell badge
    /// without loading the feed.
    pub async fn fetch_unread_count(&self) -> Result<u64, WorkflowError> {
        guarded(&self.cancel, self.client.unread_notification_count()).await
    }

    /// Mark one notification read. The local flag flips only after the
    /// server acknowledges; on failure the entry stays unread and the
    /// error is returned. An id not in the loaded feed is refused
    /// without a request.
    pub async fn mark_read(&mut self, id: &str) -> Result<(), WorkflowError> {
        let position = self.position_of(id)?;

        guarded(&self.cancel, self.client.mark_notification_read(id)).await?;
        self.notifications[position].is_read = true;
        Ok(())
    }

    /// Mark the whole feed read in one round-trip.
    pub async fn mark_all_read(&mut self) -> Result<(), WorkflowError> {
        guarded(&self.cancel, self.client.mark_all_notifications_read()).await?;

        for notification in &mut self.notifications {
            notification.is_read = true;
        }
        Ok(())
    }

    /// Delete a notification. The local entry goes only after the server
    /// confirms.
    pub async fn delete(&mut self, id: &str) -> Result<(), WorkflowError> {
        self.position_of(id)?;

        guarded(&self.cancel, self.client.delete_notification(id)).await?;
        self.notifications.retain(|n| n.id != id);
        Ok(())
    }

    fn position_of(&self, id: &str) -> Result<usize, WorkflowError> {
        self.notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Notification",
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// The entries under `tab`, in feed order.
    pub fn filter(&self, tab: NotificationTab) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| match tab {
                NotificationTab::All => true,
                NotificationTab::Unread => !n.is_read,
                NotificationTab::Read => n.is_read,
            })
            .collect()
    }

    /// All loaded entries, in feed order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The in-app path a notification links to, when its related entity
    /// is navigable.
    ///
    /// Message notifications carry the owning application's id (threads
    /// are read inside the application detail), so they share the
    /// application path. Unknown models yield `None` and the view
    /// renders an inert entry.
    pub fn link_for(notification: &Notification) -> Option<String> {
        let related = notification.related_to.as_ref()?;
        match related.model.as_str() {
            "Application" | "Message" => Some(format!("/applications/{}", related.id)),
            "Campaign" => Some(format!("/campaigns/{}", related.id)),
            _ => None,
        }
    }
}
