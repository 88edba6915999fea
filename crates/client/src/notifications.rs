//! Notification endpoints.

use givehub_core::model::Notification;
use reqwest::Method;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Wire shape of `GET /api/notifications/unread-count`.
#[derive(Debug, Deserialize)]
struct UnreadCount {
    count: u64,
}

impl ApiClient {
    /// `GET /api/notifications` — the signed-in user's feed, newest
    /// first.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let request = self.request(Method::GET, "/api/notifications");
        self.send_json(request, "notification list").await
    }

    /// `GET /api/notifications/unread-count` — for the bell badge,
    /// without loading the feed.
    pub async fn unread_notification_count(&self) -> Result<u64, ApiError> {
        let request = self.request(Method::GET, "/api/notifications/unread-count");
        let payload: UnreadCount = self.send_json(request, "unread count").await?;
        Ok(payload.count)
    }

    /// `PUT /api/notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::PUT, &format!("/api/notifications/{id}/read"));
        self.send_unit(request, "notification read").await
    }

    /// `PUT /api/notifications/mark-all-read`
    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        let request = self.request(Method::PUT, "/api/notifications/mark-all-read");
        self.send_unit(request, "notifications read all").await
    }

    /// `DELETE /api/notifications/{id}`
    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/notifications/{id}"));
        self.send_unit(request, "notification delete").await
    }
}
