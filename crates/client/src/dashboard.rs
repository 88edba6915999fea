//! Admin dashboard endpoint.

use givehub_core::model::DashboardStats;
use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `GET /api/dashboard/stats` — the admin overview counters.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let request = self.request(Method::GET, "/api/dashboard/stats");
        self.send_json(request, "dashboard stats").await
    }
}
