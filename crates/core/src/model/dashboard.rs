//! Admin dashboard statistics.

use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub completed_campaigns: u64,
    pub total_applications: u64,
    pub pending_applications: u64,
    pub approved_applications: u64,
    pub rejected_applications: u64,
    /// Sum of `amountNeeded` across active campaigns.
    pub total_amount_needed: f64,
}
