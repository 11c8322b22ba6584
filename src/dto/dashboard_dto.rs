use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_applications: i64,
    pub active_jobs: i64,
    pub total_visitors: i64,
    pub total_page_views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentApplication {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    pub visitors: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceShare {
    pub name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_applications: Vec<RecentApplication>,
    pub traffic_sources: Vec<TrafficSource>,
    pub devices: Vec<DeviceShare>,
}
