use serde::{Deserialize, Serialize};

use crate::dto::dashboard_dto::{DeviceShare, TrafficSource};

/// Percentages and durations are pre-formatted strings ("34.5%", "3m 5s")
/// because the admin panel renders them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsStats {
    pub visitors: i64,
    pub page_views: i64,
    pub bounce_rate: String,
    pub avg_duration: String,
    pub applications: i64,
    pub conversion_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStat {
    pub page: String,
    pub views: i64,
    pub unique_visitors: i64,
    pub avg_time: String,
    pub bounce_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularJob {
    pub title: String,
    pub applications: i64,
    pub views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub stats: AnalyticsStats,
    pub traffic_sources: Vec<TrafficSource>,
    pub devices: Vec<DeviceShare>,
    pub top_pages: Vec<PageStat>,
    pub popular_jobs: Vec<PopularJob>,
}
