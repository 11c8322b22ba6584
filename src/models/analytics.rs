use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One day of site traffic, written by an external collector. The dashboard
/// and analytics endpoints read the latest row and fall back to canned
/// figures when the table is empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalyticsSnapshot {
    pub id: i32,
    pub snapshot_date: DateTime<Utc>,
    pub visitors: i32,
    pub page_views: i32,
    pub bounce_rate: f64,
    pub avg_duration_seconds: i32,
    pub source_direct: f64,
    pub source_google: f64,
    pub source_social: f64,
    pub source_referral: f64,
    pub device_desktop: f64,
    pub device_mobile: f64,
    pub device_tablet: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PageViewStat {
    pub id: i32,
    pub page_path: String,
    pub snapshot_date: DateTime<Utc>,
    pub views: i32,
    pub unique_visitors: i32,
    pub avg_time_seconds: i32,
    pub bounce_rate: f64,
}
