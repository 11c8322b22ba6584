use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationPreferences {
    pub id: i32,
    pub admin_id: i32,
    pub email_new_application: bool,
    pub email_new_message: bool,
    pub email_weekly_report: bool,
    pub email_monthly_report: bool,
    pub push_new_application: bool,
    pub push_new_message: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SystemSettings {
    pub id: i32,
    pub admin_id: i32,
    pub site_name: String,
    pub site_email: Option<String>,
    pub site_phone: Option<String>,
    pub site_address: Option<String>,
    pub maintenance_mode: bool,
    pub allow_registrations: bool,
    pub social_facebook: Option<String>,
    pub social_twitter: Option<String>,
    pub social_linkedin: Option<String>,
    pub social_instagram: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
