use serde::{Deserialize, Serialize};

use crate::models::settings::{NotificationPreferences, SystemSettings};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettingsResponse {
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
}

impl From<SystemSettings> for SystemSettingsResponse {
    fn from(value: SystemSettings) -> Self {
        Self {
            site_name: value.site_name,
            site_email: value.site_email,
            site_phone: value.site_phone,
            site_address: value.site_address,
            maintenance_mode: value.maintenance_mode,
            allow_registrations: value.allow_registrations,
            social_facebook: value.social_facebook,
            social_twitter: value.social_twitter,
            social_linkedin: value.social_linkedin,
            social_instagram: value.social_instagram,
        }
    }
}

/// Partial update; only fields present in the request change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SystemSettingsUpdate {
    pub site_name: Option<String>,
    pub site_email: Option<String>,
    pub site_phone: Option<String>,
    pub site_address: Option<String>,
    pub maintenance_mode: Option<bool>,
    pub allow_registrations: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialMediaUpdate {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefsResponse {
    pub email_new_application: bool,
    pub email_new_message: bool,
    pub email_weekly_report: bool,
    pub email_monthly_report: bool,
    pub push_new_application: bool,
    pub push_new_message: bool,
}

impl From<NotificationPreferences> for NotificationPrefsResponse {
    fn from(value: NotificationPreferences) -> Self {
        Self {
            email_new_application: value.email_new_application,
            email_new_message: value.email_new_message,
            email_weekly_report: value.email_weekly_report,
            email_monthly_report: value.email_monthly_report,
            push_new_application: value.push_new_application,
            push_new_message: value.push_new_message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NotificationPrefsUpdate {
    pub email_new_application: Option<bool>,
    pub email_new_message: Option<bool>,
    pub email_weekly_report: Option<bool>,
    pub email_monthly_report: Option<bool>,
    pub push_new_application: Option<bool>,
    pub push_new_message: Option<bool>,
}

/// Public site identity block. Defaults are served when nothing has been
/// configured yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSettingsResponse {
    pub site_name: String,
    pub site_email: Option<String>,
    pub site_phone: Option<String>,
    pub site_address: Option<String>,
    pub social_facebook: Option<String>,
    pub social_twitter: Option<String>,
    pub social_linkedin: Option<String>,
    pub social_instagram: Option<String>,
}

impl PublicSettingsResponse {
    pub fn defaults() -> Self {
        Self {
            site_name: "Luton Friendship Homecarers".to_string(),
            site_email: Some("info@lutonfhc.org.uk".to_string()),
            site_phone: Some("+44 1582 000000".to_string()),
            site_address: Some("Luton, Bedfordshire, UK".to_string()),
            social_facebook: Some(String::new()),
            social_twitter: Some(String::new()),
            social_linkedin: Some(String::new()),
            social_instagram: Some(String::new()),
        }
    }
}

impl From<SystemSettings> for PublicSettingsResponse {
    fn from(value: SystemSettings) -> Self {
        Self {
            site_name: value.site_name,
            site_email: value.site_email,
            site_phone: value.site_phone,
            site_address: value.site_address,
            social_facebook: value.social_facebook,
            social_twitter: value.social_twitter,
            social_linkedin: value.social_linkedin,
            social_instagram: value.social_instagram,
        }
    }
}
