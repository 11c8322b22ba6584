use crate::dto::settings_dto::{
    NotificationPrefsUpdate, PublicSettingsResponse, SocialMediaUpdate, SystemSettingsUpdate,
};
use crate::error::{Error, Result};
use crate::models::settings::{NotificationPreferences, SystemSettings};
use sqlx::PgPool;

const SETTINGS_COLUMNS: &str = "id, admin_id, site_name, site_email, site_phone, site_address, \
     maintenance_mode, allow_registrations, social_facebook, social_twitter, social_linkedin, \
     social_instagram, updated_at";

const PREFS_COLUMNS: &str = "id, admin_id, email_new_application, email_new_message, \
     email_weekly_report, email_monthly_report, push_new_application, push_new_message, updated_at";

/// Per-admin system settings and notification preferences. Rows are created
/// at seed time; the update paths only touch existing rows.
#[derive(Clone)]
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn system(&self, admin_id: i32) -> Result<SystemSettings> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM system_settings WHERE admin_id = $1");
        sqlx::query_as::<_, SystemSettings>(&query)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("System settings not found".to_string()))
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update_system(
        &self,
        admin_id: i32,
        update: &SystemSettingsUpdate,
    ) -> Result<SystemSettings> {
        let query = format!(
            "UPDATE system_settings
             SET site_name = COALESCE($2, site_name),
                 site_email = COALESCE($3, site_email),
                 site_phone = COALESCE($4, site_phone),
                 site_address = COALESCE($5, site_address),
                 maintenance_mode = COALESCE($6, maintenance_mode),
                 allow_registrations = COALESCE($7, allow_registrations),
                 updated_at = NOW()
             WHERE admin_id = $1
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, SystemSettings>(&query)
            .bind(admin_id)
            .bind(&update.site_name)
            .bind(&update.site_email)
            .bind(&update.site_phone)
            .bind(&update.site_address)
            .bind(update.maintenance_mode)
            .bind(update.allow_registrations)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("System settings not found".to_string()))
    }

    pub async fn update_social(
        &self,
        admin_id: i32,
        update: &SocialMediaUpdate,
    ) -> Result<SystemSettings> {
        let query = format!(
            "UPDATE system_settings
             SET social_facebook = COALESCE($2, social_facebook),
                 social_twitter = COALESCE($3, social_twitter),
                 social_linkedin = COALESCE($4, social_linkedin),
                 social_instagram = COALESCE($5, social_instagram),
                 updated_at = NOW()
             WHERE admin_id = $1
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, SystemSettings>(&query)
            .bind(admin_id)
            .bind(&update.facebook)
            .bind(&update.twitter)
            .bind(&update.linkedin)
            .bind(&update.instagram)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("System settings not found".to_string()))
    }

    pub async fn notifications(&self, admin_id: i32) -> Result<NotificationPreferences> {
        let query =
            format!("SELECT {PREFS_COLUMNS} FROM notification_preferences WHERE admin_id = $1");
        sqlx::query_as::<_, NotificationPreferences>(&query)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Notification preferences not found".to_string()))
    }

    pub async fn update_notifications(
        &self,
        admin_id: i32,
        update: &NotificationPrefsUpdate,
    ) -> Result<NotificationPreferences> {
        let query = format!(
            "UPDATE notification_preferences
             SET email_new_application = COALESCE($2, email_new_application),
                 email_new_message = COALESCE($3, email_new_message),
                 email_weekly_report = COALESCE($4, email_weekly_report),
                 email_monthly_report = COALESCE($5, email_monthly_report),
                 push_new_application = COALESCE($6, push_new_application),
                 push_new_message = COALESCE($7, push_new_message),
                 updated_at = NOW()
             WHERE admin_id = $1
             RETURNING {PREFS_COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreferences>(&query)
            .bind(admin_id)
            .bind(update.email_new_application)
            .bind(update.email_new_message)
            .bind(update.email_weekly_report)
            .bind(update.email_monthly_report)
            .bind(update.push_new_application)
            .bind(update.push_new_message)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Notification preferences not found".to_string()))
    }

    /// Site identity for the public website. Served without auth and never
    /// 404s; an unconfigured install gets placeholder contact details.
    pub async fn public_settings(&self) -> Result<PublicSettingsResponse> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM system_settings ORDER BY id LIMIT 1");
        let settings = sqlx::query_as::<_, SystemSettings>(&query)
            .fetch_optional(&self.pool)
            .await?;
        Ok(settings
            .map(PublicSettingsResponse::from)
            .unwrap_or_else(PublicSettingsResponse::defaults))
    }

    /// Creates the settings rows a fresh admin account needs. Idempotent,
    /// so reseeding an existing account changes nothing.
    pub async fn seed_defaults(&self, admin_id: i32) -> Result<()> {
        sqlx::query(
            "INSERT INTO notification_preferences
               (admin_id, email_new_application, email_new_message, email_weekly_report,
                email_monthly_report, push_new_application, push_new_message)
             VALUES ($1, TRUE, TRUE, FALSE, TRUE, TRUE, FALSE)
             ON CONFLICT (admin_id) DO NOTHING",
        )
        .bind(admin_id)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "INSERT INTO system_settings
               (admin_id, site_name, site_email, site_phone, site_address,
                maintenance_mode, allow_registrations,
                social_facebook, social_twitter, social_linkedin, social_instagram)
             VALUES ($1, 'Luton Friendship Homecarers', 'info@lutonfhc.org.uk',
                     '+44 1582 000000', 'Luton, Bedfordshire, UK', FALSE, TRUE,
                     'https://facebook.com/lutonfhc', 'https://twitter.com/lutonfhc',
                     'https://linkedin.com/company/lutonfhc', 'https://instagram.com/lutonfhc')
             ON CONFLICT (admin_id) DO NOTHING",
        )
        .bind(admin_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
