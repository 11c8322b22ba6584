use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::settings_dto::{
        NotificationPrefsResponse, NotificationPrefsUpdate, PublicSettingsResponse,
        SocialMediaUpdate, SystemSettingsResponse, SystemSettingsUpdate,
    },
    error::Result,
    models::admin::Admin,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/settings/system",
    responses(
        (status = 200, description = "System settings", body = Json<SystemSettingsResponse>),
        (status = 404, description = "System settings not found")
    )
)]
#[axum::debug_handler]
pub async fn get_system_settings(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
) -> Result<impl IntoResponse> {
    let settings = state.settings_service.system(admin.id).await?;
    Ok(Json(SystemSettingsResponse::from(settings)))
}

#[utoipa::path(
    put,
    path = "/api/settings/system",
    request_body = SystemSettingsUpdate,
    responses(
        (status = 200, description = "Settings updated", body = Json<SystemSettingsResponse>),
        (status = 404, description = "System settings not found")
    )
)]
#[axum::debug_handler]
pub async fn update_system_settings(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Json(payload): Json<SystemSettingsUpdate>,
) -> Result<impl IntoResponse> {
    let settings = state
        .settings_service
        .update_system(admin.id, &payload)
        .await?;
    Ok(Json(SystemSettingsResponse::from(settings)))
}

#[utoipa::path(
    put,
    path = "/api/settings/social",
    request_body = SocialMediaUpdate,
    responses(
        (status = 200, description = "Social links updated", body = Json<SystemSettingsResponse>),
        (status = 404, description = "System settings not found")
    )
)]
#[axum::debug_handler]
pub async fn update_social_media(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Json(payload): Json<SocialMediaUpdate>,
) -> Result<impl IntoResponse> {
    let settings = state
        .settings_service
        .update_social(admin.id, &payload)
        .await?;
    Ok(Json(SystemSettingsResponse::from(settings)))
}

#[utoipa::path(
    get,
    path = "/api/settings/notifications",
    responses(
        (status = 200, description = "Notification preferences", body = Json<NotificationPrefsResponse>),
        (status = 404, description = "Notification preferences not found")
    )
)]
#[axum::debug_handler]
pub async fn get_notification_prefs(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
) -> Result<impl IntoResponse> {
    let prefs = state.settings_service.notifications(admin.id).await?;
    Ok(Json(NotificationPrefsResponse::from(prefs)))
}

#[utoipa::path(
    put,
    path = "/api/settings/notifications",
    request_body = NotificationPrefsUpdate,
    responses(
        (status = 200, description = "Preferences updated", body = Json<NotificationPrefsResponse>),
        (status = 404, description = "Notification preferences not found")
    )
)]
#[axum::debug_handler]
pub async fn update_notification_prefs(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Json(payload): Json<NotificationPrefsUpdate>,
) -> Result<impl IntoResponse> {
    let prefs = state
        .settings_service
        .update_notifications(admin.id, &payload)
        .await?;
    Ok(Json(NotificationPrefsResponse::from(prefs)))
}

/// Site identity for the public website; never 404s.
#[utoipa::path(
    get,
    path = "/api/settings/public",
    responses(
        (status = 200, description = "Public site settings", body = Json<PublicSettingsResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_public_settings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings_service.public_settings().await?;
    Ok(Json(settings))
}
