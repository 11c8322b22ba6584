use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{AdminProfileResponse, LoginPayload, LoginResponse},
        MessageResponse,
    },
    error::Result,
    models::admin::Admin,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login successful", body = Json<LoginResponse>),
        (status = 401, description = "Invalid email or password"),
        (status = 403, description = "Account has been deactivated")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (token, admin) = state.auth_service.login(&payload).await?;
    Ok(Json(LoginResponse::new(token, &admin)))
}

/// Tokens are stateless, so logout is purely an acknowledgement; the client
/// drops its copy of the token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = Json<MessageResponse>)
    )
)]
#[axum::debug_handler]
pub async fn logout() -> Result<impl IntoResponse> {
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current admin profile", body = Json<AdminProfileResponse>),
        (status = 401, description = "Could not validate credentials")
    )
)]
#[axum::debug_handler]
pub async fn me(Extension(admin): Extension<Admin>) -> Result<impl IntoResponse> {
    Ok(Json(AdminProfileResponse::from(admin)))
}
