use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::analytics_dto::AnalyticsResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/analytics",
    responses(
        (status = 200, description = "Thirty day analytics", body = Json<AnalyticsResponse>),
        (status = 401, description = "Could not validate credentials")
    )
)]
#[axum::debug_handler]
pub async fn get_analytics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let analytics = state.analytics_service.analytics().await?;
    Ok(Json(analytics))
}
