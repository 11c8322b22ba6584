use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::dashboard_dto::DashboardResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = Json<DashboardResponse>),
        (status = 401, description = "Could not validate credentials")
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let dashboard = state.analytics_service.dashboard().await?;
    Ok(Json(dashboard))
}
