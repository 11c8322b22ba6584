use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        contact_dto::{
            InquiryListQuery, InquiryResponse, InquiryStatusPayload, ReplyPayload,
            SubmitInquiryPayload,
        },
        MessageResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/contact/submit",
    request_body = SubmitInquiryPayload,
    responses(
        (status = 201, description = "Inquiry received", body = Json<MessageResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<SubmitInquiryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let inquiry = state.contact_service.submit(&payload).await?;
    tracing::info!(inquiry_id = inquiry.id, "contact inquiry received");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Thank you for contacting us! We'll get back to you soon.",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    params(
        ("status_filter" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Inquiries, newest first", body = Json<Vec<InquiryResponse>>),
        (status = 401, description = "Could not validate credentials")
    )
)]
#[axum::debug_handler]
pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(query): Query<InquiryListQuery>,
) -> Result<impl IntoResponse> {
    let inquiries = state
        .contact_service
        .list(query.status_filter.as_deref())
        .await?;
    let responses: Vec<InquiryResponse> = inquiries.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Opening an inquiry marks it read; the response reflects the new state.
#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 200, description = "Inquiry found", body = Json<InquiryResponse>),
        (status = 404, description = "Inquiry not found")
    )
)]
#[axum::debug_handler]
pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let inquiry = state.contact_service.get(id).await?;
    Ok(Json(InquiryResponse::from(inquiry)))
}

#[utoipa::path(
    patch,
    path = "/api/contact/{id}/reply",
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    request_body = ReplyPayload,
    responses(
        (status = 200, description = "Reply recorded", body = Json<MessageResponse>),
        (status = 404, description = "Inquiry not found")
    )
)]
#[axum::debug_handler]
pub async fn reply_to_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReplyPayload>,
) -> Result<impl IntoResponse> {
    state.contact_service.reply(id, &payload.reply).await?;
    Ok(Json(MessageResponse::new("Reply sent successfully")))
}

#[utoipa::path(
    patch,
    path = "/api/contact/{id}/status",
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    request_body = InquiryStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Json<MessageResponse>),
        (status = 404, description = "Inquiry not found")
    )
)]
#[axum::debug_handler]
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InquiryStatusPayload>,
) -> Result<impl IntoResponse> {
    state.contact_service.set_status(id, &payload.status).await?;
    Ok(Json(MessageResponse::new("Status updated")))
}

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 204, description = "Inquiry deleted"),
        (status = 404, description = "Inquiry not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.contact_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
