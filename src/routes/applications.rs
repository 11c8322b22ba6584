use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use bytes::Bytes;

use crate::{
    dto::application_dto::{
        ApplicationListQuery, ApplicationResponse, ApplicationStatusPayload,
        SubmitApplicationResponse,
    },
    error::{Error, Result},
    models::application::ApplicationStatus,
    services::{
        application_service::{ApplicationWithPosition, NewApplication},
        storage_service::CvStorage,
    },
    AppState,
};

fn application_to_response(row: ApplicationWithPosition) -> ApplicationResponse {
    ApplicationResponse::from_application(row.application, row.position)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Public submission from the careers site. The CV is validated and staged
/// to storage before the row is inserted; if the insert fails the staged
/// file is removed again, so neither side keeps an orphan.
#[utoipa::path(
    post,
    path = "/api/applications/submit",
    responses(
        (status = 201, description = "Application received", body = Json<SubmitApplicationResponse>),
        (status = 400, description = "Missing fields or rejected CV file"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut job_id = None;
    let mut name = String::new();
    let mut email = String::new();
    let mut phone = None;
    let mut experience = None;
    let mut availability = None;
    let mut cv: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to get next field: {}", e);
        Error::BadRequest(e.to_string())
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "job_id" => {
                let raw = field.text().await.unwrap_or_default();
                job_id = raw.parse::<i32>().ok();
            }
            "name" => name = field.text().await.unwrap_or_default(),
            "email" => email = field.text().await.unwrap_or_default(),
            "phone" => phone = non_empty(field.text().await.unwrap_or_default()),
            "experience" => experience = non_empty(field.text().await.unwrap_or_default()),
            "availability" => availability = non_empty(field.text().await.unwrap_or_default()),
            "cv" => {
                let filename = field.file_name().unwrap_or("cv.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read CV bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;
                if !data.is_empty() {
                    CvStorage::validate(&filename, &data)?;
                    cv = Some((filename, data));
                }
            }
            _ => {}
        }
    }

    let Some(job_id) = job_id else {
        return Err(Error::BadRequest("A valid job_id is required".into()));
    };
    if name.is_empty() {
        return Err(Error::BadRequest("Name is required".into()));
    }
    if email.is_empty() {
        return Err(Error::BadRequest("Email is required".into()));
    }
    if !state.job_service.exists(job_id).await? {
        return Err(Error::NotFound("Job not found".to_string()));
    }

    let mut cv_url = None;
    if let Some((filename, data)) = cv {
        cv_url = Some(state.storage.store(&filename, &data).await?);
    }

    let new = NewApplication {
        job_id,
        name,
        email,
        phone,
        experience,
        availability,
        cv_url: cv_url.clone(),
    };
    let application = match state.application_service.create(&new).await {
        Ok(application) => application,
        Err(e) => {
            if let Some(url) = cv_url {
                state.storage.delete_by_url(&url).await;
            }
            return Err(e);
        }
    };

    tracing::info!(application_id = application.id, job_id, "application submitted");
    Ok((
        StatusCode::CREATED,
        Json(SubmitApplicationResponse {
            message: "Application submitted successfully".to_string(),
            application_id: application.id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("status_filter" = Option<String>, Query, description = "Filter by status"),
        ("job_id" = Option<i32>, Query, description = "Filter by job")
    ),
    responses(
        (status = 200, description = "Applications, newest first", body = Json<Vec<ApplicationResponse>>),
        (status = 401, description = "Could not validate credentials")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let applications = state
        .application_service
        .list(query.status_filter.as_deref(), query.job_id)
        .await?;
    let responses: Vec<ApplicationResponse> = applications
        .into_iter()
        .map(application_to_response)
        .collect();
    Ok(Json(responses))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application found", body = Json<ApplicationResponse>),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let application = state.application_service.get(id).await?;
    Ok(Json(application_to_response(application)))
}

/// The status string is checked before the application is looked up, so an
/// invalid label 400s even for ids that do not exist.
#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = ApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Json<ApplicationResponse>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    let status = ApplicationStatus::parse(&payload.status)?;
    let application = state.application_service.update_status(id, status).await?;
    Ok(Json(application_to_response(application)))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let cv_url = state.application_service.delete(id).await?;
    if let Some(url) = cv_url {
        state.storage.delete_by_url(&url).await;
    }
    Ok(StatusCode::NO_CONTENT)
}
