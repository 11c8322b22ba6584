use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::application::Application;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStatusPayload {
    pub status: String,
}

/// Admin-facing view of an application. `position` is the referenced job's
/// title, or "Unknown" when the job row has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i32,
    pub job_id: i32,
    pub position: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub availability: Option<String>,
    pub cv_url: Option<String>,
    pub status: String,
    pub applied_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApplicationResponse {
    pub fn from_application(application: Application, position: Option<String>) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            position: position.unwrap_or_else(|| "Unknown".to_string()),
            name: application.name,
            email: application.email,
            phone: application.phone,
            experience: application.experience,
            availability: application.availability,
            cv_url: application.cv_url,
            status: application.status,
            applied_at: application.applied_at,
            updated_at: application.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub status_filter: Option<String>,
    pub job_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitApplicationResponse {
    pub message: String,
    pub application_id: i32,
}
