use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting. The list-like fields (`requirements`, `qualifications`,
/// `skills`, `certifications`, `benefits`, `training`, `tags`) are stored as
/// JSON-encoded text columns; the DTO layer decodes them into arrays.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub job_type: String,
    pub location: String,
    pub salary: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub qualifications: Option<String>,
    pub skills: Option<String>,
    pub certifications: Option<String>,
    pub working_hours: Option<String>,
    pub experience: Option<String>,
    pub benefits: Option<String>,
    pub training: Option<String>,
    pub tags: Option<String>,
    pub start_date: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
