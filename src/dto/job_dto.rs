use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::Job;

/// Create and full-update share one shape; omitted list fields come through
/// as empty rather than missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_job_type")]
    pub job_type: String,
    #[serde(default = "default_location")]
    pub location: String,
    pub salary: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub working_hours: Option<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub training: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_date: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_category() -> String {
    "carers".to_string()
}

fn default_job_type() -> String {
    "Full-time".to_string()
}

fn default_location() -> String {
    "Luton".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub job_type: String,
    pub location: String,
    pub salary: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub qualifications: Vec<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub working_hours: Option<String>,
    pub experience: Option<String>,
    pub benefits: Vec<String>,
    pub training: Option<String>,
    pub tags: Vec<String>,
    pub start_date: Option<String>,
    pub is_active: bool,
    pub applicants: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobResponse {
    pub fn from_job(job: Job, applicants: i64) -> Self {
        Self {
            id: job.id,
            title: job.title,
            category: job.category,
            job_type: job.job_type,
            location: job.location,
            salary: job.salary,
            summary: job.summary,
            description: job.description,
            requirements: decode_list(job.requirements.as_deref()),
            qualifications: decode_list(job.qualifications.as_deref()),
            skills: decode_list(job.skills.as_deref()),
            certifications: decode_list(job.certifications.as_deref()),
            working_hours: job.working_hours,
            experience: job.experience,
            benefits: decode_list(job.benefits.as_deref()),
            training: job.training,
            tags: decode_list(job.tags.as_deref()),
            start_date: job.start_date,
            is_active: job.is_active,
            applicants,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Decode a JSON-encoded text column into a list. Legacy rows may hold plain
/// text or NULL; both come back as an empty list rather than an error.
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|text| serde_json::from_str(text).ok())
        .unwrap_or_default()
}

pub fn encode_list(items: &[String]) -> crate::error::Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_list_parses_json_arrays() {
        assert_eq!(
            decode_list(Some(r#"["DBS check","Right to work"]"#)),
            vec!["DBS check".to_string(), "Right to work".to_string()]
        );
    }

    #[test]
    fn decode_list_tolerates_null_and_garbage() {
        assert!(decode_list(None).is_empty());
        assert!(decode_list(Some("")).is_empty());
        assert!(decode_list(Some("plain text, not json")).is_empty());
        assert!(decode_list(Some("{\"not\":\"a list\"}")).is_empty());
    }

    #[test]
    fn encode_then_decode_roundtrip() {
        let items = vec!["First aid".to_string(), "Manual handling".to_string()];
        let encoded = encode_list(&items).unwrap();
        assert_eq!(decode_list(Some(&encoded)), items);
    }

    #[test]
    fn payload_defaults_apply() {
        let payload: JobPayload = serde_json::from_str(r#"{"title":"Care Assistant"}"#).unwrap();
        assert_eq!(payload.category, "carers");
        assert_eq!(payload.job_type, "Full-time");
        assert_eq!(payload.location, "Luton");
        assert!(payload.is_active);
        assert!(payload.requirements.is_empty());
    }
}
