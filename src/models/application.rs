use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub availability: Option<String>,
    pub cv_url: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Review pipeline states for a job application. Every application starts as
/// `New` regardless of what the submitter sends, and admins may move it to
/// any other state in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    New,
    Reviewed,
    Interview,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::New,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Interview,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "New",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// The only place an application status is parsed from client input.
    /// Matching is case-sensitive: "hired" is rejected, "Hired" is not.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == raw)
            .ok_or_else(|| Error::InvalidStatus(raw.to_string()))
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_canonical_statuses() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn rejects_wrong_case() {
        assert!(ApplicationStatus::parse("hired").is_err());
        assert!(ApplicationStatus::parse("NEW").is_err());
        assert!(ApplicationStatus::parse("reviewed").is_err());
    }

    #[test]
    fn rejects_unknown_status() {
        let err = ApplicationStatus::parse("Archived").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status. Must be one of: New, Reviewed, Interview, Hired, Rejected"
        );
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(ApplicationStatus::parse("").is_err());
        assert!(ApplicationStatus::parse(" New").is_err());
        assert!(ApplicationStatus::parse("New ").is_err());
    }
}
