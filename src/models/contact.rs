use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactInquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub admin_reply: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub replied_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a contact inquiry. The well-known states are `new`, `read`
/// and `replied`, but admins may also set arbitrary labels ("spam",
/// "follow-up"), which `Other` carries through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryStatus {
    New,
    Read,
    Replied,
    Other(String),
}

impl InquiryStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "new" => InquiryStatus::New,
            "read" => InquiryStatus::Read,
            "replied" => InquiryStatus::Replied,
            other => InquiryStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Read => "read",
            InquiryStatus::Replied => "replied",
            InquiryStatus::Other(label) => label,
        }
    }

    /// State after an admin opens the inquiry detail view. Only a fresh
    /// inquiry is promoted; re-reading never moves the state backwards.
    pub fn on_admin_read(self) -> Self {
        match self {
            InquiryStatus::New => InquiryStatus::Read,
            other => other,
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_known_states() {
        assert_eq!(InquiryStatus::parse("new"), InquiryStatus::New);
        assert_eq!(InquiryStatus::parse("read"), InquiryStatus::Read);
        assert_eq!(InquiryStatus::parse("replied"), InquiryStatus::Replied);
    }

    #[test]
    fn parse_keeps_arbitrary_labels() {
        let status = InquiryStatus::parse("spam");
        assert_eq!(status, InquiryStatus::Other("spam".to_string()));
        assert_eq!(status.as_str(), "spam");
    }

    #[test]
    fn known_states_are_case_sensitive() {
        assert_eq!(
            InquiryStatus::parse("New"),
            InquiryStatus::Other("New".to_string())
        );
    }

    #[test]
    fn first_read_promotes_new_only() {
        assert_eq!(InquiryStatus::New.on_admin_read(), InquiryStatus::Read);
        assert_eq!(InquiryStatus::Read.on_admin_read(), InquiryStatus::Read);
        assert_eq!(
            InquiryStatus::Replied.on_admin_read(),
            InquiryStatus::Replied
        );
        assert_eq!(
            InquiryStatus::Other("spam".to_string()).on_admin_read(),
            InquiryStatus::Other("spam".to_string())
        );
    }
}
