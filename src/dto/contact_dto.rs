use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::contact::ContactInquiry;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitInquiryPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyPayload {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryStatusPayload {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryResponse {
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

impl From<ContactInquiry> for InquiryResponse {
    fn from(value: ContactInquiry) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            subject: value.subject,
            message: value.message,
            status: value.status,
            admin_reply: value.admin_reply,
            created_at: value.created_at,
            replied_at: value.replied_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InquiryListQuery {
    pub status_filter: Option<String>,
}
