pub mod analytics_dto;
pub mod application_dto;
pub mod auth_dto;
pub mod contact_dto;
pub mod dashboard_dto;
pub mod job_dto;
pub mod settings_dto;

use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` body used by operations that acknowledge rather
/// than return an entity (logout, contact submit/reply, status updates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
