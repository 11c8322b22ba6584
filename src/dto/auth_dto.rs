use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::admin::Admin;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub admin_email: String,
    pub admin_role: String,
    pub admin_name: String,
}

impl LoginResponse {
    pub fn new(access_token: String, admin: &Admin) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            admin_email: admin.email.clone(),
            admin_role: admin.role.clone(),
            admin_name: admin.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfileResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub profile_image_url: Option<String>,
}

impl From<Admin> for AdminProfileResponse {
    fn from(value: Admin) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            role: value.role,
            profile_image_url: value.profile_image_url,
        }
    }
}
