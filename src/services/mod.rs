pub mod analytics_service;
pub mod application_service;
pub mod auth_service;
pub mod contact_service;
pub mod job_service;
pub mod settings_service;
pub mod storage_service;
