pub mod analytics;
pub mod applications;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod settings;
