pub mod admin;
pub mod analytics;
pub mod application;
pub mod contact;
pub mod job;
pub mod settings;
