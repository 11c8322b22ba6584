pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    analytics_service::AnalyticsService, application_service::ApplicationService,
    auth_service::AuthService, contact_service::ContactService, job_service::JobService,
    settings_service::SettingsService, storage_service::CvStorage,
};
use crate::utils::crypto::PasswordHasher;
use crate::utils::token::TokenService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub token_service: TokenService,
    pub auth_service: AuthService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub contact_service: ContactService,
    pub settings_service: SettingsService,
    pub analytics_service: AnalyticsService,
    pub storage: CvStorage,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> crate::error::Result<Self> {
        let hasher = PasswordHasher::new(
            config.auth.argon2_memory_kib,
            config.auth.argon2_iterations,
        )?;
        let token_service = TokenService::new(&config.auth);
        let auth_service = AuthService::new(pool.clone(), hasher, token_service.clone());
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let contact_service = ContactService::new(pool.clone());
        let settings_service = SettingsService::new(pool.clone());
        let analytics_service = AnalyticsService::new(pool.clone());
        let storage = CvStorage::new(&config.uploads_dir);

        Ok(Self {
            pool,
            config: Arc::new(config),
            token_service,
            auth_service,
            job_service,
            application_service,
            contact_service,
            settings_service,
            analytics_service,
            storage,
        })
    }
}
