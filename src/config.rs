use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub allowed_origins: String,
    pub app_env: String,
    pub uploads_dir: String,
    pub auth: AuthConfig,
}

/// Everything the token issuer and login flow need. Constructed once in
/// `main` and handed to the services that use it; there is no process-global
/// configuration singleton.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:8000"),
            database_url: get_env("DATABASE_URL")?,
            allowed_origins: get_env_or("ALLOWED_ORIGINS", "http://localhost:4200"),
            app_env: get_env_or("APP_ENV", "development"),
            uploads_dir: get_env_or("UPLOADS_DIR", "./uploads"),
            auth: AuthConfig {
                jwt_secret: get_env("JWT_SECRET")?,
                token_ttl_minutes: get_env_parse_or("ACCESS_TOKEN_EXPIRE_MINUTES", 480)?,
                argon2_memory_kib: get_env_parse_or("ARGON2_MEMORY_KIB", 19_456)?,
                argon2_iterations: get_env_parse_or("ARGON2_ITERATIONS", 2)?,
            },
        })
    }

    /// Comma-separated ALLOWED_ORIGINS split into individual origins.
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            server_address: "0.0.0.0:8000".into(),
            database_url: "postgres://localhost/test".into(),
            allowed_origins: "http://localhost:4200".into(),
            app_env: "test".into(),
            uploads_dir: "./uploads".into(),
            auth: AuthConfig {
                jwt_secret: "secret".into(),
                token_ttl_minutes: 480,
                argon2_memory_kib: 19_456,
                argon2_iterations: 2,
            },
        }
    }

    #[test]
    fn origins_splits_and_trims() {
        let mut config = sample();
        config.allowed_origins = "http://localhost:4200, https://example.org ,".into();
        assert_eq!(
            config.origins(),
            vec![
                "http://localhost:4200".to_string(),
                "https://example.org".to_string()
            ]
        );
    }

    #[test]
    fn origins_single_value() {
        assert_eq!(sample().origins(), vec!["http://localhost:4200".to_string()]);
    }
}
