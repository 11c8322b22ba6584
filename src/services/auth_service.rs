use crate::dto::auth_dto::LoginPayload;
use crate::error::{Error, Result};
use crate::models::admin::Admin;
use crate::utils::crypto::PasswordHasher;
use crate::utils::token::TokenService;
use sqlx::PgPool;
use tracing::{info, warn};

const ADMIN_COLUMNS: &str = "id, email, password_hash, name, phone, role, profile_image_url, \
     is_active, created_at, updated_at";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(pool: PgPool, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            pool,
            hasher,
            tokens,
        }
    }

    /// Full login flow: look the admin up, check the password, check the
    /// active flag, issue a token. Unknown email and wrong password fail
    /// identically; only a deactivated account with a correct password gets
    /// the distinct 403.
    pub async fn login(&self, payload: &LoginPayload) -> Result<(String, Admin)> {
        info!(email = %payload.email, "login attempt");
        let admin = self.find_by_email(&payload.email).await?;
        let admin = self.authenticate(admin, &payload.password).map_err(|e| {
            warn!(email = %payload.email, "login rejected");
            e
        })?;
        let token = self
            .tokens
            .issue(admin.id, &admin.email, &admin.role)
            .map_err(|_| Error::Internal("Failed to issue access token".to_string()))?;
        info!(email = %admin.email, "login successful");
        Ok((token, admin))
    }

    /// The gate decision, separated from I/O. Password is verified before
    /// the active flag so a deactivated account cannot be confirmed to
    /// exist without its password.
    fn authenticate(&self, admin: Option<Admin>, password: &str) -> Result<Admin> {
        let Some(admin) = admin else {
            return Err(Error::InvalidCredentials);
        };
        if !self.hasher.verify(password, &admin.password_hash) {
            return Err(Error::InvalidCredentials);
        }
        if !admin.is_active {
            return Err(Error::AccountDeactivated);
        }
        Ok(admin)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let query = format!("SELECT {} FROM admins WHERE email = $1", ADMIN_COLUMNS);
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>> {
        let query = format!("SELECT {} FROM admins WHERE id = $1", ADMIN_COLUMNS);
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// Inserts an admin account, hashing the password first. Returns `None`
    /// when the email is already taken; used by the seeding binary.
    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: &str,
    ) -> Result<Option<Admin>> {
        if self.find_by_email(email).await?.is_some() {
            return Ok(None);
        }
        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|_| Error::Internal("Failed to hash password".to_string()))?;
        let query = format!(
            "INSERT INTO admins (email, password_hash, name, role, is_active)
             VALUES ($1, $2, $3, $4, TRUE)
             RETURNING {ADMIN_COLUMNS}"
        );
        let admin = sqlx::query_as::<_, Admin>(&query)
            .bind(email)
            .bind(&password_hash)
            .bind(name)
            .bind(role)
            .fetch_one(&self.pool)
            .await?;
        Ok(Some(admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    fn service(hasher: PasswordHasher) -> AuthService {
        let auth = AuthConfig {
            jwt_secret: "test-secret".into(),
            token_ttl_minutes: 480,
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
        };
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        AuthService::new(pool, hasher, TokenService::new(&auth))
    }

    fn admin_with(hash: String, is_active: bool) -> Admin {
        Admin {
            id: 1,
            email: "admin@example.org".into(),
            password_hash: hash,
            name: "Admin User".into(),
            phone: None,
            role: "super-admin".into(),
            profile_image_url: None,
            is_active,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let hasher = PasswordHasher::new(1024, 1).unwrap();
        let hash = hasher.hash("right-password").unwrap();
        let service = service(hasher);

        let missing = service.authenticate(None, "right-password").unwrap_err();
        let wrong = service
            .authenticate(Some(admin_with(hash, true)), "wrong-password")
            .unwrap_err();
        assert_eq!(missing.to_string(), wrong.to_string());
        assert!(matches!(missing, Error::InvalidCredentials));
        assert!(matches!(wrong, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn correct_password_passes() {
        let hasher = PasswordHasher::new(1024, 1).unwrap();
        let hash = hasher.hash("right-password").unwrap();
        let service = service(hasher);

        let admin = service
            .authenticate(Some(admin_with(hash, true)), "right-password")
            .unwrap();
        assert_eq!(admin.email, "admin@example.org");
    }

    #[tokio::test]
    async fn deactivated_account_needs_the_right_password_to_differ() {
        let hasher = PasswordHasher::new(1024, 1).unwrap();
        let hash = hasher.hash("right-password").unwrap();
        let service = service(hasher);

        let with_password = service
            .authenticate(Some(admin_with(hash.clone(), false)), "right-password")
            .unwrap_err();
        assert!(matches!(with_password, Error::AccountDeactivated));

        // Wrong password on a deactivated account stays a plain credential
        // failure, revealing nothing about the account.
        let without = service
            .authenticate(Some(admin_with(hash, false)), "wrong-password")
            .unwrap_err();
        assert!(matches!(without, Error::InvalidCredentials));
    }

    #[tokio::test]
    async fn corrupted_stored_hash_fails_closed() {
        let hasher = PasswordHasher::new(1024, 1).unwrap();
        let service = service(hasher);
        let err = service
            .authenticate(Some(admin_with("garbage".into(), true)), "anything")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }
}
