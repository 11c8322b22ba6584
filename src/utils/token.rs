use crate::config::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub admin_id: i32,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature or claims invalid")]
    Invalid,
    #[error("token expired")]
    Expired,
    #[error("token malformed")]
    Malformed,
}

/// Issues and verifies the HS256 access tokens admins authenticate with.
/// Keys are derived once from the configured secret; the service is cheap to
/// clone and lives in the application state.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(auth: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            ttl: Duration::minutes(auth.token_ttl_minutes),
        }
    }

    pub fn issue(&self, admin_id: i32, email: &str, role: &str) -> Result<String, TokenError> {
        let exp = (Utc::now() + self.ttl).timestamp() as usize;
        let claims = Claims {
            admin_id,
            email: email.to_string(),
            role: role.to_string(),
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Invalid)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName
                | ErrorKind::ImmatureSignature => TokenError::Invalid,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    fn auth_config(secret: &str, ttl_minutes: i64) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_minutes: ttl_minutes,
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
        }
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let service = TokenService::new(&auth_config("test-secret", 480));
        let token = service.issue(7, "admin@example.org", "super-admin").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.admin_id, 7);
        assert_eq!(claims.email, "admin@example.org");
        assert_eq!(claims.role, "super-admin");
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let service = TokenService::new(&auth_config("test-secret", -10));
        let token = service.issue(1, "a@b.c", "super-admin").unwrap();
        assert_eq!(service.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn wrong_secret_fails_as_invalid() {
        let issuer = TokenService::new(&auth_config("secret-one", 480));
        let verifier = TokenService::new(&auth_config("secret-two", 480));
        let token = issuer.issue(1, "a@b.c", "super-admin").unwrap();
        assert_eq!(verifier.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn wrong_algorithm_is_rejected() {
        let service = TokenService::new(&auth_config("test-secret", 480));
        let claims = Claims {
            admin_id: 1,
            email: "a@b.c".into(),
            role: "super-admin".into(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp() as usize,
        };
        let hs384 = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(service.verify(&hs384).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn garbage_is_malformed() {
        let service = TokenService::new(&auth_config("test-secret", 480));
        assert_eq!(
            service.verify("not-a-jwt").unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(service.verify("").unwrap_err(), TokenError::Malformed);
        assert_eq!(
            service.verify("a.b.c.d.e").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn missing_claims_are_malformed() {
        let service = TokenService::new(&auth_config("test-secret", 480));

        #[derive(Serialize)]
        struct Partial {
            exp: usize,
        }
        let token = encode(
            &Header::new(Algorithm::HS256),
            &Partial {
                exp: (Utc::now() + Duration::minutes(5)).timestamp() as usize,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert_eq!(service.verify(&token).unwrap_err(), TokenError::Malformed);
    }
}
