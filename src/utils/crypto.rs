use crate::error::{Error, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

/// Argon2id hasher with tunable cost. Each hash gets a fresh random salt and
/// the cost parameters are embedded in the encoded hash string, so raising
/// the cost later does not invalidate existing hashes.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| Error::Config(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, plain: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?
            .to_string();
        Ok(password_hash)
    }

    /// A malformed or truncated stored hash counts as a failed match, not an
    /// error, so a corrupted row behaves like a wrong password.
    pub fn verify(&self, plain: &str, hashed: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hashed) else {
            return false;
        };
        self.argon2
            .verify_password(plain.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        // Low cost to keep the suite fast.
        PasswordHasher::new(1024, 1).unwrap()
    }

    #[test]
    fn hash_then_verify_roundtrip() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse battery staple").unwrap();
        assert!(hasher.verify("correct horse battery staple", &hash));
        assert!(!hasher.verify("incorrect horse", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let hasher = hasher();
        let first = hasher.hash("secret123").unwrap();
        let second = hasher.hash("secret123").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("secret123", &first));
        assert!(hasher.verify("secret123", &second));
    }

    #[test]
    fn verify_survives_cost_change() {
        let old = PasswordHasher::new(1024, 1).unwrap();
        let new = PasswordHasher::new(2048, 2).unwrap();
        let hash = old.hash("secret123").unwrap();
        assert!(new.verify("secret123", &hash));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        let hasher = hasher();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
        assert!(!hasher.verify("anything", ""));
        assert!(!hasher.verify("anything", "$argon2id$v=19$truncated"));
    }

    #[test]
    fn rejects_zero_memory() {
        assert!(PasswordHasher::new(0, 1).is_err());
    }
}
