//! Password hashing using bcrypt
//!
//! Each hash carries its own random salt and a tunable cost factor.
//! Verification delegates to bcrypt's internal constant-time
//! comparison. Both operations are CPU-bound, so async call sites go
//! through `spawn_blocking` to keep the runtime's worker threads free.

use anyhow::Result;

/// Default bcrypt cost (2^10 rounds)
pub const DEFAULT_COST: u32 = 10;

/// Password hashing service
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the cost factor. Tests use `bcrypt::MIN_COST` so the
    /// suite is not dominated by hashing time.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password (blocking operation)
    ///
    /// A hashing failure is an internal error, never treated as a
    /// non-match.
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Failed to verify password: {}", e))
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's MIN_COST (4) is private in bcrypt 0.15.
    const MIN_COST: u32 = 4;

    fn fast_service() -> PasswordService {
        PasswordService::with_cost(MIN_COST)
    }

    #[test]
    fn test_hash_and_verify() {
        let service = fast_service();
        let password = "secure_password_123";
        let hash = service.hash(password).unwrap();

        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let service = fast_service();
        let password = "test_password";
        let hash1 = service.hash(password).unwrap();
        let hash2 = service.hash(password).unwrap();

        // Hashes should be different due to per-call random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(service.verify(password, &hash1).unwrap());
        assert!(service.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_invalid_hash_is_an_error_not_a_mismatch() {
        let service = fast_service();
        let result = service.verify("password123", "not-a-bcrypt-hash");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let service = fast_service();
        let password = "async_test_password".to_string();
        let hash = service.hash_async(password.clone()).await.unwrap();

        assert!(service
            .verify_async(password.clone(), hash.clone())
            .await
            .unwrap());
        assert!(!service.verify_async("wrong".to_string(), hash).await.unwrap());
    }
}
