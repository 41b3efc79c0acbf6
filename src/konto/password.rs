//! Password hashing and verification (bcrypt).

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(password: &str) -> Result<String> {
    bcrypt::hash(password, DEFAULT_COST).context("failed to hash password")
}

/// Verify a plaintext password against a stored hash. The salt and cost are
/// reconstructed from the hash string itself.
pub fn verify(password: &str, hashed: &str) -> Result<bool> {
    bcrypt::verify(password, hashed).context("failed to verify password")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = hash("secret1").unwrap();

        assert_ne!(hashed, "secret1");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash("secret1").unwrap();
        let second = hash("secret1").unwrap();

        assert_ne!(first, second);

        // both still verify
        assert!(verify("secret1", &first).unwrap());
        assert!(verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash("secret1").unwrap();

        assert!(!verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_verify_rejects_invalid_hash() {
        assert!(verify("secret1", "not-a-valid-hash").is_err());
    }
}
