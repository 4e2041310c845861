//! Password hashing with Argon2id.
//!
//! Credentials are never stored or compared in plaintext: registration
//! stores a PHC-format hash, login verifies the candidate against it.
//! The default Argon2id parameters are used; they travel inside the PHC
//! string, so verification needs no configuration.
//!
//! # Example
//!
//! ```
//! use tarefa_core::auth::password::{hash_password, verify_password};
//!
//! # fn example() -> Result<(), tarefa_core::auth::password::PasswordError> {
//! let hash = hash_password("pw1")?;
//! assert!(verify_password("pw1", &hash)?);
//! assert!(!verify_password("pw2", &hash)?);
//! # Ok(())
//! # }
//! ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Error type for password hashing operations.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    InvalidHash(String),

    #[error("failed to verify password: {0}")]
    Verify(String),
}

/// Hashes a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored PHC hash.
///
/// Returns `Ok(false)` on a wrong password; errors are reserved for
/// malformed stored hashes.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}
