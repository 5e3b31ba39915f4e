//! Argon2id password hashes in PHC string form (`$argon2id$v=19$...`).

use crate::error::{EcoError, Result};
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| EcoError::PasswordHash(e.to_string()))
}

/// Checks `password` against a stored credential.
///
/// Values that are not PHC strings are legacy plaintext and are compared in
/// constant time.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(_) => password.as_bytes().ct_eq(stored.as_bytes()).into(),
    }
}

/// Whether a stored credential still needs to be rehashed.
pub fn is_legacy(stored: &str) -> bool {
    PasswordHash::new(stored).is_err()
}
