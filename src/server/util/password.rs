//! Argon2id password hashing.
//!
//! Hashing and verification are CPU-bound, so the async entry points move the work
//! onto tokio's blocking pool.

use std::sync::OnceLock;

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use crate::server::error::Error;

/// Hashes `password` with argon2id and a fresh random salt, returning a PHC string.
pub async fn hash_password(password: &str) -> Result<String, Error> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || hash_password_blocking(&password)).await?
}

/// Checks `password` against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - The password matches
/// - `Ok(false)` - The password does not match
/// - `Err(Error::PasswordHashError)` - The stored hash could not be parsed
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &password_hash))
        .await?
}

/// Runs a verification that always fails, taking as long as a real one.
///
/// Used when no account matches so unknown emails cannot be told apart from wrong
/// passwords by response time.
pub async fn verify_dummy_password(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let password = password.to_owned();

    let _ = tokio::task::spawn_blocking(move || {
        let dummy =
            DUMMY_HASH.get_or_init(|| hash_password_blocking("veronica-dummy-password").ok());

        if let Some(dummy) = dummy {
            let _ = verify_password_blocking(&password, dummy);
        }
    })
    .await;
}

fn hash_password_blocking(password: &str) -> Result<String, Error> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify_password_blocking(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(password_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
