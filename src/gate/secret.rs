//! Argon2 hashing for role secrets.
//!
//! Hashing is CPU-bound; the async wrappers run it on the blocking pool.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::fmt;

/// Plain-text passwords for the three roles, as typed at registration.
#[derive(Clone)]
pub struct RolePasswords {
    pub owner: String,
    pub chef: String,
    pub waiter: String,
}

impl RolePasswords {
    pub fn new(
        owner: impl Into<String>,
        chef: impl Into<String>,
        waiter: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            chef: chef.into(),
            waiter: waiter.into(),
        }
    }
}

impl fmt::Debug for RolePasswords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RolePasswords(***)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("password must not be empty")]
    Empty,
    #[error("hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub fn hash_password(password: &str) -> Result<String, SecretError> {
    if password.is_empty() {
        return Err(SecretError::Empty);
    }
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(SecretError::Hash)?;
    Ok(hash.to_string())
}

/// False for a wrong password and for a malformed stored hash alike.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_blocking(password: String) -> Result<String, SecretError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

pub async fn verify_blocking(password: String, hash: String) -> Result<bool, SecretError> {
    Ok(tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?)
}
