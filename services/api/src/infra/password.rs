use anyhow::Context as _;
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::domain::repository::PasswordPort;
use crate::error::ApiError;

/// Argon2id (default params) password hashing.
///
/// Hashing is CPU-bound, so both operations run on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Passwords;

fn hash_blocking(password: &str) -> anyhow::Result<String> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| anyhow::anyhow!("encode salt: {e}"))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))?;
    Ok(hash.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("parse password hash: {e}"))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow::anyhow!("argon2 verify: {e}")),
    }
}

impl PasswordPort for Argon2Passwords {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .context("join password hashing task")??;
        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, ApiError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let ok = tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
            .await
            .context("join password verification task")??;
        Ok(ok)
    }
}
