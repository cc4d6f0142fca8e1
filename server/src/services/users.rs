//! Email + password accounts: registration and credential checks.

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;

const SALT_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Public view of an account, as sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Normalize the email and require a non-empty password.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<String, UserError> {
    let email = normalize_email(email).ok_or(UserError::InvalidEmail)?;
    if password.is_empty() {
        return Err(UserError::MissingPassword);
    }
    Ok(email)
}

#[must_use]
pub(crate) fn generate_salt() -> String {
    let bytes: [u8; SALT_LEN] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub(crate) fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Create an account. Fails with `EmailTaken` if the normalized email exists.
pub async fn register(pool: &PgPool, email: &str, password: &str) -> Result<UserView, UserError> {
    let email = validate_credentials(email, password)?;
    let salt = generate_salt();
    let password_hash = hash_password(&salt, password);

    let row = sqlx::query(
        r"INSERT INTO users (email, password_hash, password_salt)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO NOTHING
          RETURNING id",
    )
    .bind(&email)
    .bind(password_hash)
    .bind(salt)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(UserError::EmailTaken);
    };
    Ok(UserView { id: row.get("id"), email })
}

/// Check credentials. Unknown email and wrong password both yield `InvalidCredentials`.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<UserView, UserError> {
    let email = validate_credentials(email, password)?;

    let row = sqlx::query("SELECT id, password_hash, password_salt FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

    let salt: String = row.get("password_salt");
    let stored: String = row.get("password_hash");
    if hash_password(&salt, password) != stored {
        return Err(UserError::InvalidCredentials);
    }
    Ok(UserView { id: row.get("id"), email })
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
