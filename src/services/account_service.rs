use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::errors::{is_unique_violation, AppError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::services::token_service;

pub async fn register(
    pool: &PgPool,
    config: &Config,
    input: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    if input.username.trim().is_empty() {
        return Err(AppError::Validation("Username cannot be empty".into()));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::Validation("Email cannot be empty".into()));
    }
    if input.password.is_empty() {
        return Err(AppError::Validation("Password cannot be empty".into()));
    }

    let user = User {
        id: uuid::Uuid::new_v4(),
        username: input.username,
        email: input.email,
        password_hash: hash_password(&input.password)?,
        created_at: chrono::Utc::now(),
    };

    let user = db::user_queries::insert(pool, user).await.map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Username or email already taken".to_string())
        } else {
            AppError::Db(e)
        }
    })?;

    let token = token_service::issue(&user, config)?;
    Ok(AuthResponse {
        username: user.username,
        email: user.email,
        token,
    })
}

// Unknown username and wrong password produce the same signal, so login
// responses cannot be used to enumerate accounts.
pub async fn login(
    pool: &PgPool,
    config: &Config,
    input: LoginRequest,
) -> Result<AuthResponse, AppError> {
    let user = db::user_queries::find_by_username(pool, &input.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    verify_password(&input.password, &user.password_hash)?;

    let token = token_service::issue(&user, config)?;
    Ok(AuthResponse {
        username: user.username,
        email: user.email,
        token,
    })
}

/// Resolves a verified credential's username to the stored user record.
/// Handlers call this once and pass the result on explicitly.
pub async fn resolve_user(pool: &PgPool, username: &str) -> Result<User, AppError> {
    db::user_queries::find_by_username(pool, username)
        .await?
        .ok_or(AppError::Unauthorized)
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(e.to_string()))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| AppError::Internal(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_verifies_and_rejects() {
        let hash = hash_password("hunter2").unwrap();
        assert_ne!(hash, "hunter2");

        assert!(verify_password("hunter2", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }
}
