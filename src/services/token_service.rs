use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::User;

/// Claims embedded in every issued credential. `sub` carries the
/// username; issuer and audience are fixed strings from configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

/// Signs a bearer credential for an authenticated user, valid for
/// `config.token_expiry_days` from now.
pub fn issue(user: &User, config: &Config) -> Result<String, AppError> {
    let expires_at = Utc::now() + Duration::days(config.token_expiry_days);
    issue_with_expiry(user, config, expires_at.timestamp())
}

fn issue_with_expiry(user: &User, config: &Config, exp: i64) -> Result<String, AppError> {
    let claims = Claims {
        sub: user.username.clone(),
        email: user.email.clone(),
        iss: config.jwt_issuer.clone(),
        aud: config.jwt_audience.clone(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(config.jwt_signing_key.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Validates signature, issuer, audience, and expiry; any failure is
/// Unauthorized, never a distinct error the client could probe.
pub fn verify(token: &str, config: &Config) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS512);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_audience(&[&config.jwt_audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_signing_key.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: String::new(),
            jwt_signing_key: "test-signing-key-with-enough-entropy".to_string(),
            jwt_issuer: "http://localhost:3000".to_string(),
            jwt_audience: "http://localhost:3000".to_string(),
            token_expiry_days: 7,
        }
    }

    fn test_user() -> User {
        User {
            id: uuid::Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_round_trips_claims() {
        let config = test_config();
        let user = test_user();

        let token = issue(&user, &config).unwrap();
        let claims = verify(&token, &config).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = test_config();
        let user = test_user();

        // Past the default leeway window.
        let exp = (Utc::now() - Duration::hours(1)).timestamp();
        let token = issue_with_expiry(&user, &config, exp).unwrap();

        assert!(matches!(
            verify(&token, &config),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let config = test_config();
        let user = test_user();
        let token = issue(&user, &config).unwrap();

        let other = Config {
            jwt_signing_key: "a-completely-different-key".to_string(),
            ..test_config()
        };
        assert!(matches!(verify(&token, &other), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let config = test_config();
        let user = test_user();
        let token = issue(&user, &config).unwrap();

        let other = Config {
            jwt_audience: "http://somewhere-else".to_string(),
            ..test_config()
        };
        assert!(matches!(verify(&token, &other), Err(AppError::Unauthorized)));
    }
}
