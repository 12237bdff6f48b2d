use std::env;

/// Bearer credentials stay valid for this many days after issuance.
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_signing_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub token_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")?,
            jwt_issuer: env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            jwt_audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            token_expiry_days: env::var("TOKEN_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(TOKEN_EXPIRY_DAYS),
        })
    }
}
