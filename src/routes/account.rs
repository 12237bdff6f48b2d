use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("POST /account/register - Registering {}", data.username);
    let response = services::account_service::register(&state.pool, &state.config, data)
        .await
        .map_err(|e| {
            error!("Registration failed: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /account/login - Login attempt for {}", data.username);
    let username = data.username.clone();
    let response = services::account_service::login(&state.pool, &state.config, data)
        .await
        .map_err(|e| {
            error!("Login failed for {}: {}", username, e);
            e
        })?;
    Ok(Json(response))
}
