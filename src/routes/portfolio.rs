use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::Stock;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_portfolio).post(add_holding).delete(remove_holding))
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: String,
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /portfolio - Fetching holdings for {}", auth.username);
    let user = services::account_service::resolve_user(&state.pool, &auth.username).await?;
    let stocks = services::portfolio_service::holdings(&state.pool, user.id).await?;
    Ok(Json(stocks))
}

pub async fn add_holding(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SymbolQuery>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "POST /portfolio - Adding {} for {}",
        params.symbol, auth.username
    );
    let user = services::account_service::resolve_user(&state.pool, &auth.username).await?;
    let holding = services::portfolio_service::add(&state.pool, user.id, &params.symbol)
        .await
        .map_err(|e| {
            error!("Failed to add {} to portfolio: {}", params.symbol, e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(holding)))
}

pub async fn remove_holding(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SymbolQuery>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "DELETE /portfolio - Removing {} for {}",
        params.symbol, auth.username
    );
    let user = services::account_service::resolve_user(&state.pool, &auth.username).await?;
    services::portfolio_service::remove(&state.pool, user.id, &params.symbol).await?;
    Ok(StatusCode::NO_CONTENT)
}
