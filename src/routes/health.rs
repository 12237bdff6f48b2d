use axum::extract::State;
use axum::{routing::get, Router};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

// Round-trips the pool so a wedged database shows up here, not on the
// first real request.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    info!("GET /health - Health check");
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok("OK")
}
