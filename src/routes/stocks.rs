use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateStock, StockQuery, StockWithComments, UpdateStock};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stocks).post(create_stock))
        .route("/:id", get(get_stock))
        .route("/:id", put(update_stock))
        .route("/:id", delete(delete_stock))
}

#[axum::debug_handler]
pub async fn list_stocks(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<Json<Vec<StockWithComments>>, AppError> {
    info!("GET /stocks - Listing stocks");
    query.validate().map_err(AppError::Validation)?;
    let stocks = services::stock_service::list(&state.pool, &query)
        .await
        .map_err(|e| {
            error!("Failed to list stocks: {}", e);
            e
        })?;
    Ok(Json(stocks))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StockWithComments>, AppError> {
    info!("GET /stocks/{} - Fetching stock", id);
    let stock = services::stock_service::get_by_id(&state.pool, id).await?;
    Ok(Json(stock))
}

pub async fn create_stock(
    State(state): State<AppState>,
    Json(data): Json<CreateStock>,
) -> Result<impl IntoResponse, AppError> {
    info!("POST /stocks - Creating new stock");
    let stock = services::stock_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create stock: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(stock)))
}

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateStock>,
) -> Result<impl IntoResponse, AppError> {
    info!("PUT /stocks/{} - Updating stock", id);
    let stock = services::stock_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update stock {}: {}", id, e);
            e
        })?;
    Ok(Json(stock))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    info!("DELETE /stocks/{} - Deleting stock", id);
    services::stock_service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
