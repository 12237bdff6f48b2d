use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{CommentWithAuthor, CreateComment, UpdateComment};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments))
        .route("/:id", get(get_comment))
        .route("/:id", post(create_comment))
        .route("/:id", put(update_comment))
        .route("/:id", delete(delete_comment))
}

pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentWithAuthor>>, AppError> {
    info!("GET /comments - Fetching all comments");
    let comments = services::comment_service::get_all(&state.pool).await?;
    Ok(Json(comments))
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentWithAuthor>, AppError> {
    info!("GET /comments/{} - Fetching comment", id);
    let comment = services::comment_service::get_by_id(&state.pool, id).await?;
    Ok(Json(comment))
}

// The stock-existence check happens here, before the write path runs.
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(stock_id): Path<Uuid>,
    Json(data): Json<CreateComment>,
) -> Result<impl IntoResponse, AppError> {
    info!("POST /comments/{} - Creating comment", stock_id);
    let user = services::account_service::resolve_user(&state.pool, &auth.username).await?;

    if !services::stock_service::exists(&state.pool, stock_id).await? {
        return Err(AppError::Validation("No stock found".to_string()));
    }

    let comment =
        services::comment_service::create(&state.pool, stock_id, user.id, data)
            .await
            .map_err(|e| {
                error!("Failed to create comment on stock {}: {}", stock_id, e);
                e
            })?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateComment>,
) -> Result<Json<CommentWithAuthor>, AppError> {
    info!("PUT /comments/{} - Updating comment", id);
    let comment = services::comment_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update comment {}: {}", id, e);
            e
        })?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    info!("DELETE /comments/{} - Deleting comment", id);
    services::comment_service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
