use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Comment, CommentWithAuthor, CreateComment, UpdateComment};

pub async fn get_all(pool: &PgPool) -> Result<Vec<CommentWithAuthor>, AppError> {
    let comments = db::comment_queries::fetch_all(pool).await?;
    Ok(comments)
}

pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<CommentWithAuthor, AppError> {
    let comment = db::comment_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(comment)
}

// The stock-existence check lives with the caller; by the time this runs
// the stock id has already been verified.
pub async fn create(
    pool: &PgPool,
    stock_id: Uuid,
    user_id: Uuid,
    input: CreateComment,
) -> Result<CommentWithAuthor, AppError> {
    validate_fields(&input.title, &input.content)?;
    let comment =
        db::comment_queries::insert(pool, Comment::new(input, stock_id, user_id)).await?;
    get_by_id(pool, comment.id).await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateComment,
) -> Result<CommentWithAuthor, AppError> {
    validate_fields(&input.title, &input.content)?;
    let updated = db::comment_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound)?;
    get_by_id(pool, updated.id).await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::comment_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Title cannot be empty".into()));
    }
    if content.trim().is_empty() {
        return Err(AppError::Validation("Content cannot be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_or_content_fails_validation() {
        assert!(validate_fields("", "body").is_err());
        assert!(validate_fields("subject", "   ").is_err());
        assert!(validate_fields("subject", "body").is_ok());
    }
}
