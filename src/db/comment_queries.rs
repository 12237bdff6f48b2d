use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Comment, CommentWithAuthor, UpdateComment};

const HYDRATED_COLUMNS: &str =
    "c.id, c.title, c.content, c.created_at, c.stock_id, u.username AS created_by";

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(&format!(
        "SELECT {HYDRATED_COLUMNS}
         FROM comments c
         JOIN users u ON u.id = c.user_id
         ORDER BY c.created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(&format!(
        "SELECT {HYDRATED_COLUMNS}
         FROM comments c
         JOIN users u ON u.id = c.user_id
         WHERE c.id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All comments (with authors) belonging to any of the given stocks, in
/// one set-based query. Callers group the rows by stock_id to hydrate a
/// page of stock aggregates without a per-stock round trip.
pub async fn fetch_for_stocks(
    pool: &PgPool,
    stock_ids: &[Uuid],
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(&format!(
        "SELECT {HYDRATED_COLUMNS}
         FROM comments c
         JOIN users u ON u.id = c.user_id
         WHERE c.stock_id = ANY($1)
         ORDER BY c.created_at DESC"
    ))
    .bind(stock_ids)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Comment) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (id, title, content, created_at, stock_id, user_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, content, created_at, stock_id, user_id",
    )
    .bind(input.id)
    .bind(input.title)
    .bind(input.content)
    .bind(input.created_at)
    .bind(input.stock_id)
    .bind(input.user_id)
    .fetch_one(pool)
    .await
}

// Only title/content are mutable; stock_id/user_id are fixed at insert.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateComment,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "UPDATE comments SET title = $1, content = $2
         WHERE id = $3
         RETURNING id, title, content, created_at, stock_id, user_id",
    )
    .bind(input.title)
    .bind(input.content)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
