use sqlx::PgPool;

use crate::models::User;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: User) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, username, email, password_hash, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {USER_COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.username)
    .bind(input.email)
    .bind(input.password_hash)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}
