use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Holding, Stock};

/// The stocks a user holds, projected straight from the join; no
/// Holding-shaped rows leak to callers.
pub async fn fetch_stocks_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>(
        "SELECT s.id, s.symbol, s.company_name, s.purchase_price, s.last_dividend,
                s.industry, s.market_cap, s.created_at
         FROM holdings h
         JOIN stocks s ON s.id = h.stock_id
         WHERE h.user_id = $1
         ORDER BY h.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn holding_exists(
    pool: &PgPool,
    user_id: Uuid,
    stock_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM holdings WHERE user_id = $1 AND stock_id = $2)",
    )
    .bind(user_id)
    .bind(stock_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

pub async fn insert(
    pool: &PgPool,
    user_id: Uuid,
    stock_id: Uuid,
) -> Result<Holding, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "INSERT INTO holdings (user_id, stock_id)
         VALUES ($1, $2)
         RETURNING user_id, stock_id, created_at",
    )
    .bind(user_id)
    .bind(stock_id)
    .fetch_one(pool)
    .await
}

/// Removes the user's holding located through the stock's symbol. The
/// composite primary key guarantees at most one row can match.
pub async fn delete_by_symbol(
    pool: &PgPool,
    user_id: Uuid,
    symbol: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM holdings h
         USING stocks s
         WHERE s.id = h.stock_id
           AND h.user_id = $1
           AND LOWER(s.symbol) = LOWER($2)",
    )
    .bind(user_id)
    .bind(symbol)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
