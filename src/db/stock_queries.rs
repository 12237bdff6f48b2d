use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::{Stock, StockQuery, UpdateStock};

const STOCK_COLUMNS: &str =
    "id, symbol, company_name, purchase_price, last_dividend, industry, market_cap, created_at";

/// Compiles a StockQuery into one SQL statement: filters, then ordering,
/// then the page window. ILIKE keeps both substring filters
/// case-insensitive; sorting falls back to created_at DESC so pages stay
/// deterministic when no recognized sort field is given.
pub async fn fetch_filtered(
    pool: &PgPool,
    query: &StockQuery,
) -> Result<Vec<Stock>, sqlx::Error> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {STOCK_COLUMNS} FROM stocks WHERE 1=1"));

    if let Some(company_name) = query.company_name_filter() {
        builder.push(" AND company_name ILIKE ");
        builder.push_bind(format!("%{}%", company_name));
    }

    if let Some(symbol) = query.symbol_filter() {
        builder.push(" AND symbol ILIKE ");
        builder.push_bind(format!("%{}%", symbol));
    }

    // id tiebreak keeps the page window stable when the sort key ties.
    if query.sorts_by_symbol() {
        if query.is_descending {
            builder.push(" ORDER BY symbol DESC, id");
        } else {
            builder.push(" ORDER BY symbol ASC, id");
        }
    } else {
        builder.push(" ORDER BY created_at DESC, id");
    }

    builder.push(" LIMIT ");
    builder.push_bind(query.page_size);
    builder.push(" OFFSET ");
    builder.push_bind(query.offset());

    builder.build_query_as::<Stock>().fetch_all(pool).await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>(&format!(
        "SELECT {STOCK_COLUMNS} FROM stocks WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_symbol(
    pool: &PgPool,
    symbol: &str,
) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>(&format!(
        "SELECT {STOCK_COLUMNS} FROM stocks WHERE LOWER(symbol) = LOWER($1)"
    ))
    .bind(symbol)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM stocks WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

pub async fn insert(pool: &PgPool, input: Stock) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>(&format!(
        "INSERT INTO stocks (id, symbol, company_name, purchase_price, last_dividend, industry, market_cap, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {STOCK_COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.symbol)
    .bind(input.company_name)
    .bind(input.purchase_price)
    .bind(input.last_dividend)
    .bind(input.industry)
    .bind(input.market_cap)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateStock,
) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>(&format!(
        "UPDATE stocks
         SET symbol = $1, company_name = $2, purchase_price = $3,
             last_dividend = $4, industry = $5, market_cap = $6
         WHERE id = $7
         RETURNING {STOCK_COLUMNS}"
    ))
    .bind(input.symbol)
    .bind(input.company_name)
    .bind(input.purchase_price)
    .bind(input.last_dividend)
    .bind(input.industry)
    .bind(input.market_cap)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
