use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::{is_unique_violation, AppError};
use crate::models::{Holding, Stock};

pub async fn holdings(pool: &PgPool, user_id: Uuid) -> Result<Vec<Stock>, AppError> {
    let stocks = db::portfolio_queries::fetch_stocks_for_user(pool, user_id).await?;
    Ok(stocks)
}

/// Adds a holding for the user. The pre-check is a fast path for a
/// friendly Conflict; the composite primary key on holdings is the
/// authoritative guard, so two concurrent adds of the same pair still
/// leave exactly one row.
pub async fn add(pool: &PgPool, user_id: Uuid, symbol: &str) -> Result<Holding, AppError> {
    let stock = db::stock_queries::find_by_symbol(pool, symbol)
        .await?
        .ok_or_else(|| AppError::Validation(format!("No stock found for symbol {symbol}")))?;

    if db::portfolio_queries::holding_exists(pool, user_id, stock.id).await? {
        return Err(AppError::Conflict("Stock already in portfolio".to_string()));
    }

    db::portfolio_queries::insert(pool, user_id, stock.id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Stock already in portfolio".to_string())
            } else {
                AppError::Db(e)
            }
        })
}

pub async fn remove(pool: &PgPool, user_id: Uuid, symbol: &str) -> Result<(), AppError> {
    match db::portfolio_queries::delete_by_symbol(pool, user_id, symbol).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}
