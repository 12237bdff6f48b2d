use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{
    CommentWithAuthor, CreateStock, Stock, StockQuery, StockWithComments, UpdateStock,
};

/// Filter, sort, and paginate the stock collection, then hydrate the
/// page's comments (with authors) in one extra query.
pub async fn list(
    pool: &PgPool,
    query: &StockQuery,
) -> Result<Vec<StockWithComments>, AppError> {
    let stocks = db::stock_queries::fetch_filtered(pool, query).await?;
    hydrate(pool, stocks).await
}

pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<StockWithComments, AppError> {
    let stock = db::stock_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let mut hydrated = hydrate(pool, vec![stock]).await?;
    Ok(hydrated.remove(0))
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    Ok(db::stock_queries::exists(pool, id).await?)
}

pub async fn create(pool: &PgPool, input: CreateStock) -> Result<Stock, AppError> {
    validate_fields(&input.symbol, &input.company_name)?;
    let stock = db::stock_queries::insert(pool, Stock::new(input)).await?;
    Ok(stock)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateStock,
) -> Result<Stock, AppError> {
    validate_fields(&input.symbol, &input.company_name)?;
    let stock = db::stock_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(stock)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::stock_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}

fn validate_fields(symbol: &str, company_name: &str) -> Result<(), AppError> {
    if symbol.trim().is_empty() {
        return Err(AppError::Validation("Symbol cannot be empty".into()));
    }
    if company_name.trim().is_empty() {
        return Err(AppError::Validation("Company name cannot be empty".into()));
    }
    Ok(())
}

async fn hydrate(
    pool: &PgPool,
    stocks: Vec<Stock>,
) -> Result<Vec<StockWithComments>, AppError> {
    let ids: Vec<Uuid> = stocks.iter().map(|s| s.id).collect();
    let comments = if ids.is_empty() {
        Vec::new()
    } else {
        db::comment_queries::fetch_for_stocks(pool, &ids).await?
    };
    Ok(group_comments(stocks, comments))
}

fn group_comments(
    stocks: Vec<Stock>,
    comments: Vec<CommentWithAuthor>,
) -> Vec<StockWithComments> {
    let mut by_stock: HashMap<Uuid, Vec<CommentWithAuthor>> = HashMap::new();
    for comment in comments {
        if let Some(stock_id) = comment.stock_id {
            by_stock.entry(stock_id).or_default().push(comment);
        }
    }
    stocks
        .into_iter()
        .map(|stock| {
            let comments = by_stock.remove(&stock.id).unwrap_or_default();
            StockWithComments { stock, comments }
        })
        .collect()
}
