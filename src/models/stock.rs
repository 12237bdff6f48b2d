use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::CommentWithAuthor;

// A listed equity tracked by the system. Symbol comparisons are
// case-insensitive everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub id: uuid::Uuid,
    pub symbol: String,
    pub company_name: String,
    pub purchase_price: BigDecimal,
    pub last_dividend: BigDecimal,
    pub industry: String,
    pub market_cap: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateStock {
    pub symbol: String,
    pub company_name: String,
    pub purchase_price: BigDecimal,
    pub last_dividend: BigDecimal,
    pub industry: String,
    pub market_cap: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStock {
    pub symbol: String,
    pub company_name: String,
    pub purchase_price: BigDecimal,
    pub last_dividend: BigDecimal,
    pub industry: String,
    pub market_cap: i64,
}

/// A stock together with its comments, each carrying the author's
/// username. Listing and by-id reads return this aggregate so callers
/// never issue follow-up queries per row.
#[derive(Debug, Serialize)]
pub struct StockWithComments {
    #[serde(flatten)]
    pub stock: Stock,
    pub comments: Vec<CommentWithAuthor>,
}

impl Stock {
    pub(crate) fn new(input: CreateStock) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            symbol: input.symbol,
            company_name: input.company_name,
            purchase_price: input.purchase_price,
            last_dividend: input.last_dividend,
            industry: input.industry,
            market_cap: input.market_cap,
            created_at: chrono::Utc::now(),
        }
    }
}
