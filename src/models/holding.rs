use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

// One user's claim on one stock. Identity is the (user_id, stock_id)
// pair; the table's composite primary key keeps it unique.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Holding {
    pub user_id: Uuid,
    pub stock_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
