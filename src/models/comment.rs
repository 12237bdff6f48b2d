use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// stock_id is nullable: a comment may outlive its stock association.
// stock_id and user_id never change after insert; only title/content do.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub stock_id: Option<Uuid>,
    pub user_id: Uuid,
}

/// Comment row joined with the author's username.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub stock_id: Option<Uuid>,
    pub created_by: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateComment {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateComment {
    pub title: String,
    pub content: String,
}

impl Comment {
    pub(crate) fn new(input: CreateComment, stock_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            created_at: chrono::Utc::now(),
            stock_id: Some(stock_id),
            user_id,
        }
    }
}
