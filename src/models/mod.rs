mod comment;
mod holding;
mod query;
mod stock;
mod user;

pub use comment::{Comment, CommentWithAuthor, CreateComment, UpdateComment};
pub use holding::Holding;
pub use query::StockQuery;
pub use stock::{CreateStock, Stock, StockWithComments, UpdateStock};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
