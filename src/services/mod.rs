pub mod account_service;
pub mod comment_service;
pub mod portfolio_service;
pub mod stock_service;
pub mod token_service;
