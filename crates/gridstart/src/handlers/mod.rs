pub mod error;
pub mod health;
pub mod start;

pub use error::AppError;
