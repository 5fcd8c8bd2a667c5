pub mod commands;
pub mod config;
pub mod error;
pub mod observability;

pub use config::Config;
pub use error::AppError;
