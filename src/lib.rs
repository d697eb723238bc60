pub mod core;
pub mod utils;

/// Current crate version string exposed for consumers and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, crate::core::error::AppError>;
