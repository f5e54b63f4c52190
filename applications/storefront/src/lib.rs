//! Learn2Code Storefront
//!
//! Command-line storefront for the Learn2Code backend: browse the catalog,
//! keep a cart between runs, check out and read receipts.
//!
//! This library exposes the command layer for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types for convenience
pub use commands::Storefront;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use store::LocalStore;
