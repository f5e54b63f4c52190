//! Learn2Code Core
//!
//! Platform-agnostic domain types and error handling shared by the cart,
//! the API client and the storefront application.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Course`, `Payment`, `StudentProfile`, `AuthIdentity`
//! - **Identifiers**: numeric newtypes matching the backend's primary keys
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use learn2code_core::types::{AuthIdentity, UserId};
//!
//! let identity = AuthIdentity::new(UserId::new(42), "Ada", "ada@example.com", "tkn");
//! assert_eq!(identity.bearer_token(), Some("tkn"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};

pub use types::{
    AuthIdentity, Course, CourseId, Payment, PaymentId, Role, StudentId, StudentProfile,
    StudentSummary, UserId,
};
