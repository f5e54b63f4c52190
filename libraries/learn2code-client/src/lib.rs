//! Learn2Code API Client
//!
//! HTTP client library for the Learn2Code backend.
//!
//! # Features
//!
//! - **Raw requests**: `ApiClient::request` issues one JSON round trip with
//!   optional bearer token and `X-User-Id` identity headers
//! - **Catalog**: course listing, per-user enrollments
//! - **Payments**: checkout submission, payment history
//! - **Students**: parent-managed student profiles
//! - **Auth**: login and registration
//!
//! # Example
//!
//! ```ignore
//! use learn2code_client::{ApiClient, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("http://localhost:8080"))?;
//!
//!     let identity = client
//!         .auth()
//!         .login("parent@example.com", "secret")
//!         .await?
//!         .into_identity();
//!
//!     let receipts = client.payments().my_payments(&identity).await?;
//!     println!("{} payments", receipts.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
mod payments;
mod students;
mod types;

// Re-export main types
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use reqwest::Method;
pub use types::{
    ApiConfig, ApiResponse, BillingDetails, CheckoutRequest, CheckoutResponse,
    CreateStudentRequest, LoginResponse, LoginUser, RegisterRequest, RegisterResponse,
    RequestBody, RequestOptions, DEFAULT_API_BASE,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use payments::PaymentsClient;
pub use students::StudentsClient;
