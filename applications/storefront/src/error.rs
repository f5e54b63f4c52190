/// Storefront error types
use learn2code_client::ApiError;
use learn2code_core::CourseId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not signed in (run `learn2code login` first)")]
    NotSignedIn,

    #[error("Your cart is empty.")]
    EmptyCart,

    #[error("Course {0} is not in the catalog")]
    CourseNotFound(CourseId),

    #[error("Course {0} is not in your cart")]
    NotInCart(CourseId),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Follow-up advice printed under the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Api(e) if e.is_unauthorized() => {
                Some("The backend rejected your session; run `learn2code login` again.")
            }
            _ => None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
