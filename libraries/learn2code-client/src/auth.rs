//! Authentication endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RequestOptions};
use tracing::{debug, info};

/// Login and registration against `/api/auth`.
pub struct AuthClient<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Login with email and password.
    ///
    /// The returned token is not stored; turn the response into an
    /// [`AuthIdentity`](learn2code_core::AuthIdentity) and pass it on later calls.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        debug!(email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let options = RequestOptions::post().json(serde_json::to_value(&request)?);

        let response: LoginResponse = self
            .client
            .request_json("/api/auth/login", options)
            .await?;

        info!(user_id = %response.user.id, "Login successful");
        Ok(response)
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        debug!(email = %request.email, "Registering account");

        let options = RequestOptions::post().json(serde_json::to_value(request)?);
        let response: RegisterResponse = self
            .client
            .request_json("/api/auth/register", options)
            .await?;

        info!(user_id = %response.id, "Account registered");
        Ok(response)
    }
}
