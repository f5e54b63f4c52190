/// Account commands: register, login, logout
use super::Storefront;
use crate::error::{AppError, Result};
use learn2code_client::RegisterRequest;
use learn2code_core::Role;
use tracing::info;

pub async fn register(
    app: &Storefront,
    name: &str,
    email: &str,
    password: &str,
    role: Option<Role>,
) -> Result<String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput(
            "Name, email and password are required.".to_string(),
        ));
    }

    let request = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        role,
    };
    let response = app.client.auth().register(&request).await?;

    Ok(format!(
        "{} (user #{}). Run `learn2code login` to sign in.",
        response.message, response.id
    ))
}

pub async fn login(app: &Storefront, email: &str, password: &str) -> Result<String> {
    let identity = app
        .client
        .auth()
        .login(email, password)
        .await?
        .into_identity();
    app.store.save_session(&identity).await?;

    info!(user_id = %identity.id, "Session stored");
    let role = identity
        .role
        .map(|role| format!(" [{}]", role))
        .unwrap_or_default();
    Ok(format!("Signed in as {} <{}>{}", identity.name, identity.email, role))
}

pub async fn logout(app: &Storefront) -> Result<String> {
    if app.store.clear_session().await? {
        Ok("Signed out.".to_string())
    } else {
        Ok("Not signed in.".to_string())
    }
}
