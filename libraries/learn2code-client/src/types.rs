//! Types for Learn2Code API requests and responses.

use learn2code_cart::{CartState, CheckoutSummary};
use learn2code_core::{AuthIdentity, CourseId, PaymentId, Role, StudentId, UserId};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default backend origin when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Configuration for connecting to the Learn2Code backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base origin every request path is appended to (e.g. "http://localhost:8080")
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config for the given origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

// =============================================================================
// Request / Response
// =============================================================================

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized with `serde_json` before sending
    Json(serde_json::Value),
    /// Sent verbatim
    Raw(String),
}

/// Per-call options for [`ApiClient::request`](crate::ApiClient::request).
///
/// Identity travels with each call; the client keeps no session.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    /// Bearer credential; empty tokens are not sent
    pub token: Option<String>,
    /// Sent as `X-User-Id`
    pub user_id: Option<UserId>,
    /// Extra headers, applied after the built-in ones. `Content-Type` cannot be overridden.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            token: None,
            user_id: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// GET with no identity
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new()
    }

    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a pre-encoded body
    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(body.into()));
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach both the bearer token and `X-User-Id` of a signed-in user
    pub fn identity(mut self, identity: &AuthIdentity) -> Self {
        self.token = identity.bearer_token().map(str::to_string);
        self.user_id = Some(identity.id);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A successful response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The response declared `application/json`
    Json(serde_json::Value),
    /// Any other content type
    Text(String),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Text(text) => Some(text),
            ApiResponse::Json(_) => None,
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User summary returned at login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response from successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

impl LoginResponse {
    /// Identity to pass on later calls
    pub fn into_identity(self) -> AuthIdentity {
        let role = self.user.role.as_deref().and_then(|r| r.parse::<Role>().ok());
        AuthIdentity {
            id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            token: self.token,
            role,
        }
    }
}

/// Request body for account registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Response from successful registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub id: UserId,
}

// =============================================================================
// Checkout Types
// =============================================================================

/// Who pays and how, collected on the checkout form.
#[derive(Debug, Clone, Default)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub card_brand: Option<String>,
    pub card_last4: Option<String>,
    /// Enroll the purchase under this student instead of the parent account
    pub student_id: Option<StudentId>,
}

/// Request body for `POST /api/payments/checkout`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub course_ids: Vec<CourseId>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub currency: String,
    pub method: String,
    pub provider: String,
    /// Idempotency key; resubmitting the same key does not charge twice
    pub provider_txn_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    pub billing_name: String,
    pub billing_email: String,
    pub billing_address: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
}

impl CheckoutRequest {
    /// Build an order for everything in the cart.
    pub fn from_cart(
        cart: &CartState,
        summary: &CheckoutSummary,
        currency: impl Into<String>,
        billing: BillingDetails,
    ) -> Self {
        Self {
            course_ids: cart.course_ids(),
            amount: summary.subtotal,
            tax_amount: summary.tax_amount,
            total_amount: summary.total_amount,
            currency: currency.into(),
            method: "card".to_string(),
            provider: "mock".to_string(),
            provider_txn_id: uuid::Uuid::new_v4().to_string(),
            status: "completed".to_string(),
            card_brand: billing.card_brand,
            card_last4: billing.card_last4,
            billing_name: billing.name,
            billing_email: billing.email,
            billing_address: serde_json::Map::new(),
            student_id: billing.student_id,
        }
    }
}

/// Response from a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub payment_id: PaymentId,
    pub receipt_number: String,
}

// =============================================================================
// Student Types
// =============================================================================

/// Request body for creating a student profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub age: Option<u32>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn2code_cart::CartLineItem;

    #[test]
    fn identity_options_skip_empty_token() {
        let identity = AuthIdentity::new(UserId::new(42), "Ada", "ada@example.com", "");
        let options = RequestOptions::get().identity(&identity);

        assert_eq!(options.user_id, Some(UserId::new(42)));
        assert!(options.token.is_none());
    }

    #[test]
    fn login_response_into_identity_parses_role() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "user": {"id": 7, "name": "Ada", "email": "ada@example.com", "role": "PARENT"}
        }))
        .unwrap();

        let identity = response.into_identity();
        assert_eq!(identity.id, UserId::new(7));
        assert_eq!(identity.token, "abc");
        assert_eq!(identity.role, Some(Role::Parent));
    }

    #[test]
    fn checkout_request_from_cart() {
        let cart = CartState::from_items(vec![
            CartLineItem::new(CourseId::new(3), "Web", "20".parse().unwrap()),
            CartLineItem::new(CourseId::new(1), "Scratch", "39.99".parse().unwrap()),
        ]);
        let summary = CheckoutSummary::from_cart(&cart, "0.13".parse().unwrap());
        let billing = BillingDetails {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..BillingDetails::default()
        };

        let request = CheckoutRequest::from_cart(&cart, &summary, "USD", billing);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["courseIds"], serde_json::json!([3, 1]));
        assert_eq!(json["amount"], 59.99);
        assert_eq!(json["taxAmount"], 7.8);
        assert_eq!(json["totalAmount"], 67.79);
        assert_eq!(json["status"], "completed");
        assert_eq!(json["billingAddress"], serde_json::json!({}));
        assert!(json.get("studentId").is_none());
        assert!(!request.provider_txn_id.is_empty());
    }

    #[test]
    fn checkout_requests_get_distinct_idempotency_keys() {
        let cart = CartState::new();
        let summary = CheckoutSummary::from_cart(&cart, Decimal::ZERO);
        let a = CheckoutRequest::from_cart(&cart, &summary, "USD", BillingDetails::default());
        let b = CheckoutRequest::from_cart(&cart, &summary, "USD", BillingDetails::default());
        assert_ne!(a.provider_txn_id, b.provider_txn_id);
    }
}
