//! Main Learn2Code API client.

use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::error::{ApiError, Result};
use crate::payments::PaymentsClient;
use crate::students::StudentsClient;
use crate::types::{ApiConfig, ApiResponse, RequestBody, RequestOptions};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, PRAGMA,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const X_USER_ID: &str = "x-user-id";

/// Client for the Learn2Code backend.
///
/// Every call is a single round trip: no retries, no timeouts, no caching,
/// and no stored session. Identity is passed per call through
/// [`RequestOptions`]. The client is cheap to clone and safe to use from
/// concurrent tasks.
///
/// # Example
///
/// ```ignore
/// use learn2code_client::{ApiClient, ApiConfig, RequestOptions};
///
/// let client = ApiClient::new(ApiConfig::new("http://localhost:8080"))?;
///
/// let courses = client.catalog().list_courses().await?;
/// println!("{} courses for sale", courses.len());
///
/// let raw = client.request("/api/courses", RequestOptions::get()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let trimmed = config.base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = trimmed.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(format!("Learn2Code/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized base origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one JSON round trip against `base_url + path`.
    ///
    /// Returns the parsed body for 2xx responses (JSON when the response says
    /// `application/json`, text otherwise). Any other status becomes
    /// [`ApiError::RequestFailed`] carrying the backend's `message` field, or a
    /// synthesized message naming the status when there is none.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let RequestOptions {
            method,
            body,
            token,
            user_id,
            headers,
        } = options;

        let token = token.filter(|t| !t.is_empty());
        debug!(
            method = %method,
            url = %url,
            user_id = ?user_id.map(|id| id.get()),
            bearer = token.is_some(),
            "Sending API request"
        );

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        header_map.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        header_map.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        if let Some(token) = &token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidHeader(format!("authorization: {}", e)))?;
            header_map.insert(AUTHORIZATION, value);
        }
        if let Some(user_id) = user_id {
            header_map.insert(
                HeaderName::from_static(X_USER_ID),
                HeaderValue::from(user_id.get()),
            );
        }
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            if name == CONTENT_TYPE {
                debug!(value = %value, "Ignoring caller Content-Type override");
                continue;
            }
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            header_map.insert(name, value);
        }

        let mut builder = self.http.request(method, &url).headers(header_map);
        match body {
            Some(RequestBody::Json(value)) => builder = builder.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Raw(text)) => builder = builder.body(text),
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, url = %url, "Received API response");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = error_message(status, &error_text);
            warn!(status = %status, url = %url, message = %message, "API request failed");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let text = response.text().await?;

        if !is_json {
            return Ok(ApiResponse::Text(text));
        }
        if text.trim().is_empty() {
            return Ok(ApiResponse::Json(serde_json::Value::Null));
        }

        serde_json::from_str(&text)
            .map(ApiResponse::Json)
            .map_err(|e| ApiError::Parse(format!("Invalid JSON from {}: {}", path, e)))
    }

    /// [`request`](Self::request), then deserialize the JSON body into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        match self.request(path, options).await? {
            ApiResponse::Json(value) => serde_json::from_value(value).map_err(|e| {
                ApiError::Parse(format!("Unexpected response shape from {}: {}", path, e))
            }),
            ApiResponse::Text(_) => Err(ApiError::Parse(format!(
                "Expected a JSON response from {}",
                path
            ))),
        }
    }

    /// Login and registration.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    /// Course catalog and enrollments.
    pub fn catalog(&self) -> CatalogClient<'_> {
        CatalogClient::new(self)
    }

    /// Checkout and payment history.
    pub fn payments(&self) -> PaymentsClient<'_> {
        PaymentsClient::new(self)
    }

    /// Student profiles of a parent account.
    pub fn students(&self) -> StudentsClient<'_> {
        StudentsClient::new(self)
    }
}

/// Best-effort extraction of the backend's error message.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("Request failed ({} {})", status.as_u16(), reason),
            None => format!("Request failed ({})", status.as_u16()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(ApiClient::new(ApiConfig::new("https://example.com")).is_ok());
        assert!(ApiClient::new(ApiConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(ApiClient::new(ApiConfig::new("")).is_err());
        assert!(ApiClient::new(ApiConfig::new("   ")).is_err());
        assert!(ApiClient::new(ApiConfig::new("not-a-url")).is_err());
        assert!(ApiClient::new(ApiConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = ApiClient::new(ApiConfig::new("https://example.com//")).expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn error_message_prefers_backend_message() {
        let msg = error_message(StatusCode::NOT_FOUND, r#"{"message":"Not found"}"#);
        assert_eq!(msg, "Not found");
    }

    #[test]
    fn error_message_synthesizes_from_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed (500 Internal Server Error)"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            "Request failed (502 Bad Gateway)"
        );
        // JSON without a usable message
        assert_eq!(
            error_message(StatusCode::CONFLICT, r#"{"error":"email_in_use","message":""}"#),
            "Request failed (409 Conflict)"
        );
    }

    #[test]
    fn error_message_without_canonical_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(error_message(status, "oops"), "Request failed (599)");
    }
}
