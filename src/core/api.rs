//! Client for the external automation backend
//!
//! Wire types mirror the backend's JSON models. The HTTP calls themselves
//! only exist in the browser build; on the server they report
//! [`ApiError::Unavailable`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::OutputFormat;
use super::history::Outcome;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SEND_EMAIL_ENDPOINT: &str = "/api/send-email";
pub const GENERATE_DOCS_ENDPOINT: &str = "/api/generate-docs";
pub const DOWNLOAD_DOCS_ENDPOINT: &str = "/api/download-docs";
pub const HEALTH_ENDPOINT: &str = "/health";

/// Body sent by the email composer; the backend writes the content
pub const GENERATED_EMAIL_BODY: &str =
    "Please generate appropriate content for this email based on the subject line.";

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("No authentication token found")]
    MissingToken,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API call failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Backend calls are only available in the browser")]
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub openai_api_key: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: String,
}

/// Error body returned by the backend on rejected requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub needs_authentication: bool,
    #[serde(default)]
    pub oauth_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateDocumentRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateDocumentResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub needs_authentication: bool,
    #[serde(default)]
    pub oauth_url: Option<String>,
    #[serde(default)]
    pub needs_input: bool,
    #[serde(default)]
    pub file_path: Option<String>,
}

/// The `{success, error}` part shared by feature responses
pub trait Envelope {
    fn success(&self) -> bool;
    fn error(&self) -> Option<&str>;
    fn oauth_url(&self) -> Option<&str>;

    fn outcome(&self) -> Outcome {
        Outcome::from_envelope(self.success(), self.error())
    }

    /// OAuth link to show when the backend needs further authorization
    fn pending_authorization(&self) -> Option<&str> {
        self.oauth_url().filter(|url| !url.is_empty())
    }
}

impl Envelope for SendEmailResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn oauth_url(&self) -> Option<&str> {
        self.oauth_url.as_deref()
    }
}

impl Envelope for GenerateDocumentResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn oauth_url(&self) -> Option<&str> {
        self.oauth_url.as_deref()
    }
}

/// Outcome to record for a finished backend call
pub fn outcome_of<T: Envelope>(result: &Result<T, ApiError>) -> Outcome {
    match result {
        Ok(response) => response.outcome(),
        Err(e) => Outcome::Failure(e.to_string()),
    }
}

/// Resolve an endpoint against the backend base URL.
/// Absolute URLs are passed through.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), endpoint)
    }
}

/// User id sent along with a new API key
pub fn generate_user_id(now: DateTime<Utc>) -> String {
    format!("user_{}", now.timestamp_millis())
}

/// Backend client bound to a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        endpoint_url(&self.base_url, endpoint)
    }

    pub fn download_url(&self, file_name: &str) -> String {
        self.url(&format!("{}/{}", DOWNLOAD_DOCS_ENDPOINT, file_name))
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// Exchange an OpenAI API key for a backend session
    pub async fn login(&self, api_key: &str) -> Result<LoginResponse, ApiError> {
        use gloo_net::http::Request;

        let request = LoginRequest {
            openai_api_key: api_key.to_string(),
            user_id: generate_user_id(Utc::now()),
        };

        let response = Request::post(&self.url(LOGIN_ENDPOINT))
            .header("Content-Type", "application/json")
            .json(&request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
            Err(ApiError::Rejected(
                body.detail.unwrap_or_else(|| "Invalid API key".to_string()),
            ))
        }
    }

    pub async fn send_email(
        &self,
        token: Option<String>,
        request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, ApiError> {
        self.post_envelope(SEND_EMAIL_ENDPOINT, token, request, "Failed to send email")
            .await
    }

    pub async fn generate_document(
        &self,
        token: Option<String>,
        request: &GenerateDocumentRequest,
    ) -> Result<GenerateDocumentResponse, ApiError> {
        self.post_envelope(
            GENERATE_DOCS_ENDPOINT,
            token,
            request,
            "Failed to generate document",
        )
        .await
    }

    /// Fetch a generated document's bytes
    pub async fn download_document(
        &self,
        token: Option<String>,
        file_name: &str,
    ) -> Result<Vec<u8>, ApiError> {
        use gloo_net::http::Request;

        let token = token.ok_or(ApiError::MissingToken)?;

        let response = Request::get(&self.download_url(file_name))
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a bearer-authorized JSON request and decode an envelope reply.
    ///
    /// Non-2xx replies become [`ApiError::Rejected`] with the envelope's
    /// error text, or `fallback` when there is none.
    async fn post_envelope<Req, Resp>(
        &self,
        endpoint: &str,
        token: Option<String>,
        request: &Req,
        fallback: &str,
    ) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: Envelope + serde::de::DeserializeOwned,
    {
        use gloo_net::http::Request;

        let token = token.ok_or(ApiError::MissingToken)?;

        let response = Request::post(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", token))
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let status_text = response.status_text();

        match response.json::<Resp>().await {
            Ok(body) if ok => Ok(body),
            Ok(body) => Err(ApiError::Rejected(
                body.error()
                    .filter(|e| !e.is_empty())
                    .unwrap_or(fallback)
                    .to_string(),
            )),
            Err(_) if !ok => Err(ApiError::Status {
                status,
                status_text,
            }),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl ApiClient {
    pub async fn login(&self, _api_key: &str) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    pub async fn send_email(
        &self,
        _token: Option<String>,
        _request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    pub async fn generate_document(
        &self,
        _token: Option<String>,
        _request: &GenerateDocumentRequest,
    ) -> Result<GenerateDocumentResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    pub async fn download_document(
        &self,
        _token: Option<String>,
        _file_name: &str,
    ) -> Result<Vec<u8>, ApiError> {
        Err(ApiError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:8000", SEND_EMAIL_ENDPOINT),
            "http://localhost:8000/api/send-email"
        );
        assert_eq!(
            endpoint_url("https://api.example.com/", HEALTH_ENDPOINT),
            "https://api.example.com/health"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000", "https://other.host/auth/login"),
            "https://other.host/auth/login"
        );
    }

    #[test]
    fn test_download_url() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(
            client.download_url("report.pdf"),
            "http://localhost:8000/api/download-docs/report.pdf"
        );
    }

    #[test]
    fn test_generate_user_id() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(generate_user_id(now), "user_1700000000123");
    }

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            openai_api_key: "sk-test".to_string(),
            user_id: "user_1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["openai_api_key"], "sk-test");
        assert_eq!(value["user_id"], "user_1");
    }

    #[test]
    fn test_email_response_needs_authentication() {
        let raw = r#"{
            "success": false,
            "error": "Gmail authorization required",
            "user_id": "user_1",
            "needs_authentication": true,
            "oauth_url": "https://accounts.google.com/o/oauth2/auth?x=1"
        }"#;
        let response: SendEmailResponse = serde_json::from_str(raw).unwrap();

        assert!(response.needs_authentication);
        assert_eq!(
            response.pending_authorization(),
            Some("https://accounts.google.com/o/oauth2/auth?x=1")
        );
        assert_eq!(
            response.outcome(),
            Outcome::Failure("Gmail authorization required".to_string())
        );
    }

    #[test]
    fn test_document_response_defaults() {
        let response: GenerateDocumentResponse =
            serde_json::from_str(r#"{"success": true, "file_path": "/out/doc.md"}"#).unwrap();

        assert_eq!(response.outcome(), Outcome::Success);
        assert_eq!(response.file_path.as_deref(), Some("/out/doc.md"));
        assert!(response.pending_authorization().is_none());
        assert!(response.user_id.is_empty());
    }

    #[test]
    fn test_generate_request_omits_empty_urls() {
        let request = GenerateDocumentRequest {
            topic: "Rust".to_string(),
            urls: Vec::new(),
            output_format: OutputFormat::Html,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("urls").is_none());
        assert_eq!(value["output_format"], "html");
    }

    #[test]
    fn test_outcome_of() {
        let sent: Result<SendEmailResponse, ApiError> = Ok(SendEmailResponse {
            success: true,
            ..Default::default()
        });
        let offline: Result<SendEmailResponse, ApiError> =
            Err(ApiError::Network("Network error".to_string()));
        let no_token: Result<GenerateDocumentResponse, ApiError> = Err(ApiError::MissingToken);

        assert_eq!(outcome_of(&sent), Outcome::Success);
        assert_eq!(
            outcome_of(&offline),
            Outcome::Failure("Network error: Network error".to_string())
        );
        assert_eq!(
            outcome_of(&no_token),
            Outcome::Failure("No authentication token found".to_string())
        );
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::MissingToken.to_string(),
            "No authentication token found"
        );
        assert_eq!(
            ApiError::Status {
                status: 502,
                status_text: "Bad Gateway".to_string()
            }
            .to_string(),
            "API call failed: 502 Bad Gateway"
        );
        assert_eq!(ApiError::Rejected("Quota".to_string()).to_string(), "Quota");
    }
}
