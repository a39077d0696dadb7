use reqwest::StatusCode;
use thiserror::Error;

/// Prefix carried by every error envelope.
pub const ERROR_PREFIX: &str = "AI service error";

/// Everything that can go wrong between sending the prompt and handing back
/// validated JSON text.
#[derive(Debug, Error)]
pub enum AIServiceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("error parsing chat response: {0}")]
    InvalidResponseBody(String),

    #[error("{0}")]
    MalformedResponse(&'static str),

    #[error("model returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Render `{"error": "<message>"}`, keeping the space after the colon.
/// The message is escaped by serde_json.
pub fn error_envelope(message: &str) -> String {
    let escaped = serde_json::Value::String(message.to_string());
    format!("{{\"error\": {}}}", escaped)
}

/// Envelope for a failed AI call, `{"error": "AI service error: ..."}`.
pub fn ai_service_envelope(description: &str) -> String {
    error_envelope(&format!("{}: {}", ERROR_PREFIX, description))
}
