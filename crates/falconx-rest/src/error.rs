//! FalconX REST API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the FalconX REST API.
#[derive(Debug, Error)]
pub enum FalconxError {
    /// Authentication error (invalid credentials, signing failure).
    ///
    /// Raised before any network call is attempted.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// REST client error (network, timeout, etc.).
    #[error("REST client error: {0}")]
    Rest(RestError),

    /// FalconX API error (non-success status with a reported payload).
    #[error("FalconX API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message reported by the API, or the raw body if unparseable.
        message: String,
    },

    /// Failed to build the request (body or query serialization).
    #[error("Request build error: {0}")]
    Request(String),
}

impl FalconxError {
    /// Build an `Api` error from a non-success response body.
    ///
    /// The API reports errors as JSON with a `message` or `error` field;
    /// anything else is carried through as the raw body text.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ApiErrorBody {
            message: Option<String>,
            error: Option<serde_json::Value>,
        }

        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| {
                b.message.or_else(|| {
                    b.error.map(|e| match e {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                })
            })
            .unwrap_or_else(|| body.to_string());

        Self::Api { status, message }
    }
}

impl From<RestError> for FalconxError {
    /// Transport errors pass through; HTTP-status errors are re-parsed
    /// into `Api` so callers see the brokerage's own message.
    fn from(err: RestError) -> Self {
        match err {
            RestError::HttpError { status, message } => Self::from_api_response(status, &message),
            other => Self::Rest(other),
        }
    }
}
