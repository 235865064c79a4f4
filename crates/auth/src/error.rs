use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The API secret is not valid base64.
    #[error("Invalid credentials: API secret is not valid base64")]
    InvalidCredentials,

    /// Unexpected failure while computing the signature.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The system clock reported a time before the Unix epoch.
    #[error("System clock is before the Unix epoch")]
    Clock,
}
