//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret
//! material and ensures memory is zeroed on drop.

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

/// FalconX API credentials.
///
/// The secret and passphrase are wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
///
/// The secret is expected to be base64-encoded key material as issued by
/// FalconX; it is decoded at signing time.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret: SecretString,
    passphrase: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `FALCONX_API_KEY` - The API key (public)
    /// - `FALCONX_API_SECRET` - The base64-encoded secret (private)
    /// - `FALCONX_PASSPHRASE` - The account passphrase (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if any variable is not set.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = std::env::var("FALCONX_API_KEY")
            .map_err(|_| AuthError::MissingEnvVar("FALCONX_API_KEY".into()))?;

        let secret = std::env::var("FALCONX_API_SECRET")
            .map_err(|_| AuthError::MissingEnvVar("FALCONX_API_SECRET".into()))?;

        let passphrase = std::env::var("FALCONX_PASSPHRASE")
            .map_err(|_| AuthError::MissingEnvVar("FALCONX_PASSPHRASE".into()))?;

        Ok(Self::new(api_key, secret, passphrase))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials come from other sources.
    pub fn new(api_key: String, secret: String, passphrase: String) -> Self {
        Self {
            api_key,
            secret: SecretString::from(secret),
            passphrase: SecretString::from(passphrase),
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the base64-encoded secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }

    /// Expose the passphrase for the authentication headers.
    ///
    /// **WARNING**: Never log or display the return value.
    pub fn expose_passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = ApiCredentials::new(
            "my_api_key".into(),
            "bXlfc2VjcmV0".into(),
            "my_passphrase".into(),
        );
        assert_eq!(creds.api_key(), "my_api_key");
        assert_eq!(creds.expose_secret(), "bXlfc2VjcmV0");
        assert_eq!(creds.expose_passphrase(), "my_passphrase");
    }

    #[test]
    fn test_debug_redacts_secret_material() {
        let creds = ApiCredentials::new(
            "my_api_key".into(),
            "c3VwZXJfc2VjcmV0".into(),
            "super_passphrase".into(),
        );
        let debug_str = format!("{:?}", creds);

        assert!(debug_str.contains("my_api_key"));
        assert!(!debug_str.contains("c3VwZXJfc2VjcmV0"));
        assert!(!debug_str.contains("super_passphrase"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
