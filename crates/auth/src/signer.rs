//! HMAC-SHA256 request signing for the FalconX API.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::ApiCredentials;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request signature.
pub const HEADER_SIGN: &str = "FX-ACCESS-SIGN";
/// Header carrying the signing timestamp (integer Unix seconds).
pub const HEADER_TIMESTAMP: &str = "FX-ACCESS-TIMESTAMP";
/// Header carrying the API key.
pub const HEADER_KEY: &str = "FX-ACCESS-KEY";
/// Header carrying the account passphrase.
pub const HEADER_PASSPHRASE: &str = "FX-ACCESS-PASSPHRASE";

const HEADER_CONTENT_TYPE: &str = "Content-Type";
const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP methods used by the FalconX API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Uppercase wire form, as signed into the canonical message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully signed request, ready to hand to the transport.
///
/// `path` includes the query string, and `body` is the exact payload the
/// transport must send; the signature covers both byte-for-byte.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
    pub timestamp: i64,
    pub signature: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Request signer for authenticated FalconX API calls.
///
/// Holds only a reference to the immutable credentials; signing is a pure
/// function of its inputs, so a signer may be shared freely across
/// concurrent callers.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a request and return the base64-encoded signature.
    ///
    /// The canonical message is the concatenation of the timestamp, the
    /// uppercase method, the path (including any query string), and the
    /// body, with no separators. The base64 secret is decoded to raw key
    /// bytes, the message is HMAC-SHA256'd under that key, and the digest
    /// is base64-encoded.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidCredentials` if the secret is not valid
    /// base64, before any message material is touched.
    pub fn sign(
        &self,
        timestamp: i64,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, AuthError> {
        let key = BASE64
            .decode(self.credentials.expose_secret())
            .map_err(|_| AuthError::InvalidCredentials)?;

        let mut mac =
            HmacSha256::new_from_slice(&key).map_err(|e| AuthError::Signing(e.to_string()))?;

        mac.update(timestamp.to_string().as_bytes());
        mac.update(method.as_str().as_bytes());
        mac.update(path.as_bytes());
        if let Some(body) = body {
            mac.update(body.as_bytes());
        }

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Sign a request and build the full authentication header set.
    ///
    /// The headers are the fixed FalconX set: signature, timestamp, API
    /// key, and passphrase, plus the JSON content type.
    pub fn sign_request(
        &self,
        timestamp: i64,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<SignedRequest, AuthError> {
        let signature = self.sign(timestamp, method, path, body)?;

        let headers = vec![
            (HEADER_SIGN, signature.clone()),
            (HEADER_TIMESTAMP, timestamp.to_string()),
            (HEADER_KEY, self.credentials.api_key().to_string()),
            (
                HEADER_PASSPHRASE,
                self.credentials.expose_passphrase().to_string(),
            ),
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
        ];

        Ok(SignedRequest {
            method,
            path: path.to_string(),
            body: body.map(str::to_string),
            timestamp,
            signature,
            headers,
        })
    }
}

/// Current Unix time in whole seconds.
///
/// # Errors
/// Returns `AuthError::Clock` if the system clock is before the epoch.
/// This should never happen on a sane host; callers treat it as fatal.
pub fn current_timestamp() -> Result<i64, AuthError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AuthError::Clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64 of b"testsecret"
    const TEST_SECRET: &str = "dGVzdHNlY3JldA==";

    fn test_credentials() -> ApiCredentials {
        ApiCredentials::new("key".into(), TEST_SECRET.into(), "passphrase".into())
    }

    #[test]
    fn test_sign_known_vector_get() {
        // base64(HMAC-SHA256(b"testsecret", b"1700000000GET/v1/quote"))
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let signature = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quote", None)
            .unwrap();

        assert_eq!(signature, "qEdpRHhzwUZYgQbAWIaxuOqJp+dieQnlayr/hW+HRhg=");
    }

    #[test]
    fn test_sign_known_vector_post_with_body() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let body = r#"{"fx_quote_id":"abc","side":"buy"}"#;
        let signature = signer
            .sign(
                1_700_000_000,
                HttpMethod::Post,
                "/v1/quotes/execute",
                Some(body),
            )
            .unwrap();

        assert_eq!(signature, "FJeffaZLBSEI+RzeNJdZdnda9JAVS1ccVAfQ0sk+ufI=");
    }

    #[test]
    fn test_sign_known_vector_path_with_query() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let signature = signer
            .sign(
                1_700_000_000,
                HttpMethod::Get,
                "/v1/quotes?platform=api",
                None,
            )
            .unwrap();

        assert_eq!(signature, "DgScTqzsHSyxa1gkuy+DehbNyjBlFkV8mduUnKRcbsc=");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let a = signer
            .sign(1_700_000_000, HttpMethod::Post, "/v1/quotes", Some("{}"))
            .unwrap();
        let b = signer
            .sign(1_700_000_000, HttpMethod::Post, "/v1/quotes", Some("{}"))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_changes_with_any_field() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let base = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quote", None)
            .unwrap();

        let other_timestamp = signer
            .sign(1_700_000_001, HttpMethod::Get, "/v1/quote", None)
            .unwrap();
        let other_method = signer
            .sign(1_700_000_000, HttpMethod::Post, "/v1/quote", None)
            .unwrap();
        let other_path = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quotes", None)
            .unwrap();
        let other_body = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quote", Some("x"))
            .unwrap();

        assert_ne!(base, other_timestamp);
        assert_ne!(base, other_method);
        assert_ne!(base, other_path);
        assert_ne!(base, other_body);
    }

    #[test]
    fn test_empty_body_signs_like_no_body() {
        // The canonical message appends nothing for an absent body, so an
        // explicit empty string must produce the same signature.
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds);

        let absent = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quote", None)
            .unwrap();
        let empty = signer
            .sign(1_700_000_000, HttpMethod::Get, "/v1/quote", Some(""))
            .unwrap();

        assert_eq!(absent, empty);
    }

    #[test]
    fn test_invalid_base64_secret_fails() {
        let creds = ApiCredentials::new(
            "key".into(),
            "not base64 at all!!".into(),
            "passphrase".into(),
        );
        let signer = RequestSigner::new(&creds);

        let result = signer.sign(1_700_000_000, HttpMethod::Get, "/v1/quote", None);

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_sign_request_builds_header_set() {
        let creds = ApiCredentials::new(
            "my_key".into(),
            TEST_SECRET.into(),
            "my_passphrase".into(),
        );
        let signer = RequestSigner::new(&creds);

        let signed = signer
            .sign_request(1_700_000_000, HttpMethod::Get, "/v1/quote", None)
            .unwrap();

        assert_eq!(signed.timestamp, 1_700_000_000);
        assert_eq!(signed.path, "/v1/quote");
        assert_eq!(
            signed.signature,
            "qEdpRHhzwUZYgQbAWIaxuOqJp+dieQnlayr/hW+HRhg="
        );

        let headers: std::collections::HashMap<_, _> =
            signed.headers.iter().cloned().collect();
        assert_eq!(
            headers[HEADER_SIGN],
            "qEdpRHhzwUZYgQbAWIaxuOqJp+dieQnlayr/hW+HRhg="
        );
        assert_eq!(headers[HEADER_TIMESTAMP], "1700000000");
        assert_eq!(headers[HEADER_KEY], "my_key");
        assert_eq!(headers[HEADER_PASSPHRASE], "my_passphrase");
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_current_timestamp_is_plausible() {
        let ts = current_timestamp().unwrap();
        // After 2023-01-01, before 2100.
        assert!(ts > 1_672_531_200);
        assert!(ts < 4_102_444_800);
    }
}
