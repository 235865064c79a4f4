//! Authentication and request signing for the FalconX API.
//!
//! This crate provides secure credential management and HMAC request
//! signing for authenticated FalconX REST calls.
//!
//! # Features
//!
//! - **Secure Credentials**: the API secret and passphrase are wrapped in
//!   `SecretString` to prevent accidental logging and ensure memory is
//!   zeroed on drop.
//! - **HMAC-SHA256 Signing**: implements the FalconX signing scheme:
//!   `base64(HMAC-SHA256(base64decode(secret), timestamp + method + path + body))`.
//! - **Environment Loading**: credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, HttpMethod, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let signed = signer.sign_request(
//!     auth::current_timestamp()?,
//!     HttpMethod::Get,
//!     "/v1/pairs",
//!     None,
//! )?;
//! // signed.headers now carries FX-ACCESS-SIGN and friends.
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use signer::{
    current_timestamp, HttpMethod, RequestSigner, SignedRequest, HEADER_KEY, HEADER_PASSPHRASE,
    HEADER_SIGN, HEADER_TIMESTAMP,
};
