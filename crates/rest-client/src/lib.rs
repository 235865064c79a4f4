//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - GET and POST with raw string bodies (so callers can sign the exact
//!   bytes that go on the wire)
//! - JSON response deserialization
//! - Header injection for authentication
//! - Rate limit detection
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Pair {
//!     base_token: String,
//!     quote_token: String,
//! }
//!
//! let client = RestClient::with_default_timeout("https://api.falconx.io")?;
//! let pairs: Vec<Pair> = client.get("/v1/pairs", None, None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
