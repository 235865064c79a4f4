//! FalconX REST API client.
//!
//! This crate provides a typed client for the FalconX brokerage REST API
//! with:
//!
//! - **Request signing**: every call is signed with the account's HMAC
//!   credentials before it leaves the process
//! - **RFQ flow**: request a quote, execute it, check its status
//! - **Order placement**: market and limit orders on the v1 or v3 endpoint
//! - **Account data**: balances, transfers, and executed-quote history
//! - **Error handling**: typed errors with the API's own error payloads
//!   surfaced as `FalconxError::Api`
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use falconx_rest::{FalconxClient, GetQuoteRequest};
//! use model::{OrderSide, QuoteSide};
//! use rust_decimal_macros::dec;
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//! let client = FalconxClient::new(credentials)?;
//!
//! // Request a two-way quote and execute the buy side
//! let quote = client
//!     .get_quote(&GetQuoteRequest::new("BTC", "USD", dec!(0.5), QuoteSide::TwoWay))
//!     .await?;
//! let execution = client
//!     .execute_quote(&quote.fx_quote_id, OrderSide::Buy)
//!     .await?;
//! ```

mod client;
mod error;
mod requests;
mod responses;

pub use client::FalconxClient;
pub use error::FalconxError;
pub use requests::{GetQuoteRequest, PlaceOrderRequest};
pub use responses::{Balance, OrderRecord, Quote, Transfer};
