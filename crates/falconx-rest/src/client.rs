//! FalconX REST API client.

use std::time::Duration;

use auth::{current_timestamp, ApiCredentials, HttpMethod, RequestSigner};
use chrono::{DateTime, Utc};
use model::{OrderSide, Platform, TokenPair};
use rest_client::RestClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FalconxError;
use crate::requests::{
    ExecuteQuoteBody, GetQuoteRequest, PlaceOrderRequest, PlatformQuery, TimeRangeQuery,
    WithdrawQuery,
};
use crate::responses::{Balance, OrderRecord, Quote, Transfer};

/// Request timeout for FalconX API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production REST endpoint.
const PRODUCTION_BASE_URL: &str = "https://api.falconx.io";

/// FalconX REST API client.
///
/// Holds only immutable credentials and a pooled HTTP client, so it can
/// be shared freely across concurrent tasks. Every call is an independent
/// sign + request + parse sequence; signing failures surface before any
/// network activity.
pub struct FalconxClient {
    rest: RestClient,
    credentials: ApiCredentials,
}

impl FalconxClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, FalconxError> {
        Self::with_base_url(credentials, PRODUCTION_BASE_URL)
    }

    /// Create a client against a specific base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
    ) -> Result<Self, FalconxError> {
        let rest = RestClient::new(base_url, REQUEST_TIMEOUT)?;

        Ok(Self { rest, credentials })
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    // ========================================================================
    // RFQ Flow
    // ========================================================================

    /// Request a two-way, buy, or sell quote for a token pair.
    ///
    /// POST /v1/quotes
    pub async fn get_quote(&self, request: &GetQuoteRequest) -> Result<Quote, FalconxError> {
        let body = to_body(&request.body())?;

        tracing::info!(
            base = %request.base_token,
            quote = %request.quote_token,
            quantity = %request.quantity,
            side = ?request.side,
            "Requesting quote"
        );

        let quote: Quote = self.post("/v1/quotes", None, Some(body)).await?;

        tracing::debug!(
            fx_quote_id = %quote.fx_quote_id,
            buy_price = ?quote.buy_price,
            sell_price = ?quote.sell_price,
            "Quote received"
        );

        Ok(quote)
    }

    /// Execute a quote received via [`get_quote`](Self::get_quote).
    ///
    /// POST /v1/quotes/execute
    ///
    /// `side` must be buy or sell; a two-way quote is executed on one of
    /// its sides.
    pub async fn execute_quote(
        &self,
        fx_quote_id: &str,
        side: OrderSide,
    ) -> Result<Quote, FalconxError> {
        let body = to_body(&ExecuteQuoteBody { fx_quote_id, side })?;

        tracing::info!(fx_quote_id = %fx_quote_id, side = ?side, "Executing quote");

        let quote: Quote = self.post("/v1/quotes/execute", None, Some(body)).await?;

        tracing::info!(
            fx_quote_id = %quote.fx_quote_id,
            is_filled = quote.is_filled,
            price_executed = ?quote.price_executed,
            "Quote execution reported"
        );

        Ok(quote)
    }

    /// Check the status of a quote already requested.
    ///
    /// GET /v1/quotes/{fx_quote_id}
    pub async fn get_quote_status(&self, fx_quote_id: &str) -> Result<Quote, FalconxError> {
        let path = format!("/v1/quotes/{}", fx_quote_id);
        self.get(&path, None).await
    }

    /// Get a historical record of executed quotes in the time range.
    ///
    /// GET /v1/quotes
    pub async fn get_executed_quotes(
        &self,
        t_start: DateTime<Utc>,
        t_end: DateTime<Utc>,
        platform: Option<Platform>,
    ) -> Result<Vec<Quote>, FalconxError> {
        let query = to_query(&TimeRangeQuery {
            t_start: Some(t_start),
            t_end: Some(t_end),
            platform,
        })?;

        self.get("/v1/quotes", query).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Place a market or limit order.
    ///
    /// POST /v1/order, or /v3/order when the request sets
    /// `use_v3_endpoint`.
    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<OrderRecord, FalconxError> {
        let path = if request.use_v3_endpoint {
            "/v3/order"
        } else {
            "/v1/order"
        };
        let body = to_body(&request.body())?;

        tracing::info!(
            base = %request.base_token,
            quote = %request.quote_token,
            quantity = %request.quantity,
            side = ?request.side,
            order_type = ?request.order_type,
            path = %path,
            "Placing order"
        );

        let order: OrderRecord = self.post(path, None, Some(body)).await?;

        tracing::info!(status = ?order.status, "Order placed");

        Ok(order)
    }

    // ========================================================================
    // Account Data
    // ========================================================================

    /// Get the list of token pairs the account is eligible to trade.
    ///
    /// GET /v1/pairs
    pub async fn get_trading_pairs(&self) -> Result<Vec<TokenPair>, FalconxError> {
        self.get("/v1/pairs", None).await
    }

    /// Get account balances, optionally filtered by platform.
    ///
    /// GET /v1/balances
    pub async fn get_balances(
        &self,
        platform: Option<Platform>,
    ) -> Result<Vec<Balance>, FalconxError> {
        let query = to_query(&PlatformQuery { platform })?;
        self.get("/v1/balances", query).await
    }

    /// Get total balances across platforms.
    ///
    /// GET /v1/balances/total
    ///
    /// The payload shape is not pinned by the upstream contract; it is
    /// passed through as reported.
    pub async fn get_total_balances(&self) -> Result<Value, FalconxError> {
        self.get("/v1/balances/total", None).await
    }

    /// Get a historical record of deposits and withdrawals.
    ///
    /// GET /v1/transfers
    pub async fn get_transfers(
        &self,
        t_start: Option<DateTime<Utc>>,
        t_end: Option<DateTime<Utc>>,
        platform: Option<Platform>,
    ) -> Result<Vec<Transfer>, FalconxError> {
        let query = to_query(&TimeRangeQuery {
            t_start,
            t_end,
            platform,
        })?;

        self.get("/v1/transfers", query).await
    }

    /// Get traded volume over the time range (pass-through payload).
    ///
    /// GET /v1/get_trade_volume
    pub async fn get_trade_volume(
        &self,
        t_start: DateTime<Utc>,
        t_end: DateTime<Utc>,
    ) -> Result<Value, FalconxError> {
        let query = to_query(&TimeRangeQuery {
            t_start: Some(t_start),
            t_end: Some(t_end),
            platform: None,
        })?;

        self.get("/v1/get_trade_volume", query).await
    }

    /// Get the trailing 30-day traded volume (pass-through payload).
    ///
    /// GET /v1/get_30_day_trailing_volume
    pub async fn get_30_day_trailing_volume(&self) -> Result<Value, FalconxError> {
        self.get("/v1/get_30_day_trailing_volume", None).await
    }

    /// Get trade limits for a platform (pass-through payload).
    ///
    /// GET /v1/get_trade_limits/{platform}
    pub async fn get_trade_limits(&self, platform: Platform) -> Result<Value, FalconxError> {
        let path = format!("/v1/get_trade_limits/{}", platform);
        self.get(&path, None).await
    }

    /// Get per-pair trade size bounds (pass-through payload).
    ///
    /// GET /v1/trade_sizes
    pub async fn get_trade_sizes(&self) -> Result<Value, FalconxError> {
        self.get("/v1/trade_sizes", None).await
    }

    /// Get the account's API rate limits (pass-through payload).
    ///
    /// GET /v1/rate_limit
    pub async fn get_rate_limits(&self) -> Result<Value, FalconxError> {
        self.get("/v1/rate_limit", None).await
    }

    /// Submit a withdrawal request (pass-through payload).
    ///
    /// POST /v1/withdraw
    ///
    /// The upstream contract sends the parameters as a query string, not
    /// a body.
    pub async fn submit_withdrawal_request(
        &self,
        token: &str,
        amount: Decimal,
        platform: Platform,
    ) -> Result<Value, FalconxError> {
        let query = to_query(&WithdrawQuery {
            token,
            amount,
            platform,
        })?;

        tracing::info!(token = %token, amount = %amount, platform = %platform, "Submitting withdrawal request");

        self.post("/v1/withdraw", query, None).await
    }

    // ========================================================================
    // Signed transport
    // ========================================================================

    /// Sign and send a GET request.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<String>,
    ) -> Result<T, FalconxError> {
        let signed_path = path_with_query(path, query.as_deref());
        let signed = RequestSigner::new(&self.credentials).sign_request(
            current_timestamp()?,
            HttpMethod::Get,
            &signed_path,
            None,
        )?;

        let headers: Vec<(&str, &str)> = signed
            .headers
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();

        let result = self
            .rest
            .get(path, query.as_deref(), Some(&headers))
            .await?;

        Ok(result)
    }

    /// Sign and send a POST request.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<String>,
        body: Option<String>,
    ) -> Result<T, FalconxError> {
        let signed_path = path_with_query(path, query.as_deref());
        let signed = RequestSigner::new(&self.credentials).sign_request(
            current_timestamp()?,
            HttpMethod::Post,
            &signed_path,
            body.as_deref(),
        )?;

        let headers: Vec<(&str, &str)> = signed
            .headers
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();

        let result = self
            .rest
            .post(path, query.as_deref(), body.as_deref(), Some(&headers))
            .await?;

        Ok(result)
    }
}

/// The canonical path covered by the signature: the request path plus the
/// query string exactly as the transport will send it.
fn path_with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

/// Serialize a request body to the exact JSON string that will be signed
/// and sent.
fn to_body<B: serde::Serialize>(body: &B) -> Result<String, FalconxError> {
    serde_json::to_string(body).map_err(|e| FalconxError::Request(e.to_string()))
}

/// Serialize query parameters, collapsing an empty result to `None` so
/// no stray '?' is signed or sent.
fn to_query<Q: serde::Serialize>(query: &Q) -> Result<Option<String>, FalconxError> {
    let encoded =
        serde_html_form::to_string(query).map_err(|e| FalconxError::Request(e.to_string()))?;

    Ok(if encoded.is_empty() {
        None
    } else {
        Some(encoded)
    })
}

impl std::fmt::Debug for FalconxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FalconxClient")
            .field("base_url", &self.rest.base_url())
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
