//! FalconX API request bodies and query parameters.

use chrono::{DateTime, Utc};
use model::{OrderSide, OrderType, Platform, QuoteSide, TimeInForce, TokenPair, TokenQuantity};
use rust_decimal::Decimal;
use serde::Serialize;

/// Parameters for requesting a quote.
///
/// POST /v1/quotes
#[derive(Debug, Clone)]
pub struct GetQuoteRequest {
    /// Base token, e.g. "BTC".
    pub base_token: String,
    /// Quote token, e.g. "USD".
    pub quote_token: String,
    /// Quantity to quote for.
    pub quantity: Decimal,
    /// Two-way, buy, or sell.
    pub side: QuoteSide,
    /// Denominate `quantity` in the quote token instead of the base
    /// token. Defaults to `false` (base-token quantity).
    pub quantity_in_quote_token: bool,
}

impl GetQuoteRequest {
    /// Create a quote request with the default base-token quantity.
    pub fn new(
        base_token: impl Into<String>,
        quote_token: impl Into<String>,
        quantity: Decimal,
        side: QuoteSide,
    ) -> Self {
        Self {
            base_token: base_token.into(),
            quote_token: quote_token.into(),
            quantity,
            side,
            quantity_in_quote_token: false,
        }
    }

    pub(crate) fn body(&self) -> QuoteBody {
        let quantity_token = if self.quantity_in_quote_token {
            &self.quote_token
        } else {
            &self.base_token
        };

        QuoteBody {
            token_pair: TokenPair::new(&self.base_token, &self.quote_token),
            quantity: TokenQuantity {
                token: quantity_token.clone(),
                value: self.quantity,
            },
            side: self.side,
        }
    }
}

/// Parameters for placing an order.
///
/// POST /v1/order, or /v3/order when `use_v3_endpoint` is set.
#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    /// Base token, e.g. "BTC".
    pub base_token: String,
    /// Quote token, e.g. "USD".
    pub quote_token: String,
    /// Quantity, denominated in the base token.
    pub quantity: Decimal,
    /// Buy or sell.
    pub side: OrderSide,
    /// Market or limit.
    pub order_type: OrderType,
    /// Time in force for limit orders. Defaults to `None` (omitted).
    pub time_in_force: Option<TimeInForce>,
    /// Limit price for limit orders. Defaults to `None` (omitted).
    pub limit_price: Option<Decimal>,
    /// Allowed slippage for market orders, in basis points. Defaults to
    /// `None` (omitted).
    pub slippage_bps: Option<Decimal>,
    /// Client-assigned order identifier. Defaults to `None` (omitted).
    pub client_order_id: Option<String>,
    /// Target the v3 order endpoint instead of the legacy v1 endpoint.
    /// Defaults to `false`.
    pub use_v3_endpoint: bool,
}

impl PlaceOrderRequest {
    /// Create an order request with all optional fields unset.
    pub fn new(
        base_token: impl Into<String>,
        quote_token: impl Into<String>,
        quantity: Decimal,
        side: OrderSide,
        order_type: OrderType,
    ) -> Self {
        Self {
            base_token: base_token.into(),
            quote_token: quote_token.into(),
            quantity,
            side,
            order_type,
            time_in_force: None,
            limit_price: None,
            slippage_bps: None,
            client_order_id: None,
            use_v3_endpoint: false,
        }
    }

    pub(crate) fn body(&self) -> OrderBody {
        OrderBody {
            token_pair: TokenPair::new(&self.base_token, &self.quote_token),
            quantity: TokenQuantity {
                token: self.base_token.clone(),
                value: self.quantity,
            },
            side: self.side,
            order_type: self.order_type,
            time_in_force: self.time_in_force,
            limit_price: self.limit_price,
            slippage_bps: self.slippage_bps,
            client_order_id: self.client_order_id.clone(),
        }
    }
}

/// Wire body for POST /v1/quotes.
#[derive(Debug, Serialize)]
pub(crate) struct QuoteBody {
    pub token_pair: TokenPair,
    pub quantity: TokenQuantity,
    pub side: QuoteSide,
}

/// Wire body for POST /v1/quotes/execute.
#[derive(Debug, Serialize)]
pub(crate) struct ExecuteQuoteBody<'a> {
    pub fx_quote_id: &'a str,
    pub side: OrderSide,
}

/// Wire body for POST /v1/order and /v3/order.
#[derive(Debug, Serialize)]
pub(crate) struct OrderBody {
    pub token_pair: TokenPair,
    pub quantity: TokenQuantity,
    pub side: OrderSide,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_bps: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

/// Query parameters for time-ranged history endpoints.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TimeRangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

/// Query parameters for platform-filtered endpoints.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PlatformQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

/// Query parameters for POST /v1/withdraw.
///
/// The upstream contract sends these as query parameters, not a body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WithdrawQuery<'a> {
    pub token: &'a str,
    pub amount: Decimal,
    pub platform: Platform,
}
