//! FalconX API response types.

use chrono::{DateTime, Utc};
use model::{OrderSide, QuoteSide, TokenPair, TokenQuantity};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A quote record, as returned by the quote request, execution, and
/// status endpoints.
///
/// Prices arrive as JSON numbers and quantities as strings; both are
/// decoded to `Decimal`. Sides the quote was not requested for are null.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub status: String,
    pub fx_quote_id: String,
    pub buy_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    /// Venue the quote was placed through; present on history lookups.
    pub platform: Option<String>,
    pub token_pair: TokenPair,
    pub quantity_requested: TokenQuantity,
    pub side_requested: QuoteSide,
    pub t_quote: DateTime<Utc>,
    pub t_expiry: DateTime<Utc>,
    pub is_filled: bool,
    pub side_executed: Option<OrderSide>,
    pub price_executed: Option<Decimal>,
    pub t_execute: Option<DateTime<Utc>>,
    pub error: Option<String>,
    /// Present on history lookups.
    pub trader_email: Option<String>,
}

/// An account balance entry from GET /v1/balances.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub token: String,
    pub balance: Decimal,
    /// Reported as a plain string; the API uses venue names beyond the
    /// query-filter set.
    pub platform: String,
}

/// A deposit or withdrawal record from GET /v1/transfers.
#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub platform: String,
    pub token: String,
    pub quantity: Decimal,
    pub t_create: DateTime<Utc>,
}

/// An order record from POST /v1/order or /v3/order.
///
/// The v1 and v3 payloads differ and neither is pinned by the upstream
/// contract, so only the stable envelope is typed; everything else is
/// carried through in `fields`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub status: Option<String>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_fresh_quote() {
        let json = r#"{
            "status": "success",
            "fx_quote_id": "00c884b056f949338788dfb59e495377",
            "buy_price": 12650,
            "sell_price": null,
            "token_pair": {
                "base_token": "BTC",
                "quote_token": "USD"
            },
            "quantity_requested": {
                "token": "BTC",
                "value": "10"
            },
            "side_requested": "buy",
            "t_quote": "2019-06-27T11:59:21.875725+00:00",
            "t_expiry": "2019-06-27T11:59:22.875725+00:00",
            "is_filled": false,
            "side_executed": null,
            "price_executed": null,
            "t_execute": null
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.status, "success");
        assert_eq!(quote.fx_quote_id, "00c884b056f949338788dfb59e495377");
        assert_eq!(quote.buy_price, Some(dec!(12650)));
        assert_eq!(quote.sell_price, None);
        assert_eq!(quote.quantity_requested.value, dec!(10));
        assert_eq!(quote.side_requested, QuoteSide::Buy);
        assert!(!quote.is_filled);
        assert!(quote.t_execute.is_none());
        assert!(quote.platform.is_none());
    }

    #[test]
    fn test_deserialize_executed_quote() {
        let json = r#"{
            "buy_price": 294.0,
            "error": null,
            "fx_quote_id": "fad0ac687b1e439a92a0bafd92441e48",
            "is_filled": true,
            "price_executed": 294.0,
            "quantity_requested": {"token": "ETH", "value": "0.10000"},
            "sell_price": 293.94,
            "side_executed": "buy",
            "side_requested": "two_way",
            "status": "success",
            "t_execute": "2019-07-03T21:45:10.358335+00:00",
            "t_expiry": "2019-07-03T21:45:17.198692+00:00",
            "t_quote": "2019-07-03T21:45:07.198688+00:00",
            "token_pair": {"base_token": "ETH", "quote_token": "USD"}
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert!(quote.is_filled);
        assert_eq!(quote.side_requested, QuoteSide::TwoWay);
        assert_eq!(quote.side_executed, Some(OrderSide::Buy));
        assert_eq!(quote.price_executed, Some(dec!(294.0)));
        assert!(quote.t_execute.is_some());
        assert!(quote.error.is_none());
    }

    #[test]
    fn test_deserialize_history_quote_with_platform() {
        let json = r#"{
            "buy_price": 293.1,
            "error": null,
            "fx_quote_id": "e2e1758f1a094a2a85825b592e9fc0d9",
            "is_filled": true,
            "price_executed": 293.1,
            "platform": "browser",
            "quantity_requested": {"token": "ETH", "value": "0.10000"},
            "sell_price": 293.03,
            "side_executed": "buy",
            "side_requested": "two_way",
            "status": "success",
            "t_execute": "2019-07-03T14:02:56.539710+00:00",
            "t_expiry": "2019-07-03T14:03:02.038093+00:00",
            "t_quote": "2019-07-03T14:02:52.038087+00:00",
            "token_pair": {"base_token": "ETH", "quote_token": "USD"},
            "trader_email": "trader1@company.com"
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.platform.as_deref(), Some("browser"));
        assert_eq!(quote.trader_email.as_deref(), Some("trader1@company.com"));
    }

    #[test]
    fn test_deserialize_balances() {
        let json = r#"[
            {"balance": 0.0, "token": "BTC", "platform": "browser"},
            {"balance": -1.3772005993291505, "token": "ETH", "platform": "api"},
            {"balance": 187.624207, "token": "USD", "platform": "api"}
        ]"#;

        let balances: Vec<Balance> = serde_json::from_str(json).unwrap();
        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].token, "BTC");
        assert_eq!(balances[0].balance, dec!(0.0));
        assert!(balances[1].balance.is_sign_negative());
        assert_eq!(balances[2].platform, "api");
    }

    #[test]
    fn test_deserialize_transfers() {
        let json = r#"[
            {
                "type": "deposit",
                "platform": "api",
                "token": "BTC",
                "quantity": 1.0,
                "t_create": "2019-06-20T01:01:01+00:00"
            },
            {
                "type": "withdrawal",
                "platform": "midas",
                "token": "BTC",
                "quantity": 1.0,
                "t_create": "2019-06-22T01:01:01+00:00"
            }
        ]"#;

        let transfers: Vec<Transfer> = serde_json::from_str(json).unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].transfer_type, "deposit");
        // Platforms outside the query-filter set still parse
        assert_eq!(transfers[1].platform, "midas");
        assert_eq!(transfers[1].quantity, dec!(1.0));
    }

    #[test]
    fn test_deserialize_order_record_passes_through_unknown_fields() {
        let json = r#"{
            "status": "success",
            "error": null,
            "fx_order_id": "7bb02cd9f43c4a9bb183f8e2ea415bc0",
            "position_id": "abc123"
        }"#;

        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.status.as_deref(), Some("success"));
        assert!(order.error.is_none());
        assert_eq!(
            order.fields["fx_order_id"],
            "7bb02cd9f43c4a9bb183f8e2ea415bc0"
        );
        assert_eq!(order.fields["position_id"], "abc123");
    }
}
