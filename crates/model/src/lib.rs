//! Shared FalconX domain types.
//!
//! Value types and enums used across the request and response surfaces:
//! token pairs, quantities, and the wire spellings of sides, order types,
//! and platforms.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a quote request.
///
/// `TwoWay` asks for both a buy and a sell price in a single RFQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSide {
    TwoWay,
    Buy,
    Sell,
}

impl QuoteSide {
    /// Convert from the FalconX string representation.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "two_way" => Some(Self::TwoWay),
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Convert to the FalconX string representation.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::TwoWay => "two_way",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Side of an execution or order (a two-way quote is executed on one side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Convert from the FalconX string representation.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Convert to the FalconX string representation.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Convert from the FalconX string representation.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "market" => Some(Self::Market),
            "limit" => Some(Self::Limit),
            _ => None,
        }
    }

    /// Convert to the FalconX string representation.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
        }
    }
}

/// Time in force for limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Good Till Canceled.
    Gtc,
    /// Immediate Or Cancel.
    Ioc,
    /// Fill Or Kill.
    Fok,
}

impl TimeInForce {
    /// Convert from the FalconX string representation.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "gtc" => Some(Self::Gtc),
            "ioc" => Some(Self::Ioc),
            "fok" => Some(Self::Fok),
            _ => None,
        }
    }

    /// Convert to the FalconX string representation.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Gtc => "gtc",
            Self::Ioc => "ioc",
            Self::Fok => "fok",
        }
    }
}

/// Platform filter for account and history queries.
///
/// Response payloads carry the platform as a plain string since the API
/// reports values outside this set for internal venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Browser,
    Api,
    Margin,
}

impl Platform {
    /// Convert to the FalconX string representation.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Api => "api",
            Self::Margin => "margin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// A tradable token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub base_token: String,
    pub quote_token: String,
}

impl TokenPair {
    pub fn new(base_token: impl Into<String>, quote_token: impl Into<String>) -> Self {
        Self {
            base_token: base_token.into(),
            quote_token: quote_token.into(),
        }
    }
}

/// A quantity denominated in a specific token.
///
/// The value travels as a string on the wire to preserve precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenQuantity {
    pub token: String,
    pub value: Decimal,
}
