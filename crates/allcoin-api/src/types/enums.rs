/*
[INPUT]:  Allcoin API vocabulary (order sides, kline periods, status codes)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown order side: {other}")),
        }
    }
}

/// Candlestick period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KlineType {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "3min")]
    ThreeMinutes,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "2hour")]
    TwoHours,
    #[serde(rename = "4hour")]
    FourHours,
    #[serde(rename = "6hour")]
    SixHours,
    #[serde(rename = "12hour")]
    TwelveHours,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "3day")]
    ThreeDays,
    #[serde(rename = "1week")]
    OneWeek,
}

impl KlineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineType::OneMinute => "1min",
            KlineType::ThreeMinutes => "3min",
            KlineType::FiveMinutes => "5min",
            KlineType::FifteenMinutes => "15min",
            KlineType::ThirtyMinutes => "30min",
            KlineType::OneHour => "1hour",
            KlineType::TwoHours => "2hour",
            KlineType::FourHours => "4hour",
            KlineType::SixHours => "6hour",
            KlineType::TwelveHours => "12hour",
            KlineType::OneDay => "1day",
            KlineType::ThreeDays => "3day",
            KlineType::OneWeek => "1week",
        }
    }
}

impl fmt::Display for KlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for KlineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| format!("unknown kline type: {s}"))
    }
}

/// Status filter for the bulk order and order history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQueryStatus {
    Unfilled,
    Filled,
}

impl OrderQueryStatus {
    pub fn code(&self) -> u8 {
        match self {
            OrderQueryStatus::Unfilled => 0,
            OrderQueryStatus::Filled => 1,
        }
    }
}

/// Order status as reported in order payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderStatus {
    Unfilled,
    PartiallyFilled,
    Filled,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> i64 {
        match self {
            OrderStatus::Unfilled => 0,
            OrderStatus::PartiallyFilled => 1,
            OrderStatus::Filled => 2,
            OrderStatus::Cancelled => 10,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(OrderStatus::Unfilled),
            1 => Some(OrderStatus::PartiallyFilled),
            2 => Some(OrderStatus::Filled),
            10 => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Order can still trade
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Unfilled | OrderStatus::PartiallyFilled)
    }
}

impl TryFrom<i64> for OrderStatus {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        OrderStatus::from_code(code).ok_or_else(|| format!("unknown order status: {code}"))
    }
}

impl From<OrderStatus> for i64 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}
