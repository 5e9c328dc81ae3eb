/*
[INPUT]:  Order parameters signed with the caller's credentials
[OUTPUT]: Order placement, cancellation and query results as decoded JSON
[POS]:    HTTP layer - trading endpoints (require signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{AllcoinClient, Params, Result};
use crate::types::{BatchOrder, OrderQueryStatus, Side};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

/// First page of the order history
pub const DEFAULT_HISTORY_PAGE: u32 = 1;
/// Orders per history page
pub const DEFAULT_HISTORY_PAGE_LENGTH: u32 = 200;

/// Order id that selects every open order in `order_info`
const ALL_OPEN_ORDERS: i64 = -1;

fn join_ids(order_ids: &[i64]) -> String {
    order_ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl AllcoinClient {
    /// Create an order
    ///
    /// POST /v1/trade
    pub async fn create_order(
        &self,
        symbol: &str,
        side: Side,
        price: Decimal,
        amount: Decimal,
    ) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("type", side)
            .with("price", price)
            .with("amount", amount);
        self.send(Method::POST, "trade", true, &params).await
    }

    pub async fn create_buy_order(&self, symbol: &str, price: Decimal, amount: Decimal) -> Result<Value> {
        self.create_order(symbol, Side::Buy, price, amount).await
    }

    pub async fn create_sell_order(&self, symbol: &str, price: Decimal, amount: Decimal) -> Result<Value> {
        self.create_order(symbol, Side::Sell, price, amount).await
    }

    /// Place several orders at once
    ///
    /// POST /v1/batch_trade
    /// `side` applies to entries that do not carry their own.
    pub async fn batch_orders(
        &self,
        symbol: &str,
        orders: &[BatchOrder],
        side: Option<Side>,
    ) -> Result<Value> {
        let order_data = serde_json::to_string(orders)?;
        let mut params = Params::new()
            .with("symbol", symbol)
            .with("order_data", order_data);
        params.insert_opt("type", side);
        self.send(Method::POST, "batch_trade", true, &params).await
    }

    /// Cancel up to 3 orders
    ///
    /// POST /v1/cancel_order
    pub async fn cancel_order(&self, symbol: &str, order_ids: &[i64]) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("order_id", join_ids(order_ids));
        self.send(Method::POST, "cancel_order", true, &params).await
    }

    /// Get info about a particular order
    ///
    /// POST /v1/order_info
    pub async fn get_order(&self, symbol: &str, order_id: i64) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("order_id", order_id);
        self.send(Method::POST, "order_info", true, &params).await
    }

    /// Get all open orders for a symbol
    pub async fn get_open_orders(&self, symbol: &str) -> Result<Value> {
        self.get_order(symbol, ALL_OPEN_ORDERS).await
    }

    /// Get info about up to 50 orders
    ///
    /// POST /v1/orders_info
    pub async fn get_orders(
        &self,
        symbol: &str,
        status: OrderQueryStatus,
        order_ids: &[i64],
    ) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("type", status.code())
            .with("order_id", join_ids(order_ids));
        self.send(Method::POST, "orders_info", true, &params).await
    }

    /// Get a page of order history
    ///
    /// POST /v1/order_history
    pub async fn get_order_history(
        &self,
        symbol: &str,
        status: OrderQueryStatus,
        page: u32,
        page_length: u32,
    ) -> Result<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("status", status.code())
            .with("current_page", page)
            .with("page_length", page_length);
        self.send(Method::POST, "order_history", true, &params).await
    }
}
