/*
[INPUT]:  Parsed subcommand and a configured AllcoinClient
[OUTPUT]: JSON response of the selected endpoint
[POS]:    CLI layer - subcommand to endpoint mapping
[UPDATE]: When endpoints are added to the client
*/

use allcoin_api::{
    AllcoinClient, BatchOrder, DEFAULT_HISTORY_PAGE, DEFAULT_HISTORY_PAGE_LENGTH, KlineType,
    OrderQueryStatus, Side,
};
use anyhow::{Context, Result};
use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::Value;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ticker for a market
    Ticker { symbol: String },
    /// Order book depth
    Depth {
        symbol: String,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        merge: Option<u32>,
    },
    /// Recent public trades
    Trades {
        symbol: String,
        #[arg(long)]
        since: Option<u64>,
    },
    /// Candlesticks (1min, 3min, ..., 1week)
    Klines {
        symbol: String,
        kline_type: KlineType,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        since: Option<u64>,
    },
    /// Account funds
    Userinfo,
    /// Own trade history
    TradeHistory {
        symbol: String,
        #[arg(long)]
        since: Option<u64>,
    },
    /// Place a limit order
    Order {
        symbol: String,
        side: Side,
        price: Decimal,
        amount: Decimal,
    },
    /// Place several orders from a JSON array of {price, amount, type?}
    Batch {
        symbol: String,
        orders: String,
        #[arg(long)]
        side: Option<Side>,
    },
    /// Cancel up to 3 orders
    Cancel {
        symbol: String,
        #[arg(required = true, allow_negative_numbers = true)]
        order_ids: Vec<i64>,
    },
    /// Info about one order
    OrderInfo {
        symbol: String,
        #[arg(allow_negative_numbers = true)]
        order_id: i64,
    },
    /// All open orders
    OpenOrders { symbol: String },
    /// Info about several orders
    Orders {
        symbol: String,
        #[arg(long)]
        filled: bool,
        #[arg(required = true)]
        order_ids: Vec<i64>,
    },
    /// Order history page
    History {
        symbol: String,
        #[arg(long)]
        filled: bool,
        #[arg(long, default_value_t = DEFAULT_HISTORY_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_HISTORY_PAGE_LENGTH)]
        page_length: u32,
    },
}

fn query_status(filled: bool) -> OrderQueryStatus {
    if filled {
        OrderQueryStatus::Filled
    } else {
        OrderQueryStatus::Unfilled
    }
}

impl Command {
    /// Whether the endpoint needs credentials
    pub fn is_signed(&self) -> bool {
        !matches!(
            self,
            Command::Ticker { .. }
                | Command::Depth { .. }
                | Command::Trades { .. }
                | Command::Klines { .. }
        )
    }

    pub async fn run(self, client: &AllcoinClient) -> Result<Value> {
        let value = match self {
            Command::Ticker { symbol } => client.get_ticker(&symbol).await?,
            Command::Depth {
                symbol,
                size,
                merge,
            } => client.get_order_book(&symbol, size, merge).await?,
            Command::Trades { symbol, since } => client.get_trades(&symbol, since).await?,
            Command::Klines {
                symbol,
                kline_type,
                size,
                since,
            } => client.get_klines(&symbol, kline_type, size, since).await?,
            Command::Userinfo => client.get_userinfo().await?,
            Command::TradeHistory { symbol, since } => {
                client.get_trade_history(&symbol, since).await?
            }
            Command::Order {
                symbol,
                side,
                price,
                amount,
            } => client.create_order(&symbol, side, price, amount).await?,
            Command::Batch {
                symbol,
                orders,
                side,
            } => {
                let orders: Vec<BatchOrder> =
                    serde_json::from_str(&orders).context("parse batch orders")?;
                client.batch_orders(&symbol, &orders, side).await?
            }
            Command::Cancel { symbol, order_ids } => {
                client.cancel_order(&symbol, &order_ids).await?
            }
            Command::OrderInfo { symbol, order_id } => client.get_order(&symbol, order_id).await?,
            Command::OpenOrders { symbol } => client.get_open_orders(&symbol).await?,
            Command::Orders {
                symbol,
                filled,
                order_ids,
            } => {
                client
                    .get_orders(&symbol, query_status(filled), &order_ids)
                    .await?
            }
            Command::History {
                symbol,
                filled,
                page,
                page_length,
            } => {
                client
                    .get_order_history(&symbol, query_status(filled), page, page_length)
                    .await?
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_commands_are_unsigned() {
        assert!(!Command::Ticker { symbol: "eth_btc".into() }.is_signed());
        assert!(Command::Userinfo.is_signed());
        assert!(Command::OpenOrders { symbol: "eth_btc".into() }.is_signed());
    }

    #[test]
    fn test_query_status() {
        assert_eq!(query_status(true), OrderQueryStatus::Filled);
        assert_eq!(query_status(false).code(), 0);
    }
}
