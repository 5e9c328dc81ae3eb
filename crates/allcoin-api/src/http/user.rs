/*
[INPUT]:  Account queries signed with the caller's credentials
[OUTPUT]: User account data (funds, own trade history) as decoded JSON
[POS]:    HTTP layer - user data endpoints (require signature)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use crate::http::{AllcoinClient, Params, Result};
use reqwest::Method;
use serde_json::Value;

impl AllcoinClient {
    /// Get account info (free and frozen funds)
    ///
    /// POST /v1/userinfo
    pub async fn get_userinfo(&self) -> Result<Value> {
        self.send(Method::POST, "userinfo", true, &Params::new())
            .await
    }

    /// Get trade history, optionally from a transaction id (inclusive)
    ///
    /// POST /v1/trade_history
    pub async fn get_trade_history(&self, symbol: &str, since: Option<u64>) -> Result<Value> {
        let mut params = Params::new().with("symbol", symbol);
        params.insert_opt("since", since.filter(|v| *v > 0));
        self.send(Method::POST, "trade_history", true, &params)
            .await
    }
}
