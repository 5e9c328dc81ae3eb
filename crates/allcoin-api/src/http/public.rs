/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (ticker, depth, trades, klines) as decoded JSON
[POS]:    HTTP layer - public market data endpoints (no signature required)
[UPDATE]: When adding new public endpoints or changing parameters
*/

use crate::http::{AllcoinClient, Params, Result};
use crate::types::KlineType;
use reqwest::Method;
use serde_json::Value;

impl AllcoinClient {
    /// Get the ticker for a market
    ///
    /// GET /v1/ticker?symbol={symbol}
    pub async fn get_ticker(&self, symbol: &str) -> Result<Value> {
        let params = Params::new().with("symbol", symbol);
        self.send(Method::GET, "ticker", false, &params).await
    }

    /// Get the order book for a market
    ///
    /// GET /v1/depth?symbol={symbol}&size={size}&merge={merge}
    /// `size` defaults to 100 server-side (max 100), `merge` to 1.
    pub async fn get_order_book(
        &self,
        symbol: &str,
        size: Option<u32>,
        merge: Option<u32>,
    ) -> Result<Value> {
        let mut params = Params::new().with("symbol", symbol);
        params
            .insert_opt("size", size.filter(|v| *v > 0))
            .insert_opt("merge", merge.filter(|v| *v > 0));
        self.send(Method::GET, "depth", false, &params).await
    }

    /// Get the last 600 trades, optionally from a transaction id (inclusive)
    ///
    /// GET /v1/trades?symbol={symbol}&since={since}
    pub async fn get_trades(&self, symbol: &str, since: Option<u64>) -> Result<Value> {
        let mut params = Params::new().with("symbol", symbol);
        params.insert_opt("since", since.filter(|v| *v > 0));
        self.send(Method::GET, "trades", false, &params).await
    }

    /// Get klines for a symbol
    ///
    /// GET /v1/kline?symbol={symbol}&type={kline_type}&size={size}&since={since}
    /// `since` is a timestamp in milliseconds.
    pub async fn get_klines(
        &self,
        symbol: &str,
        kline_type: KlineType,
        size: Option<u32>,
        since: Option<u64>,
    ) -> Result<Value> {
        let mut params = Params::new()
            .with("symbol", symbol)
            .with("type", kline_type);
        params
            .insert_opt("size", size.filter(|v| *v > 0))
            .insert_opt("since", since.filter(|v| *v > 0));
        self.send(Method::GET, "kline", false, &params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AllcoinClient, ClientConfig, Credentials};
    use crate::types::KlineType;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> AllcoinClient {
        AllcoinClient::with_config(
            Credentials::new("api_key", "api_secret"),
            ClientConfig::with_base_url(format!("{}/api", server.uri())),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_ticker() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "date": "1410431279",
            "ticker": {
                "buy": "33.15",
                "high": "34.15",
                "last": "33.15",
                "low": "32.05",
                "sell": "33.16",
                "vol": "10532696.39199642"
            }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1/ticker"))
            .and(query_param("symbol", "eth_btc"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .get_ticker("eth_btc")
            .await
            .expect("get_ticker failed");

        assert_eq!(response["ticker"]["last"], "33.15");
        assert_eq!(response["date"], "1410431279");
    }

    #[tokio::test]
    async fn test_get_order_book_with_options() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1/depth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "asks": [[792, 5], [789.68, 0.018]],
                "bids": [[787.1, 0.35], [787, 12.071]],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .get_order_book("eth_btc", Some(5), Some(5))
            .await
            .expect("get_order_book failed");

        assert_eq!(response["asks"][0][0], 792);

        let requests = server.received_requests().await.expect("recorded requests");
        assert_eq!(requests[0].url.query(), Some("merge=5&size=5&symbol=eth_btc"));
    }

    #[tokio::test]
    async fn test_get_trades_skips_zero_since() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"date": "1367130137", "price": 787.71, "amount": 0.003, "tid": "230433", "type": "sell"}
            ])))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let trades = client.get_trades("eth_btc", Some(0)).await.expect("get_trades failed");
        assert_eq!(trades[0]["tid"], "230433");
        client
            .get_trades("eth_btc", Some(230433))
            .await
            .expect("get_trades failed");

        let requests = server.received_requests().await.expect("recorded requests");
        assert_eq!(requests[0].url.query(), Some("symbol=eth_btc"));
        assert_eq!(requests[1].url.query(), Some("since=230433&symbol=eth_btc"));
    }

    #[tokio::test]
    async fn test_get_klines() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1/kline"))
            .and(query_param("symbol", "eth_btc"))
            .and(query_param("type", "1hour"))
            .and(query_param("size", "20"))
            .and(query_param("since", "1417449600000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                [1417449600000u64, 2339.11, 2383.15, 2322, 2369.85, 83850.06]
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let klines = test_client(&server)
            .get_klines("eth_btc", KlineType::OneHour, Some(20), Some(1_417_449_600_000))
            .await
            .expect("get_klines failed");

        assert_eq!(klines[0][0], 1_417_449_600_000u64);
    }
}
