/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for allcoin-api tests

use allcoin_api::{AllcoinClient, ClientConfig, Credentials};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "api_key";
pub const TEST_API_SECRET: &str = "api_secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Test credentials shared by every client
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Client pointed at the mock server, mirroring the production `/api/v1` layout
pub fn client_for(server: &MockServer) -> AllcoinClient {
    AllcoinClient::with_config(
        test_credentials(),
        ClientConfig::with_base_url(format!("{}/api", server.uri())),
    )
    .expect("client init")
}
