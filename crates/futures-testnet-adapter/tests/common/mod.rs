/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for futures-testnet-adapter tests

use futures_testnet_adapter::{ClientConfig, Credentials, FuturesClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with test credentials installed
pub fn signed_client(server: &MockServer) -> FuturesClient {
    FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(Credentials::new(TEST_API_KEY, "test-api-secret"))
        .expect("credentials")
}

/// Exchange order payload as returned by the order endpoints
pub fn order_json(order_id: i64, order_type: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "orderId": order_id,
        "symbol": "BTCUSDT",
        "status": status,
        "clientOrderId": "testnet-client-id",
        "price": "0",
        "avgPrice": "0.00",
        "origQty": "0.010",
        "executedQty": "0",
        "cumQuote": "0",
        "timeInForce": "GTC",
        "type": order_type,
        "reduceOnly": false,
        "side": "BUY",
        "positionSide": "BOTH",
        "stopPrice": "0",
        "updateTime": 1_700_000_000_000_i64
    })
}
