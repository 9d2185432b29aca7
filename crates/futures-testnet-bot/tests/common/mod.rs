/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared fixtures: signed bot against a mock exchange, canned payloads
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for futures-testnet-bot tests

#![allow(dead_code)]

use futures_testnet_adapter::{ClientConfig, Credentials, FuturesClient};
use futures_testnet_bot::TradingBot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bot wired to the mock server, not yet verified
pub fn bot_for(server: &MockServer) -> TradingBot {
    let client = FuturesClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
        .with_credentials(Credentials::new("test-api-key", "test-api-secret"))
        .expect("credentials");
    TradingBot::new(client)
}

/// Serve an exchange info listing BTCUSDT and ETHUSDT
pub async fn mount_exchange_info(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fapi/v1/exchangeInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "timezone": "UTC",
            "serverTime": 1_700_000_000_000_i64,
            "symbols": [
                {"symbol": "BTCUSDT", "status": "TRADING", "baseAsset": "BTC", "quoteAsset": "USDT"},
                {"symbol": "ETHUSDT", "status": "TRADING", "baseAsset": "ETH", "quoteAsset": "USDT"}
            ]
        })))
        .mount(server)
        .await;
}

pub fn order_json(
    order_id: i64,
    symbol: &str,
    order_type: &str,
    side: &str,
    status: &str,
) -> serde_json::Value {
    serde_json::json!({
        "orderId": order_id,
        "symbol": symbol,
        "status": status,
        "clientOrderId": "testnet-client-id",
        "price": "0",
        "avgPrice": "0.00",
        "origQty": "2",
        "executedQty": "0",
        "timeInForce": "GTC",
        "type": order_type,
        "reduceOnly": false,
        "side": side,
        "positionSide": "BOTH",
        "stopPrice": "0",
        "updateTime": 1_700_000_000_000_i64
    })
}

pub fn account_json() -> serde_json::Value {
    serde_json::json!({
        "totalWalletBalance": "15000.00000000",
        "totalUnrealizedProfit": "0.00000000",
        "totalMarginBalance": "15000.00000000",
        "availableBalance": "14200.50000000",
        "canTrade": true,
        "assets": [
            {"asset": "FDUSD", "walletBalance": "0.00000000", "availableBalance": "0"},
            {"asset": "USDT", "walletBalance": "14990.00000000", "availableBalance": "14190.5"},
            {"asset": "BNB", "walletBalance": "0.00000000", "availableBalance": "0"},
            {"asset": "USDC", "walletBalance": "10.00000000", "availableBalance": "10"}
        ]
    })
}
