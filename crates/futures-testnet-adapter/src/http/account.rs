/*
[INPUT]:  Query parameters and signed credentials
[OUTPUT]: User account data (balances, open orders, order status)
[POS]:    HTTP layer - user data endpoints (require signed requests)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::http::{FuturesClient, Result};
use crate::types::{AccountInfo, Order};
use reqwest::Method;

impl FuturesClient {
    /// Account balances and margin state
    ///
    /// GET /fapi/v2/account
    pub async fn account(&self) -> Result<AccountInfo> {
        let builder = self.signed_request(Method::GET, "/fapi/v2/account", &[])?;
        self.send_json(builder).await
    }

    /// Open orders, optionally restricted to one symbol
    ///
    /// GET /fapi/v1/openOrders?symbol={symbol}
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        let params: Vec<(&str, String)> = symbol
            .map(|s| vec![("symbol", s.to_string())])
            .unwrap_or_default();

        let builder = self.signed_request(Method::GET, "/fapi/v1/openOrders", &params)?;
        self.send_json(builder).await
    }

    /// Current state of a single order
    ///
    /// GET /fapi/v1/order?symbol={symbol}&orderId={order_id}
    pub async fn query_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let params = [
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];
        let builder = self.signed_request(Method::GET, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }
}
