/*
[INPUT]:  Typed order requests and signed credentials
[OUTPUT]: Exchange order acknowledgements
[POS]:    HTTP layer - trading endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{FuturesClient, Result};
use crate::types::{Order, OrderRequest};
use reqwest::Method;

impl FuturesClient {
    /// Submit a new order
    ///
    /// POST /fapi/v1/order
    pub async fn new_order(&self, req: &OrderRequest) -> Result<Order> {
        let params = req.query_params();
        let builder = self.signed_request(Method::POST, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }

    /// Cancel an open order
    ///
    /// DELETE /fapi/v1/order?symbol={symbol}&orderId={order_id}
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let params = [
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];
        let builder = self.signed_request(Method::DELETE, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }
}
