/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Connectivity checks, exchange metadata and prices
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{FuturesClient, Result};
use crate::types::{ExchangeInfo, SymbolPrice, SymbolSet};
use reqwest::Method;

impl FuturesClient {
    /// Test connectivity
    ///
    /// GET /fapi/v1/ping
    pub async fn ping(&self) -> Result<()> {
        let builder = self.public_request(Method::GET, "/fapi/v1/ping", &[])?;
        let _: serde_json::Value = self.send_json(builder).await?;
        Ok(())
    }

    /// Query exchange trading rules and symbol list
    ///
    /// GET /fapi/v1/exchangeInfo
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        let builder = self.public_request(Method::GET, "/fapi/v1/exchangeInfo", &[])?;
        self.send_json(builder).await
    }

    /// Symbols currently listed on the exchange. Fetched fresh on every call.
    pub async fn symbol_set(&self) -> Result<SymbolSet> {
        Ok(self.exchange_info().await?.symbol_set())
    }

    /// Latest price for a symbol
    ///
    /// GET /fapi/v1/ticker/price?symbol={symbol}
    pub async fn symbol_price(&self, symbol: &str) -> Result<SymbolPrice> {
        let params = [("symbol", symbol.to_string())];
        let builder = self.public_request(Method::GET, "/fapi/v1/ticker/price", &params)?;
        self.send_json(builder).await
    }
}
