/*
[INPUT]:  Authenticated FuturesClient and user-supplied order/query fields
[OUTPUT]: Exchange orders, balances and prices, with every request/response logged
[POS]:    Service layer - trading facade used by the interactive shell
[UPDATE]: When adding bot operations or changing the logging contract
*/

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};

use futures_testnet_adapter::{AccountInfo, FuturesClient, FuturesError, Order, OrderRequest};

use crate::balance::AccountBalance;
use crate::builder::OrderRequestBuilder;
use crate::error::Result;

/// Trading facade over a single authenticated client.
///
/// Calls are issued one at a time; nothing here retries.
#[derive(Debug)]
pub struct TradingBot {
    client: FuturesClient,
}

impl TradingBot {
    /// Wrap a client without contacting the exchange
    pub fn new(client: FuturesClient) -> Self {
        Self { client }
    }

    /// Wrap a client and verify connectivity and credentials
    pub async fn connect(client: FuturesClient) -> Result<Self> {
        let bot = Self::new(client);
        bot.verify_connection().await?;
        Ok(bot)
    }

    pub fn client(&self) -> &FuturesClient {
        &self.client
    }

    pub fn order_builder(&self) -> OrderRequestBuilder<'_, FuturesClient> {
        OrderRequestBuilder::new(&self.client)
    }

    /// Ping the exchange and fetch the account with the configured key
    pub async fn verify_connection(&self) -> Result<AccountInfo> {
        info!(base_url = %self.client.base_url(), "connecting to futures testnet");

        let outcome = match self.client.ping().await {
            Ok(()) => self.client.account().await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(account) => {
                info!(
                    total_wallet_balance = %account.total_wallet_balance,
                    "connection successful"
                );
                Ok(account)
            }
            Err(err) => {
                log_exchange_error("connection test failed", &err);
                Err(err.into())
            }
        }
    }

    pub async fn account_balance(&self) -> Result<AccountBalance> {
        let account = self.client.account().await.inspect_err(|err| {
            log_exchange_error("failed to get account balance", err);
        })?;

        let balance = AccountBalance::from(&account);
        info!(
            total_wallet_balance = %balance.total_wallet_balance,
            assets = balance.assets.len(),
            "account balance retrieved"
        );
        Ok(balance)
    }

    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<Order> {
        let request = self
            .order_builder()
            .build_market_order(symbol, side, quantity)
            .await?;
        self.submit(&request).await
    }

    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: &str,
    ) -> Result<Order> {
        let request = self
            .order_builder()
            .build_limit_order(symbol, side, quantity, price, time_in_force)
            .await?;
        self.submit(&request).await
    }

    pub async fn place_stop_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_in_force: &str,
    ) -> Result<Order> {
        let request = self
            .order_builder()
            .build_stop_limit_order(symbol, side, quantity, stop_price, limit_price, time_in_force)
            .await?;
        self.submit(&request).await
    }

    /// Log the outgoing parameters, send, then log the response.
    pub async fn submit(&self, request: &OrderRequest) -> Result<Order> {
        info!(
            order_type = request.label(),
            params = %to_pretty_json(request),
            "placing order"
        );

        let order = self.client.new_order(request).await.inspect_err(|err| {
            log_exchange_error("order placement failed", err);
        })?;

        info!(response = %to_pretty_json(&order), "order response");
        info!("{}", placement_summary(request));
        Ok(order)
    }

    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        let symbol = symbol.map(str::to_uppercase);
        let orders = self
            .client
            .open_orders(symbol.as_deref())
            .await
            .inspect_err(|err| log_exchange_error("failed to get open orders", err))?;

        info!(count = orders.len(), "retrieved open orders");
        Ok(orders)
    }

    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let symbol = symbol.to_uppercase();
        let order = self
            .client
            .cancel_order(&symbol, order_id)
            .await
            .inspect_err(|err| log_exchange_error("failed to cancel order", err))?;

        info!(order_id, symbol = %symbol, "order cancelled");
        Ok(order)
    }

    pub async fn order_status(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let symbol = symbol.to_uppercase();
        let order = self
            .client
            .query_order(&symbol, order_id)
            .await
            .inspect_err(|err| log_exchange_error("failed to get order status", err))?;

        info!(order_id, status = %order.status, "order status");
        Ok(order)
    }

    pub async fn current_price(&self, symbol: &str) -> Result<Decimal> {
        let symbol = symbol.to_uppercase();
        let ticker = self
            .client
            .symbol_price(&symbol)
            .await
            .inspect_err(|err| log_exchange_error("failed to get price", err))?;

        info!(symbol = %symbol, price = %ticker.price, "current price");
        Ok(ticker.price)
    }
}

/// One-line description of a placed order, e.g. `Market order executed: BUY 0.01 BTCUSDT`
pub fn placement_summary(request: &OrderRequest) -> String {
    let head = format!(
        "{} {} {}",
        request.side(),
        request.quantity().normalize(),
        request.symbol()
    );
    match request {
        OrderRequest::Market(_) => format!("Market order executed: {head}"),
        OrderRequest::Limit(order) => {
            format!("Limit order placed: {head} @ {}", order.price.normalize())
        }
        OrderRequest::StopLimit(order) => format!(
            "Stop-limit order placed: {head} @ stop:{} limit:{}",
            order.stop_price.normalize(),
            order.limit_price.normalize()
        ),
    }
}

fn log_exchange_error(context: &str, err: &FuturesError) {
    match err {
        FuturesError::Api {
            status_code,
            code,
            message,
        } => error!(status_code, code, message = %message, "{context}"),
        other => error!(error = %other, "{context}"),
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}
