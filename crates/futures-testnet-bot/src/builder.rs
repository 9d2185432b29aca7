/*
[INPUT]:  Raw user-supplied order fields and a symbol directory
[OUTPUT]: Validated, wire-ready OrderRequest or a ValidationError
[POS]:    Core layer - order validation and construction
[UPDATE]: When validation rules or supported order types change
*/

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::error;

use futures_testnet_adapter::{
    FuturesClient, FuturesError, LimitOrder, MarketOrder, OrderRequest, Side, StopLimitOrder,
    SymbolSet, TimeInForce,
};

use crate::error::ValidationError;

pub const DEFAULT_TIME_IN_FORCE: &str = "GTC";

/// Source of the exchange's tradable symbols.
///
/// Queried on every validation; implementations must not cache.
#[async_trait]
pub trait SymbolDirectory: Send + Sync {
    async fn tradable_symbols(&self) -> Result<SymbolSet, FuturesError>;
}

#[async_trait]
impl SymbolDirectory for FuturesClient {
    async fn tradable_symbols(&self) -> Result<SymbolSet, FuturesError> {
        self.symbol_set().await
    }
}

/// Fixed symbol list, for offline use and tests
#[async_trait]
impl SymbolDirectory for SymbolSet {
    async fn tradable_symbols(&self) -> Result<SymbolSet, FuturesError> {
        Ok(self.clone())
    }
}

/// Validates order input and turns it into an [`OrderRequest`].
///
/// Checks always run in the same order: symbol, side, numeric ranges,
/// time in force. The first failing check decides the reported error.
#[derive(Debug)]
pub struct OrderRequestBuilder<'a, D: ?Sized> {
    directory: &'a D,
}

impl<'a, D> OrderRequestBuilder<'a, D>
where
    D: SymbolDirectory + ?Sized,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// True when the uppercased symbol is currently listed.
    ///
    /// Lookup failures are logged and reported as `false`.
    pub async fn validate_symbol(&self, symbol: &str) -> bool {
        let symbol = normalize(symbol);
        match self.directory.tradable_symbols().await {
            Ok(symbols) => symbols.contains(&symbol),
            Err(err) => {
                error!(symbol = %symbol, error = %err, "symbol validation failed");
                false
            }
        }
    }

    pub async fn build_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<OrderRequest, ValidationError> {
        let symbol = self.require_symbol(symbol).await?;
        let side = parse_side(side)?;

        if quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(
                "Quantity must be positive".to_string(),
            ));
        }

        Ok(OrderRequest::Market(MarketOrder {
            symbol,
            side,
            quantity,
        }))
    }

    pub async fn build_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: &str,
    ) -> Result<OrderRequest, ValidationError> {
        let symbol = self.require_symbol(symbol).await?;
        let side = parse_side(side)?;

        if quantity <= Decimal::ZERO || price <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(
                "Quantity and price must be positive".to_string(),
            ));
        }

        let time_in_force = parse_time_in_force(time_in_force)?;

        Ok(OrderRequest::Limit(LimitOrder {
            symbol,
            side,
            quantity,
            price,
            time_in_force,
        }))
    }

    /// Stop-limit order: goes on the wire as type `STOP` with
    /// `price = limit_price` and `stopPrice = stop_price`.
    pub async fn build_stop_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        stop_price: Decimal,
        limit_price: Decimal,
        time_in_force: &str,
    ) -> Result<OrderRequest, ValidationError> {
        let symbol = self.require_symbol(symbol).await?;
        let side = parse_side(side)?;

        if quantity <= Decimal::ZERO || stop_price <= Decimal::ZERO || limit_price <= Decimal::ZERO
        {
            return Err(ValidationError::InvalidQuantity(
                "Quantity, stop price, and limit price must be positive".to_string(),
            ));
        }

        let time_in_force = parse_time_in_force(time_in_force)?;

        Ok(OrderRequest::StopLimit(StopLimitOrder {
            symbol,
            side,
            quantity,
            limit_price,
            stop_price,
            time_in_force,
        }))
    }

    async fn require_symbol(&self, symbol: &str) -> Result<String, ValidationError> {
        let symbol = normalize(symbol);
        if self.validate_symbol(&symbol).await {
            Ok(symbol)
        } else {
            Err(ValidationError::InvalidSymbol(symbol))
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

fn parse_side(side: &str) -> Result<Side, ValidationError> {
    let side = normalize(side);
    side.parse()
        .map_err(|_| ValidationError::InvalidSide(side))
}

// GTX (post-only) parses as a TimeInForce but is not offered to users.
fn parse_time_in_force(time_in_force: &str) -> Result<TimeInForce, ValidationError> {
    let value = normalize(time_in_force);
    match value.parse::<TimeInForce>() {
        Ok(tif @ (TimeInForce::Gtc | TimeInForce::Ioc | TimeInForce::Fok)) => Ok(tif),
        _ => Err(ValidationError::InvalidTimeInForce(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal")
    }

    fn symbols() -> SymbolSet {
        ["BTCUSDT", "ETHUSDT"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Directory whose lookups always fail, counting attempts
    #[derive(Default)]
    struct UnreachableDirectory {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SymbolDirectory for UnreachableDirectory {
        async fn tradable_symbols(&self) -> Result<SymbolSet, FuturesError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FuturesError::InvalidResponse("exchange unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn validate_symbol_normalizes_case() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        assert!(builder.validate_symbol("btcusdt").await);
        assert!(builder.validate_symbol(" EthUsdt ").await);
        assert!(!builder.validate_symbol("DOGEUSDT").await);
    }

    #[tokio::test]
    async fn validate_symbol_fails_closed_on_lookup_error() {
        let directory = UnreachableDirectory::default();
        let builder = OrderRequestBuilder::new(&directory);

        assert!(!builder.validate_symbol("BTCUSDT").await);
        assert!(!builder.validate_symbol("BTCUSDT").await);
        // refetched every time
        assert_eq!(directory.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn market_order_normalizes_symbol_and_side() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let request = builder
            .build_market_order("btcusdt", "buy", dec("0.01"))
            .await
            .expect("valid market order");

        assert_eq!(
            request,
            OrderRequest::Market(MarketOrder {
                symbol: "BTCUSDT".to_string(),
                side: Side::Buy,
                quantity: dec("0.01"),
            })
        );
        assert_eq!(
            request.query_params(),
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("side", "BUY".to_string()),
                ("type", "MARKET".to_string()),
                ("quantity", "0.01".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn stop_limit_order_wire_shape() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let request = builder
            .build_stop_limit_order(
                "ETHUSDT",
                "SELL",
                dec("2"),
                dec("1800"),
                dec("1795"),
                DEFAULT_TIME_IN_FORCE,
            )
            .await
            .expect("valid stop-limit order");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "symbol": "ETHUSDT",
                "side": "SELL",
                "type": "STOP",
                "quantity": "2",
                "price": "1795",
                "stopPrice": "1800",
                "timeInForce": "GTC",
            })
        );
    }

    #[tokio::test]
    async fn limit_order_accepts_lowercase_time_in_force() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let request = builder
            .build_limit_order("BTCUSDT", "SELL", dec("1"), dec("50000"), "ioc")
            .await
            .expect("valid limit order");

        match request {
            OrderRequest::Limit(order) => assert_eq!(order.time_in_force, TimeInForce::Ioc),
            other => panic!("expected limit order, got {other:?}"),
        }
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    #[tokio::test]
    async fn non_positive_quantity_rejected_by_every_builder(#[case] quantity: &str) {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);
        let quantity = dec(quantity);

        let market = builder.build_market_order("BTCUSDT", "BUY", quantity).await;
        let limit = builder
            .build_limit_order("BTCUSDT", "BUY", quantity, dec("100"), "GTC")
            .await;
        let stop = builder
            .build_stop_limit_order("BTCUSDT", "BUY", quantity, dec("100"), dec("99"), "GTC")
            .await;

        for result in [market, limit, stop] {
            assert!(matches!(result, Err(ValidationError::InvalidQuantity(_))));
        }
    }

    #[rstest]
    #[case::zero_limit("100", "0")]
    #[case::zero_stop("0", "100")]
    #[case::negative_limit("100", "-5")]
    #[tokio::test]
    async fn stop_limit_combined_positivity_check(#[case] stop: &str, #[case] limit: &str) {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder
            .build_stop_limit_order("BTCUSDT", "BUY", dec("1"), dec(stop), dec(limit), "GTC")
            .await;

        assert_eq!(
            result,
            Err(ValidationError::InvalidQuantity(
                "Quantity, stop price, and limit price must be positive".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn limit_order_non_positive_price_is_quantity_error() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder
            .build_limit_order("BTCUSDT", "BUY", dec("1"), dec("0"), "GTC")
            .await;

        assert_eq!(
            result,
            Err(ValidationError::InvalidQuantity(
                "Quantity and price must be positive".to_string()
            ))
        );
    }

    #[rstest]
    #[case::day("DAY")]
    #[case::post_only("GTX")]
    #[case::empty("")]
    #[tokio::test]
    async fn limit_order_rejects_unsupported_time_in_force(#[case] tif: &str) {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder
            .build_limit_order("BTCUSDT", "BUY", dec("1"), dec("100"), tif)
            .await;

        assert_eq!(
            result,
            Err(ValidationError::InvalidTimeInForce(tif.to_string()))
        );
    }

    #[tokio::test]
    async fn unknown_symbol_reported_before_any_other_check() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        // every other field is also invalid
        let market = builder.build_market_order("dogeusdt", "HOLD", dec("0")).await;
        let limit = builder
            .build_limit_order("DOGEUSDT", "HOLD", dec("0"), dec("0"), "DAY")
            .await;
        let stop = builder
            .build_stop_limit_order("DOGEUSDT", "HOLD", dec("0"), dec("0"), dec("0"), "DAY")
            .await;

        for result in [market, limit, stop] {
            assert_eq!(
                result,
                Err(ValidationError::InvalidSymbol("DOGEUSDT".to_string()))
            );
        }
    }

    #[tokio::test]
    async fn side_checked_before_numeric_ranges() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder
            .build_limit_order("BTCUSDT", "hold", dec("0"), dec("0"), "DAY")
            .await;

        assert_eq!(result, Err(ValidationError::InvalidSide("HOLD".to_string())));
    }

    #[tokio::test]
    async fn numeric_checked_before_time_in_force() {
        let directory = symbols();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder
            .build_limit_order("BTCUSDT", "BUY", dec("0"), dec("100"), "DAY")
            .await;

        assert!(matches!(result, Err(ValidationError::InvalidQuantity(_))));
    }

    #[tokio::test]
    async fn unreachable_directory_rejects_as_invalid_symbol() {
        let directory = UnreachableDirectory::default();
        let builder = OrderRequestBuilder::new(&directory);

        let result = builder.build_market_order("BTCUSDT", "BUY", dec("1")).await;

        assert_eq!(
            result,
            Err(ValidationError::InvalidSymbol("BTCUSDT".to_string()))
        );
    }
}
