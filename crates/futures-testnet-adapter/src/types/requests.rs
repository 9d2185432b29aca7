/*
[INPUT]:  Validated order fields
[OUTPUT]: Typed order requests and their exact wire parameter lists
[POS]:    Data layer - request definitions for the order endpoint
[UPDATE]: When API schema changes or new order types are supported
*/

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::enums::{OrderType, Side, TimeInForce};

/// Render a decimal the way the exchange expects it: no trailing zeros, no exponent.
pub fn format_decimal(value: &Decimal) -> String {
    value.normalize().to_string()
}

fn serialize_wire_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_decimal(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrder {
    pub symbol: String,
    pub side: Side,
    #[serde(serialize_with = "serialize_wire_decimal")]
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrder {
    pub symbol: String,
    pub side: Side,
    #[serde(serialize_with = "serialize_wire_decimal")]
    pub quantity: Decimal,
    #[serde(serialize_with = "serialize_wire_decimal")]
    pub price: Decimal,
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
}

/// Becomes a limit order at `limit_price` once `stop_price` trades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopLimitOrder {
    pub symbol: String,
    pub side: Side,
    #[serde(serialize_with = "serialize_wire_decimal")]
    pub quantity: Decimal,
    #[serde(rename = "price", serialize_with = "serialize_wire_decimal")]
    pub limit_price: Decimal,
    #[serde(rename = "stopPrice", serialize_with = "serialize_wire_decimal")]
    pub stop_price: Decimal,
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
}

/// A new-order request. Each variant carries only the fields its type needs.
///
/// Serializes to the same flat parameter set that goes on the wire, which is
/// what gets written to the request log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OrderRequest {
    #[serde(rename = "MARKET")]
    Market(MarketOrder),
    #[serde(rename = "LIMIT")]
    Limit(LimitOrder),
    #[serde(rename = "STOP")]
    StopLimit(StopLimitOrder),
}

impl OrderRequest {
    pub fn symbol(&self) -> &str {
        match self {
            OrderRequest::Market(order) => &order.symbol,
            OrderRequest::Limit(order) => &order.symbol,
            OrderRequest::StopLimit(order) => &order.symbol,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            OrderRequest::Market(order) => order.side,
            OrderRequest::Limit(order) => order.side,
            OrderRequest::StopLimit(order) => order.side,
        }
    }

    pub fn quantity(&self) -> Decimal {
        match self {
            OrderRequest::Market(order) => order.quantity,
            OrderRequest::Limit(order) => order.quantity,
            OrderRequest::StopLimit(order) => order.quantity,
        }
    }

    /// Order type as sent in the `type` parameter
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderRequest::Market(_) => OrderType::Market,
            OrderRequest::Limit(_) => OrderType::Limit,
            OrderRequest::StopLimit(_) => OrderType::Stop,
        }
    }

    /// Human-facing name used in logs (`STOP_LIMIT` rather than the wire `STOP`)
    pub fn label(&self) -> &'static str {
        match self {
            OrderRequest::Market(_) => "MARKET",
            OrderRequest::Limit(_) => "LIMIT",
            OrderRequest::StopLimit(_) => "STOP_LIMIT",
        }
    }

    /// Wire parameters in canonical order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol().to_string()),
            ("side", self.side().as_str().to_string()),
            ("type", self.order_type().as_str().to_string()),
            ("quantity", format_decimal(&self.quantity())),
        ];

        match self {
            OrderRequest::Market(_) => {}
            OrderRequest::Limit(order) => {
                params.push(("price", format_decimal(&order.price)));
                params.push(("timeInForce", order.time_in_force.as_str().to_string()));
            }
            OrderRequest::StopLimit(order) => {
                params.push(("price", format_decimal(&order.limit_price)));
                params.push(("stopPrice", format_decimal(&order.stop_price)));
                params.push(("timeInForce", order.time_in_force.as_str().to_string()));
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal")
    }

    #[test]
    fn test_market_params_have_no_price() {
        let request = OrderRequest::Market(MarketOrder {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec("0.010"),
        });

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

    #[test]
    fn test_stop_limit_maps_limit_price_to_price() {
        let request = OrderRequest::StopLimit(StopLimitOrder {
            symbol: "ETHUSDT".to_string(),
            side: Side::Sell,
            quantity: dec("2"),
            limit_price: dec("1795"),
            stop_price: dec("1800.00"),
            time_in_force: TimeInForce::Gtc,
        });

        assert_eq!(request.order_type(), OrderType::Stop);
        assert_eq!(request.label(), "STOP_LIMIT");
        assert_eq!(
            request.query_params(),
            vec![
                ("symbol", "ETHUSDT".to_string()),
                ("side", "SELL".to_string()),
                ("type", "STOP".to_string()),
                ("quantity", "2".to_string()),
                ("price", "1795".to_string()),
                ("stopPrice", "1800".to_string()),
                ("timeInForce", "GTC".to_string()),
            ]
        );
    }

    #[test]
    fn test_limit_serializes_flat_for_logging() {
        let request = OrderRequest::Limit(LimitOrder {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec("0.5"),
            price: dec("42000.10"),
            time_in_force: TimeInForce::Ioc,
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "LIMIT",
                "symbol": "BTCUSDT",
                "side": "BUY",
                "quantity": "0.5",
                "price": "42000.1",
                "timeInForce": "IOC",
            })
        );
    }

    #[test]
    fn test_format_decimal_strips_trailing_zeros() {
        assert_eq!(format_decimal(&dec("100.000")), "100");
        assert_eq!(format_decimal(&dec("0.00100")), "0.001");
    }
}
