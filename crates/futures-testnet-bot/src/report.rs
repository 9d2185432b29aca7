/*
[INPUT]:  Balances and exchange orders
[OUTPUT]: Plain-text blocks printed by the interactive shell
[POS]:    Presentation layer - text rendering shared by shell and tests
[UPDATE]: When the shell's output layout changes
*/

use std::fmt::Write as _;

use futures_testnet_adapter::Order;

use crate::balance::AccountBalance;

pub fn format_balance(balance: &AccountBalance) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Balance: {} USDT", balance.total_wallet_balance);
    let _ = writeln!(out, "Available Balance: {} USDT", balance.available_balance);

    if !balance.assets.is_empty() {
        let _ = writeln!(out, "\nAssets:");
        for asset in &balance.assets {
            let _ = writeln!(
                out,
                "  {}: {} (Available: {})",
                asset.asset, asset.wallet_balance, asset.available_balance
            );
        }
    }
    out
}

/// Entry in the open-orders listing
pub fn format_open_order(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Order ID: {}", order.order_id);
    let _ = writeln!(out, "  Symbol: {}", order.symbol);
    let _ = writeln!(out, "  Type: {}", order.order_type);
    let _ = writeln!(out, "  Side: {}", order.side);
    let _ = writeln!(out, "  Price: {}", order.price);
    let _ = writeln!(out, "  Quantity: {}", order.orig_qty);
    let _ = writeln!(out, "  Status: {}", order.status);
    out
}

pub fn format_order_status(order: &Order) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Order ID: {}", order.order_id);
    let _ = writeln!(out, "  Symbol: {}", order.symbol);
    let _ = writeln!(out, "  Status: {}", order.status);
    let _ = writeln!(out, "  Type: {}", order.order_type);
    let _ = writeln!(out, "  Side: {}", order.side);
    let _ = writeln!(out, "  Price: {}", order.price);
    let _ = writeln!(out, "  Quantity: {}", order.orig_qty);
    let _ = writeln!(out, "  Executed: {}", order.executed_qty);
    out
}
