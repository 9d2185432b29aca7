/*
[INPUT]:  Raw account snapshot from the exchange
[OUTPUT]: Wallet totals plus per-asset balances with nonzero wallet balance
[POS]:    Core layer - account balance aggregation
[UPDATE]: When account fields shown to the user change
*/

use rust_decimal::Decimal;
use serde::Serialize;

use futures_testnet_adapter::AccountInfo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSummary {
    pub asset: String,
    pub wallet_balance: Decimal,
    pub available_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    pub total_wallet_balance: Decimal,
    pub available_balance: Decimal,
    /// Exchange-reported order, zero wallet balances removed
    pub assets: Vec<AssetSummary>,
}

impl From<&AccountInfo> for AccountBalance {
    fn from(account: &AccountInfo) -> Self {
        let assets = account
            .assets
            .iter()
            .filter(|asset| !asset.wallet_balance.is_zero())
            .map(|asset| AssetSummary {
                asset: asset.asset.clone(),
                wallet_balance: asset.wallet_balance,
                available_balance: asset.available_balance,
            })
            .collect();

        Self {
            total_wallet_balance: account.total_wallet_balance,
            available_balance: account.available_balance,
            assets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_testnet_adapter::AssetBalance;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal")
    }

    fn asset(name: &str, wallet: &str, available: &str) -> AssetBalance {
        AssetBalance {
            asset: name.to_string(),
            wallet_balance: dec(wallet),
            unrealized_profit: Decimal::ZERO,
            margin_balance: dec(wallet),
            available_balance: dec(available),
            max_withdraw_amount: dec(available),
        }
    }

    #[test]
    fn zero_wallet_assets_are_dropped_and_order_kept() {
        let account = AccountInfo {
            total_wallet_balance: dec("15000.5"),
            total_unrealized_profit: Decimal::ZERO,
            total_margin_balance: dec("15000.5"),
            available_balance: dec("14000"),
            can_trade: true,
            assets: vec![
                asset("USDT", "15000", "14000"),
                asset("BNB", "0.00000000", "0"),
                asset("BTC", "0.5", "0.5"),
                asset("ETH", "0", "0"),
                asset("USDC", "0.0001", "0"),
            ],
        };

        let balance = AccountBalance::from(&account);

        assert_eq!(balance.total_wallet_balance, dec("15000.5"));
        assert_eq!(balance.available_balance, dec("14000"));
        let names: Vec<&str> = balance.assets.iter().map(|a| a.asset.as_str()).collect();
        assert_eq!(names, vec!["USDT", "BTC", "USDC"]);
        assert_eq!(balance.assets[1].wallet_balance, dec("0.5"));
    }

    #[test]
    fn empty_account_has_no_assets() {
        let account = AccountInfo {
            total_wallet_balance: Decimal::ZERO,
            total_unrealized_profit: Decimal::ZERO,
            total_margin_balance: Decimal::ZERO,
            available_balance: Decimal::ZERO,
            can_trade: false,
            assets: vec![],
        };

        assert!(AccountBalance::from(&account).assets.is_empty());
    }
}
