/*
[INPUT]:  Selected menu index
[OUTPUT]: Typed menu choice and its label
[POS]:    CLI layer - numbered main menu definition
[UPDATE]: When menu entries are added or reordered
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance,
    MarketOrder,
    LimitOrder,
    StopLimitOrder,
    OpenOrders,
    CancelOrder,
    OrderStatus,
    CurrentPrice,
    Exit,
}

impl MenuChoice {
    /// Menu order; entry `i` is shown as `[i + 1]`.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::ViewBalance,
        MenuChoice::MarketOrder,
        MenuChoice::LimitOrder,
        MenuChoice::StopLimitOrder,
        MenuChoice::OpenOrders,
        MenuChoice::CancelOrder,
        MenuChoice::OrderStatus,
        MenuChoice::CurrentPrice,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewBalance => "View Account Balance",
            MenuChoice::MarketOrder => "Place Market Order",
            MenuChoice::LimitOrder => "Place Limit Order",
            MenuChoice::StopLimitOrder => "Place Stop-Limit Order",
            MenuChoice::OpenOrders => "View Open Orders",
            MenuChoice::CancelOrder => "Cancel Order",
            MenuChoice::OrderStatus => "Get Order Status",
            MenuChoice::CurrentPrice => "Get Current Price",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn items() -> Vec<String> {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(idx, choice)| format!("[{}] {}", idx + 1, choice.label()))
            .collect()
    }
}
