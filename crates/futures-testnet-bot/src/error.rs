/*
[INPUT]:  Local validation failures and adapter errors
[OUTPUT]: Bot-level error type with a coarse category for reporting
[POS]:    Error handling layer - shared by builder, bot facade and shell
[UPDATE]: When adding validation rules or new failure categories
*/

use futures_testnet_adapter::FuturesError;
use thiserror::Error;

/// Raised before any order reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Side must be 'BUY' or 'SELL', got '{0}'")]
    InvalidSide(String),

    /// Carries the combined positivity rule that was violated
    #[error("{0}")]
    InvalidQuantity(String),

    #[error("Time in force must be 'GTC', 'IOC', or 'FOK', got '{0}'")]
    InvalidTimeInForce(String),
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Exchange(#[from] FuturesError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ExchangeApi,
    Transport,
    Other,
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::Validation(_) => ErrorKind::Validation,
            BotError::Exchange(err) if err.is_api_error() => ErrorKind::ExchangeApi,
            BotError::Exchange(err) if err.is_transport() => ErrorKind::Transport,
            BotError::Exchange(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
