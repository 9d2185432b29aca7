/*
[INPUT]:  Public API exports for futures-testnet-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod balance;
pub mod bot;
pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

// Re-export main types for convenience
pub use balance::{AccountBalance, AssetSummary};
pub use bot::TradingBot;
pub use builder::{DEFAULT_TIME_IN_FORCE, OrderRequestBuilder, SymbolDirectory};
pub use config::LogConfig;
pub use error::{BotError, ErrorKind, ValidationError};
