/*
[INPUT]:  CLI arguments, API credentials (environment or prompt), operator input
[OUTPUT]: Interactive trading session against the futures testnet
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::theme::ColorfulTheme;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

use futures_testnet_adapter::{ClientConfig, FuturesClient, TESTNET_BASE_URL};
use futures_testnet_bot::config::{
    API_KEY_ENV, API_SECRET_ENV, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, credentials_from_env,
};
use futures_testnet_bot::{LogConfig, TradingBot, logging};

#[derive(Parser, Debug)]
#[command(
    name = "futures-testnet-bot",
    version,
    about = "Interactive order placement on the futures testnet"
)]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long = "log-file", value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
    #[arg(long = "base-url", value_name = "URL", default_value = TESTNET_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let _log_guard = logging::init(&LogConfig {
        level: args.log_level,
        file: args.log_file,
    })?;

    println!("\n{}", style("Starting Futures Testnet Trading Bot...").bold());

    let credentials = match credentials_from_env() {
        Some(credentials) => credentials,
        None => {
            warn!("API credentials not found in environment variables");
            println!("Please set {API_KEY_ENV} and {API_SECRET_ENV}");
            cli::prompts::prompt_credentials(&ColorfulTheme::default())?
        }
    };

    let client = FuturesClient::with_config_and_base_url(ClientConfig::default(), &args.base_url)
        .context("create HTTP client")?
        .with_credentials(credentials)
        .context("install API credentials")?;

    let bot = match TradingBot::connect(client).await {
        Ok(bot) => bot,
        Err(err) => {
            error!(error = %err, "fatal error during startup");
            println!("\n{} {}", style("Fatal Error:").red().bold(), err);
            println!("Please check your API credentials and try again.");
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("\n{}", style("Bot initialized successfully!").green());

    cli::run_shell(&bot).await?;
    info!("session ended");

    Ok(ExitCode::SUCCESS)
}
