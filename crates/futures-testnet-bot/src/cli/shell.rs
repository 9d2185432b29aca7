/*
[INPUT]:  Connected TradingBot and operator menu selections
[OUTPUT]: Printed balances, order results and error reports
[POS]:    CLI layer - main menu loop
[UPDATE]: When adding menu actions or changing error reporting
*/

use anyhow::Result;
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};

use futures_testnet_bot::report::{format_balance, format_open_order, format_order_status};
use futures_testnet_bot::{BotError, ErrorKind, TradingBot};

use super::menu::MenuChoice;
use super::prompts;

pub async fn run_shell(bot: &TradingBot) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        print_banner();
        let index = Select::with_theme(&theme)
            .with_prompt("Select an option (1-9)")
            .items(&MenuChoice::items())
            .default(0)
            .interact()?;

        let Some(choice) = MenuChoice::from_index(index) else {
            println!("{}", style("Invalid option. Please select 1-9.").red());
            continue;
        };

        if choice == MenuChoice::Exit {
            println!("\n{}", style("Exiting bot. Goodbye!").bold());
            return Ok(());
        }

        if let Err(err) = run_action(bot, &theme, choice).await {
            report_error(&err);
        }

        prompts::pause(&theme)?;
    }
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{}", style("  FUTURES TESTNET TRADING BOT").bold().cyan());
    println!("{rule}");
}

async fn run_action(bot: &TradingBot, theme: &ColorfulTheme, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::ViewBalance => {
            let balance = bot.account_balance().await?;
            println!("\n{}", format_balance(&balance));
        }
        MenuChoice::MarketOrder => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol (e.g., BTCUSDT)")?;
            let side = prompts::prompt_side(theme)?;
            let quantity = prompts::prompt_positive_decimal(theme, "Enter quantity")?;

            let prompt = format!("Confirm {side} {quantity} {symbol} at MARKET price?");
            if !prompts::confirm_yes(theme, &prompt)? {
                print_aborted();
                return Ok(());
            }

            let order = bot.place_market_order(&symbol, side, quantity).await?;
            println!("\n{} Order ID: {}", style("Order executed!").green(), order.order_id);
            println!("Status: {}", order.status);
        }
        MenuChoice::LimitOrder => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol (e.g., BTCUSDT)")?;
            let side = prompts::prompt_side(theme)?;
            let quantity = prompts::prompt_positive_decimal(theme, "Enter quantity")?;
            let price = prompts::prompt_positive_decimal(theme, "Enter limit price")?;
            let time_in_force = prompts::prompt_time_in_force(theme)?;

            let prompt = format!("Confirm {side} {quantity} {symbol} @ {price} ({time_in_force})?");
            if !prompts::confirm_yes(theme, &prompt)? {
                print_aborted();
                return Ok(());
            }

            let order = bot
                .place_limit_order(&symbol, side, quantity, price, time_in_force)
                .await?;
            println!("\n{} Order ID: {}", style("Order placed!").green(), order.order_id);
            println!("Status: {}", order.status);
        }
        MenuChoice::StopLimitOrder => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol (e.g., BTCUSDT)")?;
            let side = prompts::prompt_side(theme)?;
            let quantity = prompts::prompt_positive_decimal(theme, "Enter quantity")?;
            let stop_price = prompts::prompt_positive_decimal(theme, "Enter stop price")?;
            let limit_price = prompts::prompt_positive_decimal(theme, "Enter limit price")?;
            let time_in_force = prompts::prompt_time_in_force(theme)?;

            let prompt = format!(
                "Confirm {side} {quantity} {symbol} stop:{stop_price} limit:{limit_price} ({time_in_force})?"
            );
            if !prompts::confirm_yes(theme, &prompt)? {
                print_aborted();
                return Ok(());
            }

            let order = bot
                .place_stop_limit_order(
                    &symbol,
                    side,
                    quantity,
                    stop_price,
                    limit_price,
                    time_in_force,
                )
                .await?;
            println!("\n{} Order ID: {}", style("Order placed!").green(), order.order_id);
            println!("Status: {}", order.status);
        }
        MenuChoice::OpenOrders => {
            let symbol =
                prompts::prompt_optional_symbol(theme, "Enter symbol (or press Enter for all)")?;
            let orders = bot.open_orders(symbol.as_deref()).await?;

            if orders.is_empty() {
                println!("\nNo open orders");
            } else {
                println!("\n{}", style(format!("Open Orders ({}):", orders.len())).bold());
                for order in &orders {
                    println!("\n{}", format_open_order(order));
                }
            }
        }
        MenuChoice::CancelOrder => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol")?;
            let order_id = prompts::prompt_order_id(theme)?;

            let prompt = format!("Confirm cancel of order {order_id} on {symbol}?");
            if !prompts::confirm_yes(theme, &prompt)? {
                print_aborted();
                return Ok(());
            }

            bot.cancel_order(&symbol, order_id).await?;
            println!(
                "\n{}",
                style(format!("Order {order_id} cancelled successfully!")).green()
            );
        }
        MenuChoice::OrderStatus => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol")?;
            let order_id = prompts::prompt_order_id(theme)?;

            let order = bot.order_status(&symbol, order_id).await?;
            println!("\n{}", style("Order Status:").bold());
            println!("{}", format_order_status(&order));
        }
        MenuChoice::CurrentPrice => {
            let symbol = prompts::prompt_symbol(theme, "Enter symbol")?;
            let price = bot.current_price(&symbol).await?;
            println!("\n{symbol} current price: {price} USDT");
        }
        MenuChoice::Exit => {}
    }

    Ok(())
}

fn print_aborted() {
    println!("{}", style("Cancelled, nothing was sent.").yellow());
}

fn report_error(err: &anyhow::Error) {
    let prefix = match err.downcast_ref::<BotError>().map(BotError::kind) {
        Some(ErrorKind::Validation) => "Validation Error",
        Some(ErrorKind::ExchangeApi) => "API Error",
        Some(ErrorKind::Transport) => "Network Error",
        Some(ErrorKind::Other) | None => "Error",
    };
    println!("\n{} {}", style(format!("{prefix}:")).red().bold(), err);
}
