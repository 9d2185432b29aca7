/*
[INPUT]:  Operator keystrokes via dialoguer
[OUTPUT]: Normalized symbols, sides, positive decimals, order ids and confirmations
[POS]:    CLI layer - field prompts with local re-prompting
[UPDATE]: When prompt wording or accepted formats change
*/

use anyhow::Result;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;

use futures_testnet_adapter::Credentials;

const SIDES: [&str; 2] = ["BUY", "SELL"];
const TIME_IN_FORCE_CHOICES: [&str; 3] = ["GTC", "IOC", "FOK"];

pub fn prompt_credentials(theme: &ColorfulTheme) -> Result<Credentials> {
    let api_key: String = Input::with_theme(theme)
        .with_prompt("Enter your Testnet API Key")
        .interact_text()?;
    let api_secret = Password::with_theme(theme)
        .with_prompt("Enter your Testnet API Secret")
        .interact()?;

    Ok(Credentials::new(api_key.trim(), api_secret.trim()))
}

pub fn prompt_symbol(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?;
    Ok(symbol.trim().to_uppercase())
}

/// Empty input means "no symbol"
pub fn prompt_optional_symbol(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let symbol = symbol.trim().to_uppercase();
    Ok((!symbol.is_empty()).then_some(symbol))
}

pub fn prompt_side(theme: &ColorfulTheme) -> Result<&'static str> {
    let index = Select::with_theme(theme)
        .with_prompt("Side")
        .items(&SIDES)
        .default(0)
        .interact()?;
    Ok(SIDES[index])
}

pub fn prompt_time_in_force(theme: &ColorfulTheme) -> Result<&'static str> {
    let index = Select::with_theme(theme)
        .with_prompt("Time in force")
        .items(&TIME_IN_FORCE_CHOICES)
        .default(0)
        .interact()?;
    Ok(TIME_IN_FORCE_CHOICES[index])
}

/// Re-prompts until the input parses as a decimal greater than zero
pub fn prompt_positive_decimal(theme: &ColorfulTheme, prompt: &str) -> Result<Decimal> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| parse_positive_decimal(input).map(|_| ()))
        .interact_text()?;
    parse_positive_decimal(&raw).map_err(anyhow::Error::msg)
}

pub fn prompt_order_id(theme: &ColorfulTheme) -> Result<i64> {
    let order_id: i64 = Input::with_theme(theme)
        .with_prompt("Enter order ID")
        .interact_text()?;
    Ok(order_id)
}

/// True only for a literal `yes`
pub fn confirm_yes(theme: &ColorfulTheme, prompt: &str) -> Result<bool> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} (yes/no)"))
        .allow_empty(true)
        .interact_text()?;
    Ok(is_confirmation(&answer))
}

pub fn pause(theme: &ColorfulTheme) -> Result<()> {
    let _: String = Input::with_theme(theme)
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

pub fn parse_positive_decimal(input: &str) -> std::result::Result<Decimal, &'static str> {
    let value: Decimal = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a number.")?;
    if value <= Decimal::ZERO {
        return Err("Value must be positive. Try again.");
    }
    Ok(value)
}

pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
