//! Currency command implementation.

use anyhow::{Context, Result};

use super::parse_lang;

/// Spell an amount with the language's default currency.
pub fn words(value: &str, lang: &str, round: bool) -> Result<String> {
    let lang = parse_lang(lang)?;
    let options = numwords_core::ConversionOptions::new()
        .with_currency(None)
        .with_round_currency(round);
    numwords_engine::convert_str(value, lang, &options, None)
        .with_context(|| format!("failed to convert amount {value:?} in {lang}"))
}

/// Run the currency command.
pub fn run(value: &str, lang: &str, round: bool) -> Result<()> {
    println!("{}", words(value, lang, round)?);
    Ok(())
}
