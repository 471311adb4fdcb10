//! Year command implementation.

use anyhow::{Context, Result};
use numwords_core::{ConversionOptions, NumberFormat};

use super::parse_lang;

/// Spell a calendar year.
pub fn words(value: &str, lang: &str, era: bool) -> Result<String> {
    let lang = parse_lang(lang)?;
    let options = ConversionOptions::new()
        .with_format(NumberFormat::Year)
        .with_era_for_positive_years(era);
    numwords_engine::convert_str(value, lang, &options, None)
        .with_context(|| format!("failed to convert year {value:?} in {lang}"))
}

/// Run the year command.
pub fn run(value: &str, lang: &str, era: bool) -> Result<()> {
    println!("{}", words(value, lang, era)?);
    Ok(())
}
