//! Convert command implementation.

use anyhow::{Context, Result};
use numwords_core::{DecimalSeparator, GrammaticalClass};
use std::path::PathBuf;

use super::{load_options, parse_lang};

/// Options for the convert command.
#[derive(Debug)]
pub struct ConvertOptions {
    pub value: String,
    pub lang: String,
    pub comma: bool,
    pub negative_prefix: Option<String>,
    pub class: Option<String>,
    pub fallback: Option<String>,
    pub options_file: Option<PathBuf>,
}

/// Spell a number with the standard format.
pub fn words(opts: &ConvertOptions) -> Result<String> {
    let lang = parse_lang(&opts.lang)?;
    let mut options = load_options(opts.options_file.as_deref())?;

    if opts.comma {
        options = options.with_decimal_separator(DecimalSeparator::Comma);
    }
    if let Some(prefix) = &opts.negative_prefix {
        options = options.with_negative_prefix(prefix.clone());
    }
    if let Some(class) = &opts.class {
        let class: GrammaticalClass = class
            .parse()
            .with_context(|| format!("invalid grammatical class {class:?}"))?;
        options = options.with_class(class);
    }

    numwords_engine::convert_str(&opts.value, lang, &options, opts.fallback.as_deref())
        .with_context(|| format!("failed to convert {:?} in {lang}", opts.value))
}

/// Run the convert command.
pub fn run(opts: ConvertOptions) -> Result<()> {
    println!("{}", words(&opts)?);
    Ok(())
}
