//! CLI command implementations.

pub mod convert;
pub mod currency;
pub mod info;
pub mod langs;
pub mod year;

use anyhow::{Context, Result};
use numwords_core::{ConversionOptions, Lang};
use std::path::Path;

/// Parse a language tag argument.
pub fn parse_lang(tag: &str) -> Result<Lang> {
    tag.parse::<Lang>()
        .with_context(|| format!("unsupported language {tag:?}"))
}

/// Load conversion options from a JSON file, or start from defaults.
pub fn load_options(path: Option<&Path>) -> Result<ConversionOptions> {
    let Some(path) = path else {
        return Ok(ConversionOptions::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    ConversionOptions::from_json(&json)
        .with_context(|| format!("failed to parse options file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lang() {
        assert_eq!(parse_lang("en-GB").unwrap(), Lang::EnGb);
        let err = parse_lang("xx").unwrap_err();
        assert!(err.to_string().contains("unsupported language"));
    }

    #[test]
    fn test_load_options_defaults_without_file() {
        let options = load_options(None).unwrap();
        assert_eq!(options, ConversionOptions::default());
    }

    #[test]
    fn test_load_options_from_file() {
        let path = std::env::temp_dir()
            .join(format!("numwords-options-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "negativePrefix": "negative", "roundCurrency": false }"#,
        )
        .unwrap();
        let options = load_options(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(options.negative_prefix.as_deref(), Some("negative"));
        assert!(!options.round_currency);
    }

    #[test]
    fn test_load_options_missing_file() {
        let err = load_options(Some(Path::new("/nonexistent/numwords.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read options file"));
    }
}
