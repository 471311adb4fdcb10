//! # numwords-engine
//!
//! Profile-driven conversion of numbers to words.
//!
//! One generic pipeline serves every language: a number is split into scale
//! chunks, each chunk is rendered from digit and place tables, scale words are
//! inflected for their count, and conjunctions and morphological fusion are
//! applied between parts. Everything language-specific lives in a
//! [`GrammarProfile`]; adding a language means adding data, not code.
//!
//! # Example
//!
//! ```
//! use numwords_core::{ConversionOptions, Lang};
//!
//! let words = numwords_engine::convert(2345, Lang::En, &ConversionOptions::default(), None)?;
//! assert_eq!(words, "two thousand three hundred forty-five");
//! # Ok::<(), numwords_core::NumWordsError>(())
//! ```

pub mod agreement;
pub mod chunk;
pub mod decompose;
pub mod format;
pub mod fusion;
pub mod integer;
mod langs;
pub mod profile;
pub mod registry;
pub mod scale;

use numwords_core::{
    ConversionOptions, Lang, Number, NumberFormat, NumberSpeller, NumericInput, NumWordsError,
    NumWordsResult,
};
use tracing::{debug, instrument, warn};

pub use format::FormatHandler;
pub use integer::IntegerConverter;
pub use profile::GrammarProfile;

/// Speller for one language, backed by a static grammar profile.
#[derive(Debug, Clone)]
pub struct Converter {
    profile: &'static GrammarProfile,
    formats: FormatHandler,
}

impl Converter {
    /// Create a converter for a registered language.
    pub fn new(lang: Lang) -> NumWordsResult<Self> {
        Ok(Self::with_profile(registry::profile(lang)?))
    }

    /// Create a converter for an arbitrary profile.
    pub fn with_profile(profile: &'static GrammarProfile) -> Self {
        Self {
            profile,
            formats: FormatHandler::new(profile),
        }
    }

    pub fn profile(&self) -> &'static GrammarProfile {
        self.profile
    }

    fn render(&self, number: &Number, options: &ConversionOptions) -> NumWordsResult<String> {
        if options.currency {
            return self.formats.currency(number, options);
        }
        match options.format {
            NumberFormat::Standard => self.formats.standard(number, options),
            NumberFormat::Year => self.formats.year(number, options),
        }
    }

    /// Map a failed conversion to the fallback or a profile token.
    fn recover(
        &self,
        err: NumWordsError,
        options: &ConversionOptions,
        fallback: Option<&str>,
    ) -> NumWordsResult<String> {
        let words = &self.profile.words;
        match err {
            NumWordsError::NonFiniteInput { negative } => {
                if !negative {
                    return Ok(words.infinity.to_string());
                }
                let prefix = self.formats.negative_word(options);
                Ok(format!("{prefix} {}", words.infinity))
            }
            err if err.is_recoverable() => {
                warn!(error = %err, "conversion failed");
                if let Some(text) = fallback {
                    return Ok(text.to_string());
                }
                if matches!(err, NumWordsError::InvalidInput(_)) {
                    return Ok(words.not_a_number.to_string());
                }
                Err(err)
            }
            err => Err(err),
        }
    }
}

impl NumberSpeller for Converter {
    fn lang(&self) -> Lang {
        self.profile.lang
    }

    #[instrument(skip(self, options, fallback), fields(lang = %self.profile.lang))]
    fn spell(
        &self,
        value: &NumericInput,
        options: &ConversionOptions,
        fallback: Option<&str>,
    ) -> NumWordsResult<String> {
        let result = match value {
            NumericInput::Finite(number) => self.render(number, options),
            NumericInput::NotANumber => Err(NumWordsError::invalid_input("not a number")),
            NumericInput::Infinite { negative } => {
                Err(NumWordsError::NonFiniteInput { negative: *negative })
            }
        };
        match result {
            Ok(words) => {
                debug!(words = %words, "converted");
                Ok(words)
            }
            Err(err) => self.recover(err, options, fallback),
        }
    }
}

/// Convert a value to words in `lang`.
///
/// Recoverable failures yield `fallback` when one is given. NaN without a
/// fallback yields the profile's "not a number" token; scale overflow without
/// a fallback is an error.
pub fn convert(
    value: impl Into<NumericInput>,
    lang: Lang,
    options: &ConversionOptions,
    fallback: Option<&str>,
) -> NumWordsResult<String> {
    Converter::new(lang)?.spell(&value.into(), options, fallback)
}

/// Parse a decimal literal and convert it; unparsable text is handled like NaN.
pub fn convert_str(
    text: &str,
    lang: Lang,
    options: &ConversionOptions,
    fallback: Option<&str>,
) -> NumWordsResult<String> {
    let converter = Converter::new(lang)?;
    match text.parse::<NumericInput>() {
        Ok(value) => converter.spell(&value, options, fallback),
        Err(err) => converter.recover(err, options, fallback),
    }
}

/// Plain cardinal words with default options.
pub fn to_words(value: impl Into<NumericInput>, lang: Lang) -> NumWordsResult<String> {
    convert(value, lang, &ConversionOptions::default(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_lang() {
        let converter = Converter::new(Lang::Ru).unwrap();
        assert_eq!(converter.lang(), Lang::Ru);
        assert_eq!(converter.profile().zero, "ноль");
    }

    #[test]
    fn test_not_a_number() {
        let opts = ConversionOptions::default();
        assert_eq!(convert(f64::NAN, Lang::En, &opts, None).unwrap(), "not a number");
        assert_eq!(convert(f64::NAN, Lang::En, &opts, Some("n/a")).unwrap(), "n/a");
        assert_eq!(convert_str("abc", Lang::En, &opts, None).unwrap(), "not a number");
        assert_eq!(convert_str("abc", Lang::En, &opts, Some("?")).unwrap(), "?");
    }

    #[test]
    fn test_infinity() {
        let opts = ConversionOptions::default();
        assert_eq!(convert(f64::INFINITY, Lang::En, &opts, None).unwrap(), "infinity");
        assert_eq!(
            convert(f64::NEG_INFINITY, Lang::En, &opts, None).unwrap(),
            "minus infinity"
        );
        let opts = opts.with_negative_prefix("negative");
        assert_eq!(
            convert_str("-inf", Lang::En, &opts, Some("x")).unwrap(),
            "negative infinity"
        );
        let opts = ConversionOptions::new().with_negative_prefix(" ");
        assert_eq!(
            convert(f64::NEG_INFINITY, Lang::En, &opts, None).unwrap(),
            "minus infinity"
        );
    }

    #[test]
    fn test_overflow_fallback() {
        let opts = ConversionOptions::default();
        let huge = "1e40";
        assert!(matches!(
            convert_str(huge, Lang::En, &opts, None),
            Err(NumWordsError::ScaleOverflow { .. })
        ));
        assert_eq!(convert_str(huge, Lang::En, &opts, Some("lots")).unwrap(), "lots");
    }

    #[test]
    fn test_dispatch_by_format() {
        let opts = ConversionOptions::new().with_format(NumberFormat::Year);
        assert_eq!(convert(1999, Lang::En, &opts, None).unwrap(), "nineteen ninety-nine");

        let opts = ConversionOptions::new().with_currency(None);
        assert_eq!(
            convert(1999, Lang::En, &opts, None).unwrap(),
            "one thousand nine hundred ninety-nine dollars"
        );
    }

    #[test]
    fn test_to_words() {
        assert_eq!(to_words(42u8, Lang::De).unwrap(), "zweiundvierzig");
        assert_eq!(to_words(-7i64, Lang::Es).unwrap(), "menos siete");
    }
}
