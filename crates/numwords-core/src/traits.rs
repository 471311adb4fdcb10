//! Trait definitions for number spellers.

use crate::config::ConversionOptions;
use crate::error::NumWordsResult;
use crate::types::{Lang, NumericInput};

/// Number-to-words conversion trait.
///
/// Implementations turn a normalized numeric value into words in one
/// language, honoring currency, year and decimal options.
pub trait NumberSpeller: Send + Sync {
    /// Language this speller writes.
    fn lang(&self) -> Lang;

    /// Spell a value.
    ///
    /// # Arguments
    /// * `value` - Normalized numeric input
    /// * `options` - Conversion options
    /// * `fallback` - Text returned instead of recoverable failures
    ///
    /// # Returns
    /// The words, the fallback, or a profile token for NaN and infinity.
    /// Scale overflow without a fallback is returned as an error.
    fn spell(
        &self,
        value: &NumericInput,
        options: &ConversionOptions,
        fallback: Option<&str>,
    ) -> NumWordsResult<String>;
}
