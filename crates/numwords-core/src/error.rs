//! Unified error types for number spelling.

use crate::types::Lang;

/// Main error type for numwords operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumWordsError {
    /// Input could not be read as a number.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input was positive or negative infinity.
    #[error("non-finite input: {}infinity", if *negative { "-" } else { "+" })]
    NonFiniteInput { negative: bool },

    /// Magnitude needs a scale word the profile does not define.
    #[error(
        "scale overflow for {lang}: scale index {scale_index} exceeds largest defined index {max_scale_index}"
    )]
    ScaleOverflow {
        lang: Lang,
        scale_index: usize,
        max_scale_index: usize,
    },

    /// A grammatical form required by the request is absent from the data.
    #[error("missing grammar data: {0}")]
    MissingGrammarData(String),

    /// Language tag not recognized.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results with NumWordsError.
pub type NumWordsResult<T> = Result<T, NumWordsError>;

impl NumWordsError {
    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a missing grammar data error with message.
    pub fn missing_grammar_data(msg: impl Into<String>) -> Self {
        Self::MissingGrammarData(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error with message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether a caller-supplied fallback string may stand in for this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::NonFiniteInput { .. }
                | Self::ScaleOverflow { .. }
                | Self::MissingGrammarData(_)
        )
    }
}
