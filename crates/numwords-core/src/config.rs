//! Conversion options and currency metadata.

use serde::{Deserialize, Serialize};

use crate::error::{NumWordsError, NumWordsResult};
use crate::types::GrammaticalClass;

/// Output phrasing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Cardinal number with optional decimal fraction.
    #[default]
    Standard,
    /// Calendar year with optional era word.
    Year,
}

/// Which word reads the decimal mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    Comma,
    Point,
}

/// Currency unit names used for currency phrasing.
///
/// Only the singular main unit is mandatory. Missing plural or few forms fall
/// back to the singular; without a sub-unit amounts are spoken in whole units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// Main unit, singular ("dollar").
    pub main_unit_singular: String,
    /// Main unit, plural ("dollars").
    #[serde(default)]
    pub main_unit_plural: Option<String>,
    /// Main unit form for the Slavic "few" bucket ("рубля").
    #[serde(default)]
    pub main_unit_few: Option<String>,
    /// Class the main-unit numeral agrees with; unmarked when absent.
    #[serde(default)]
    pub main_unit_class: Option<GrammaticalClass>,
    /// Sub-unit, singular ("cent").
    #[serde(default)]
    pub sub_unit_singular: Option<String>,
    /// Sub-unit, plural ("cents").
    #[serde(default)]
    pub sub_unit_plural: Option<String>,
    /// Sub-unit form for the Slavic "few" bucket ("копейки").
    #[serde(default)]
    pub sub_unit_few: Option<String>,
    /// Class the sub-unit numeral agrees with; unmarked when absent.
    #[serde(default)]
    pub sub_unit_class: Option<GrammaticalClass>,
    /// Word between the main and sub-unit phrases; profile default when absent.
    #[serde(default)]
    pub separator: Option<String>,
}

impl CurrencyInfo {
    /// Create currency info with singular and plural main unit.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            main_unit_singular: singular.into(),
            main_unit_plural: Some(plural.into()),
            ..Self::default()
        }
    }

    /// Set the sub-unit names.
    pub fn with_sub_unit(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.sub_unit_singular = Some(singular.into());
        self.sub_unit_plural = Some(plural.into());
        self
    }

    /// Set the separator between main and sub-unit phrases.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
}

/// Options recognized by the speller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Render as a currency amount.
    #[serde(default)]
    pub currency: bool,
    /// Currency names; the profile's default currency when absent.
    #[serde(default)]
    pub currency_info: Option<CurrencyInfo>,
    /// Standard or year phrasing.
    #[serde(default)]
    pub format: NumberFormat,
    /// Decimal mark word; the profile default when absent.
    #[serde(default)]
    pub decimal_separator: Option<DecimalSeparator>,
    /// Append the era word to positive years too.
    #[serde(default)]
    pub include_era_suffix_for_positive_years: bool,
    /// Word placed before negative numbers; the profile default when absent.
    #[serde(default)]
    pub negative_prefix: Option<String>,
    /// Class the final numeral agrees with.
    #[serde(default)]
    pub class_hint: Option<GrammaticalClass>,
    /// Round currency amounts half-up to two sub-unit digits instead of truncating.
    #[serde(default = "default_round_currency")]
    pub round_currency: bool,
}

fn default_round_currency() -> bool {
    true
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            currency: false,
            currency_info: None,
            format: NumberFormat::default(),
            decimal_separator: None,
            include_era_suffix_for_positive_years: false,
            negative_prefix: None,
            class_hint: None,
            round_currency: default_round_currency(),
        }
    }
}

impl ConversionOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> NumWordsResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| NumWordsError::config(format!("invalid conversion options: {e}")))
    }

    /// Enable currency phrasing.
    pub fn with_currency(mut self, info: Option<CurrencyInfo>) -> Self {
        self.currency = true;
        self.currency_info = info;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the decimal separator style.
    pub fn with_decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.decimal_separator = Some(separator);
        self
    }

    /// Append the era word to positive years.
    pub fn with_era_for_positive_years(mut self, include: bool) -> Self {
        self.include_era_suffix_for_positive_years = include;
        self
    }

    /// Set the negative prefix.
    pub fn with_negative_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.negative_prefix = Some(prefix.into());
        self
    }

    /// Set the grammatical class hint.
    pub fn with_class(mut self, class: GrammaticalClass) -> Self {
        self.class_hint = Some(class);
        self
    }

    /// Enable or disable currency rounding.
    pub fn with_round_currency(mut self, round: bool) -> Self {
        self.round_currency = round;
        self
    }
}
