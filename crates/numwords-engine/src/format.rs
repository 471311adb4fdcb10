//! Standard, currency and year phrasing on top of the integer converter.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use numwords_core::{ConversionOptions, GrammaticalClass, Number, NumWordsResult};
use tracing::debug;

use crate::integer::IntegerConverter;
use crate::profile::{CenturyRule, GrammarProfile, JoinKind, YearStyle};
use crate::scale::pick_form;

/// Applies a format to a finite number.
#[derive(Debug, Clone)]
pub struct FormatHandler {
    profile: &'static GrammarProfile,
    converter: IntegerConverter,
}

impl FormatHandler {
    pub fn new(profile: &'static GrammarProfile) -> Self {
        Self {
            profile,
            converter: IntegerConverter::new(profile),
        }
    }

    /// Cardinal words with a digit-by-digit fraction.
    pub fn standard(&self, number: &Number, options: &ConversionOptions) -> NumWordsResult<String> {
        let class = options.class_hint.unwrap_or_default();
        let mut words = self.converter.convert(&number.integer_part(), class)?;

        let fraction = number.fraction_digits();
        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            let separator = options
                .decimal_separator
                .unwrap_or(self.profile.words.default_separator);
            let digits = fraction
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| self.profile.digit_word(d))
                .collect::<Vec<_>>()
                .join(" ");
            words = format!("{words} {} {digits}", self.profile.decimal_word(separator));
        }

        Ok(self.apply_sign(words, number.negative && !number.is_zero(), options))
    }

    /// Main and sub-unit currency phrase.
    pub fn currency(&self, number: &Number, options: &ConversionOptions) -> NumWordsResult<String> {
        // Caller-supplied units carry their own class and never elide "one".
        let (info, elide_one) = match &options.currency_info {
            Some(info) => (info.clone(), false),
            None => (self.profile.currency.to_info(), self.profile.currency.elide_one),
        };
        let has_sub = info.sub_unit_singular.is_some();
        let (main, sub) = split_amount(number, has_sub, options.round_currency);
        debug!(%main, sub, "currency split");

        let main_phrase = self.unit_phrase(
            &main,
            info.main_unit_class.unwrap_or_default(),
            elide_one,
            &info.main_unit_singular,
            info.main_unit_few.as_deref(),
            info.main_unit_plural.as_deref(),
        )?;

        let words = match (&info.sub_unit_singular, sub) {
            (Some(singular), sub) if sub > 0 => {
                let sub_phrase = self.unit_phrase(
                    &BigUint::from(sub),
                    info.sub_unit_class.unwrap_or_default(),
                    elide_one,
                    singular,
                    info.sub_unit_few.as_deref(),
                    info.sub_unit_plural.as_deref(),
                )?;
                if main.is_zero() {
                    sub_phrase
                } else {
                    let separator = info
                        .separator
                        .as_deref()
                        .unwrap_or(self.profile.currency.separator);
                    self.join_currency(&main_phrase, separator, &sub_phrase)
                }
            }
            _ => main_phrase,
        };

        let nonzero = !main.is_zero() || sub > 0;
        Ok(self.apply_sign(words, number.negative && nonzero, options))
    }

    /// Calendar year with an optional era word.
    pub fn year(&self, number: &Number, options: &ConversionOptions) -> NumWordsResult<String> {
        let year = number.integer_part();
        let before_era = number.negative && !year.is_zero();

        let words = match (&self.profile.year, year.to_u32()) {
            (YearStyle::Centuries(rule), Some(y)) => match self.centuries(rule, y)? {
                Some(words) => words,
                None => self.converter.convert(&year, GrammaticalClass::Unmarked)?,
            },
            _ => self.converter.convert(&year, GrammaticalClass::Unmarked)?,
        };

        let era = if before_era {
            self.profile.words.era_before
        } else if options.include_era_suffix_for_positive_years {
            self.profile.words.era_after
        } else {
            ""
        };
        if era.is_empty() {
            return Ok(words);
        }
        Ok(if self.profile.words.era_first {
            format!("{era} {words}")
        } else {
            format!("{words} {era}")
        })
    }

    /// Century reading, or `None` when the year reads as a cardinal.
    fn centuries(&self, rule: &CenturyRule, year: u32) -> NumWordsResult<Option<String>> {
        let high = year / 100;
        let low = year % 100;
        if high < rule.min_century || high > rule.max_century {
            return Ok(None);
        }
        // "two thousand five", not "twenty oh-five"
        if high % 10 == 0 && low < 10 {
            return Ok(None);
        }

        let word = |n: u32| self.converter.convert(&BigUint::from(n), GrammaticalClass::Unmarked);
        let high_words = word(high)?;
        let joiner = rule.joiner;

        let words = if low == 0 {
            format!("{high_words}{joiner}{}", rule.hundred)
        } else if rule.always_hundred {
            format!("{high_words}{joiner}{}{joiner}{}", rule.hundred, word(low)?)
        } else {
            match rule.oh {
                Some(oh) if low < 10 => format!("{high_words} {oh}-{}", word(low)?),
                _ => format!("{high_words} {}", word(low)?),
            }
        };
        Ok(Some(words))
    }

    fn unit_phrase(
        &self,
        amount: &BigUint,
        class: GrammaticalClass,
        elide_one: bool,
        singular: &str,
        few: Option<&str>,
        plural: Option<&str>,
    ) -> NumWordsResult<String> {
        let count_class = self.profile.count_rule.classify_big(amount);
        let form = pick_form(count_class, singular, few, plural, plural);
        if amount.is_one() && elide_one {
            return Ok(form.to_string());
        }
        let numeral = self.converter.convert_count(amount, class)?;
        Ok(if self.profile.noun_first {
            format!("{form} {numeral}")
        } else {
            format!("{numeral} {form}")
        })
    }

    fn join_currency(&self, main: &str, separator: &str, sub: &str) -> String {
        if separator.is_empty() {
            return format!("{main} {sub}");
        }
        let tail = self
            .converter
            .chunks()
            .fuser()
            .fuse(separator, sub, JoinKind::Conjunction, " ");
        format!("{main} {tail}")
    }

    /// Word placed before negative numbers; a blank prefix falls back to the profile's.
    pub fn negative_word<'a>(&self, options: &'a ConversionOptions) -> &'a str {
        options
            .negative_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(self.profile.words.negative)
    }

    fn apply_sign(&self, words: String, negative: bool, options: &ConversionOptions) -> String {
        if negative {
            format!("{} {words}", self.negative_word(options))
        } else {
            words
        }
    }
}

/// Split an amount into main units and two-digit sub-units.
///
/// Rounding is half-up on the first digit past the kept precision and
/// carries into the main unit. Without a sub-unit only whole units are kept.
pub fn split_amount(number: &Number, has_sub: bool, round: bool) -> (BigUint, u32) {
    let mut main = number.integer_part();
    let fraction = format!("{:0<3}", number.fraction_digits());
    if !has_sub {
        if round && fraction.chars().next().and_then(|c| c.to_digit(10)) >= Some(5) {
            main += 1u32;
        }
        return (main, 0);
    }

    let digits: Vec<u32> = fraction.chars().filter_map(|c| c.to_digit(10)).collect();
    let mut sub = digits[0] * 10 + digits[1];
    if round && digits[2] >= 5 {
        sub += 1;
        if sub == 100 {
            sub = 0;
            main += 1u32;
        }
    }
    (main, sub)
}
