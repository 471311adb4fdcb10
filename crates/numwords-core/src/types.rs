//! Core data types shared by the speller crates.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NumWordsError, NumWordsResult};

/// Largest decimal exponent accepted when parsing scientific notation.
const MAX_EXPONENT: i64 = 4096;

/// Languages with a built-in grammar profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    /// English, American usage (no "and").
    #[default]
    #[serde(rename = "en")]
    En,
    /// English, British usage ("one hundred and one").
    #[serde(rename = "en-gb")]
    EnGb,
    /// Russian.
    #[serde(rename = "ru")]
    Ru,
    /// Spanish (long scale).
    #[serde(rename = "es")]
    Es,
    /// German.
    #[serde(rename = "de")]
    De,
    /// Korean (Sino-Korean numerals, myriad grouping).
    #[serde(rename = "ko")]
    Ko,
    /// Zulu.
    #[serde(rename = "zu")]
    Zu,
}

impl Lang {
    /// Every supported language, in registry order.
    pub const ALL: [Lang; 7] = [
        Lang::En,
        Lang::EnGb,
        Lang::Ru,
        Lang::Es,
        Lang::De,
        Lang::Ko,
        Lang::Zu,
    ];

    /// BCP 47-style tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::EnGb => "en-gb",
            Lang::Ru => "ru",
            Lang::Es => "es",
            Lang::De => "de",
            Lang::Ko => "ko",
            Lang::Zu => "zu",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = NumWordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Lang::En),
            "en-gb" | "en-uk" => Ok(Lang::EnGb),
            "ru" | "ru-ru" => Ok(Lang::Ru),
            "es" | "es-es" => Ok(Lang::Es),
            "de" | "de-de" => Ok(Lang::De),
            "ko" | "ko-kr" => Ok(Lang::Ko),
            "zu" | "zu-za" => Ok(Lang::Zu),
            _ => Err(NumWordsError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Grammatical class a numeral has to agree with.
///
/// `Unmarked` selects the citation form used when counting in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalClass {
    #[default]
    Unmarked,
    Masculine,
    Feminine,
    Neuter,
    /// Bantu noun class number (e.g. 6 for `ama-` plurals in Zulu).
    NounClass(u8),
}

impl fmt::Display for GrammaticalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmarked => write!(f, "unmarked"),
            Self::Masculine => write!(f, "masculine"),
            Self::Feminine => write!(f, "feminine"),
            Self::Neuter => write!(f, "neuter"),
            Self::NounClass(n) => write!(f, "class{n}"),
        }
    }
}

impl FromStr for GrammaticalClass {
    type Err = NumWordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "" | "unmarked" | "default" => Ok(Self::Unmarked),
            "m" | "masc" | "masculine" => Ok(Self::Masculine),
            "f" | "fem" | "feminine" => Ok(Self::Feminine),
            "n" | "neut" | "neuter" => Ok(Self::Neuter),
            other => other
                .strip_prefix("class")
                .and_then(|n| n.trim_start_matches([':', '-']).parse::<u8>().ok())
                .map(Self::NounClass)
                .ok_or_else(|| NumWordsError::config(format!("unknown grammatical class: {s}"))),
        }
    }
}

/// Plural bucket that decides which inflected form of a counted word is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountClass {
    One,
    Few,
    Many,
    Other,
}

impl fmt::Display for CountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Exact signed decimal: `(-1)^negative * digits / 10^scale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub negative: bool,
    pub digits: BigUint,
    pub scale: u32,
}

impl Number {
    /// Create a number from its parts.
    pub fn new(negative: bool, digits: BigUint, scale: u32) -> Self {
        Self {
            negative,
            digits,
            scale,
        }
    }

    /// Create a non-negative integer.
    pub fn integer(value: impl Into<BigUint>) -> Self {
        Self::new(false, value.into(), 0)
    }

    /// Whether the magnitude is zero (sign ignored).
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    fn divisor(&self) -> BigUint {
        BigUint::from(10u32).pow(self.scale)
    }

    /// Integral part of the magnitude.
    pub fn integer_part(&self) -> BigUint {
        if self.scale == 0 {
            return self.digits.clone();
        }
        &self.digits / self.divisor()
    }

    /// Fractional digits exactly as stored, `scale` characters long.
    pub fn fraction_digits(&self) -> String {
        if self.scale == 0 {
            return String::new();
        }
        let rest = &self.digits % self.divisor();
        format!(
            "{:0>width$}",
            rest.to_str_radix(10),
            width = self.scale as usize
        )
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer_part())?;
        if self.scale > 0 {
            write!(f, ".{}", self.fraction_digits())?;
        }
        Ok(())
    }
}

/// Normalized numeric input handed to the speller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericInput {
    Finite(Number),
    NotANumber,
    Infinite { negative: bool },
}

impl NumericInput {
    /// The finite value, if any.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Finite(n) => Some(n),
            _ => None,
        }
    }
}

impl FromStr for NumericInput {
    type Err = NumWordsError;

    /// Parse a plain or scientific decimal literal without rounding.
    fn from_str(s: &str) -> NumWordsResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumWordsError::invalid_input("empty input"));
        }

        match s.to_ascii_lowercase().as_str() {
            "nan" | "-nan" | "+nan" => return Ok(Self::NotANumber),
            "inf" | "+inf" | "infinity" | "+infinity" => {
                return Ok(Self::Infinite { negative: false });
            }
            "-inf" | "-infinity" => return Ok(Self::Infinite { negative: true }),
            _ => {}
        }

        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp = body[pos + 1..]
                    .parse::<i64>()
                    .map_err(|_| NumWordsError::invalid_input(format!("bad exponent in {s:?}")))?;
                if exp.abs() > MAX_EXPONENT {
                    return Err(NumWordsError::invalid_input(format!(
                        "exponent out of range in {s:?}"
                    )));
                }
                (&body[..pos], exp)
            }
            None => (body, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };

        let is_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit() || b == b'_');
        if !is_digits(int_part) || !is_digits(frac_part) {
            return Err(NumWordsError::invalid_input(format!("not a number: {s:?}")));
        }

        let mut all_digits: String = int_part
            .chars()
            .chain(frac_part.chars())
            .filter(|c| *c != '_')
            .collect();
        if all_digits.is_empty() {
            return Err(NumWordsError::invalid_input(format!("not a number: {s:?}")));
        }
        let frac_len = frac_part.chars().filter(|c| *c != '_').count() as i64;
        let mut scale = frac_len - exponent;
        if scale < 0 {
            all_digits.extend(std::iter::repeat('0').take((-scale) as usize));
            scale = 0;
        }

        let digits = BigUint::parse_bytes(all_digits.as_bytes(), 10)
            .ok_or_else(|| NumWordsError::invalid_input(format!("not a number: {s:?}")))?;

        Ok(Self::Finite(Number::new(negative, digits, scale as u32)))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for NumericInput {
            fn from(value: $t) -> Self {
                Self::Finite(Number::integer(value))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for NumericInput {
            fn from(value: $t) -> Self {
                Self::Finite(Number::new(value < 0, BigUint::from(value.unsigned_abs()), 0))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<BigUint> for NumericInput {
    fn from(value: BigUint) -> Self {
        Self::Finite(Number::integer(value))
    }
}

impl From<Number> for NumericInput {
    fn from(value: Number) -> Self {
        Self::Finite(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::NotANumber;
        }
        if value.is_infinite() {
            return Self::Infinite {
                negative: value.is_sign_negative(),
            };
        }
        // Display for f64 prints the shortest round-tripping decimal, never exponent form.
        format!("{value}").parse().unwrap_or(Self::NotANumber)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        if value.is_nan() {
            return Self::NotANumber;
        }
        if value.is_infinite() {
            return Self::Infinite {
                negative: value.is_sign_negative(),
            };
        }
        format!("{value}").parse().unwrap_or(Self::NotANumber)
    }
}
