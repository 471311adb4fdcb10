//! Scale-word selection and plural classification.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use numwords_core::{CountClass, NumWordsError};
use tracing::debug;

use crate::profile::{CountRule, ScaleDef};

impl CountRule {
    /// Plural class of a count.
    pub fn classify(&self, n: u64) -> CountClass {
        match self {
            CountRule::Simple => {
                if n == 1 {
                    CountClass::One
                } else {
                    CountClass::Other
                }
            }
            CountRule::Slavic => {
                let last_two = n % 100;
                if (11..=14).contains(&last_two) {
                    return CountClass::Many;
                }
                match n % 10 {
                    1 => CountClass::One,
                    2..=4 => CountClass::Few,
                    _ => CountClass::Many,
                }
            }
            CountRule::Invariant => CountClass::Other,
        }
    }

    /// Plural class of an arbitrarily large count.
    pub fn classify_big(&self, n: &BigUint) -> CountClass {
        match n.to_u64() {
            Some(small) => self.classify(small),
            // Only the last two digits matter past u64, and the result must not look like one.
            None => {
                let last_two = (n % 100u32).to_u64().unwrap_or_default();
                self.classify(last_two + 100)
            }
        }
    }
}

/// Pick the form for a class, falling back to the singular when the table lacks it.
pub fn pick_form<'a>(
    class: CountClass,
    one: &'a str,
    few: Option<&'a str>,
    many: Option<&'a str>,
    other: Option<&'a str>,
) -> &'a str {
    let found = match class {
        CountClass::One => Some(one),
        CountClass::Few => few.or(other).or(many),
        CountClass::Many => many.or(other),
        CountClass::Other => other.or(many),
    };
    found.unwrap_or_else(|| {
        let err = NumWordsError::missing_grammar_data(format!("no {class} form for {one:?}"));
        debug!(error = %err, "using singular");
        one
    })
}

/// Outcome of scale selection for one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleChoice {
    pub count_class: CountClass,
    pub word: &'static str,
    /// The numeral is dropped and the scale word stands alone.
    pub elide_numeral: bool,
}

/// Chooses scale-word inflection and elision for a count.
#[derive(Debug, Clone, Copy)]
pub struct ScaleSelector {
    rule: CountRule,
}

impl ScaleSelector {
    pub fn new(rule: CountRule) -> Self {
        Self { rule }
    }

    /// Select the scale word for a non-zero count.
    pub fn select(&self, count: u32, scale: &ScaleDef) -> ScaleChoice {
        debug_assert!(count > 0, "zero chunks never reach scale selection");
        let count_class = self.rule.classify(u64::from(count));
        ScaleChoice {
            count_class,
            word: scale.forms.get(count_class),
            elide_numeral: scale.elide_one && count == 1,
        }
    }
}
