//! Grammar profile model.
//!
//! A [`GrammarProfile`] is pure data: every language-specific decision the
//! engine makes (digit words, place words, scale inflection, agreement,
//! conjunctions, fusion) is read from one of these tables. Profiles are
//! `'static` values and are never mutated after load.

use numwords_core::{
    CountClass, CurrencyInfo, DecimalSeparator, GrammaticalClass, Lang, NumWordsError,
    NumWordsResult,
};

use crate::scale::pick_form;

/// Immutable per-language configuration.
#[derive(Debug)]
pub struct GrammarProfile {
    pub lang: Lang,
    /// Human-readable name.
    pub name: &'static str,
    /// Word for zero.
    pub zero: &'static str,
    /// Size of one scale chunk (1000 for most languages).
    pub chunk_base: u32,
    /// How a single chunk is rendered.
    pub chunk: ChunkStyle,
    /// Plural classification for counted words.
    pub count_rule: CountRule,
    /// Class-specific numeral forms.
    pub agreement: &'static [AgreementForm],
    /// Noun-class concord prefixes.
    pub concords: &'static [Concord],
    /// Scale words; entry `i` names `chunk_base^(i + 1)`.
    pub scales: &'static [ScaleDef],
    /// Counted nouns precede their numeral ("amakhulu amabili").
    pub noun_first: bool,
    /// Joiner between chunks when no conjunction rule fires.
    pub chunk_joiner: &'static str,
    /// Ordered conjunction rules between chunks.
    pub conjunctions: &'static [ConjunctionRule],
    /// Ordered fusion rules, most specific first.
    pub fusions: &'static [FusionRule],
    /// Generic vowel coalescence table.
    pub coalescence: &'static [VowelPair],
    pub words: ProfileWords,
    pub year: YearStyle,
    pub currency: CurrencyDefaults,
}

/// Chunk rendering strategy.
#[derive(Debug)]
pub enum ChunkStyle {
    /// Digit tables plus multiplier place words ("three hundred", "삼백").
    Positional(PositionalRules),
    /// Tens and hundreds are counted nouns ("amakhulu amabili").
    CountedNouns(CountedNounRules),
}

#[derive(Debug)]
pub struct PositionalRules {
    /// Direct lookup for values below `units.len()`.
    pub units: &'static [&'static str],
    /// Indexed by tens digit; empty when tens are a place word.
    pub tens: &'static [&'static str],
    pub tens_rule: TensRule,
    /// Place words inside a chunk, highest power first.
    pub places: &'static [PlaceDef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensOrder {
    /// "twenty-one"
    TensFirst,
    /// "einundzwanzig"
    UnitsFirst,
}

#[derive(Debug)]
pub struct TensRule {
    pub order: TensOrder,
    pub joiner: &'static str,
    /// Fixed class for the unit inside a tens compound; `None` propagates the context class.
    pub unit_class: Option<GrammaticalClass>,
}

/// A multiplier word inside a chunk (hundred, or thousand for long chunks).
#[derive(Debug)]
pub struct PlaceDef {
    /// Place value is `10^power`.
    pub power: u32,
    pub word: &'static str,
    /// Irregular full forms by multiplier digit ("двести"); empty when regular.
    pub forms: &'static [&'static str],
    /// Irregular forms for one class, checked before `forms` ("doscientas").
    pub class_forms: &'static [(GrammaticalClass, &'static [&'static str])],
    /// Form used for exactly one of this place with nothing after it ("cien").
    pub solo: Option<&'static str>,
    /// Drop the multiplier "one" ("백" rather than "일백").
    pub elide_one: bool,
    /// Class the multiplier agrees with; `None` renders the citation form.
    pub multiplier_class: Option<GrammaticalClass>,
    /// A marked class of the chunk overrides `multiplier_class` ("doscientas mil").
    pub multiplier_agrees: bool,
    /// Between multiplier and place word.
    pub joiner: &'static str,
    /// Between this place and the rest of the chunk.
    pub rest_joiner: &'static str,
    /// Conjunction placed before a non-zero rest ("hundred and five").
    pub rest_conjunction: Option<&'static str>,
}

#[derive(Debug)]
pub struct CountedNounRules {
    /// Citation forms of 0-9.
    pub units: &'static [&'static str],
    /// Counted nouns inside a chunk, highest power first.
    pub nouns: &'static [CountedNoun],
    /// Joiner between the parts of a chunk.
    pub joiner: Joiner,
}

#[derive(Debug)]
pub struct CountedNoun {
    pub power: u32,
    pub noun: ScaleDef,
}

/// Inflected forms of a counted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordForms {
    pub one: &'static str,
    pub few: Option<&'static str>,
    pub many: Option<&'static str>,
    pub other: Option<&'static str>,
}

impl WordForms {
    /// Same word for every count.
    pub const fn invariant(word: &'static str) -> Self {
        Self {
            one: word,
            few: None,
            many: None,
            other: Some(word),
        }
    }

    /// Singular and plural.
    pub const fn plural(one: &'static str, other: &'static str) -> Self {
        Self {
            one,
            few: None,
            many: None,
            other: Some(other),
        }
    }

    /// Slavic one / few / many.
    pub const fn slavic(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self {
            one,
            few: Some(few),
            many: Some(many),
            other: Some(many),
        }
    }

    /// Form for a count class, falling back to the singular.
    pub fn get(&self, class: CountClass) -> &'static str {
        pick_form(class, self.one, self.few, self.many, self.other)
    }
}

/// One scale word ("thousand", "миллион", "만").
#[derive(Debug)]
pub struct ScaleDef {
    pub forms: WordForms,
    /// Class the count of this scale agrees with.
    pub class: GrammaticalClass,
    /// Count one is dropped ("mil", "만", "ikhulu").
    pub elide_one: bool,
    /// Between numeral and scale word.
    pub joiner: &'static str,
}

impl ScaleDef {
    pub const fn new(
        forms: WordForms,
        class: GrammaticalClass,
        elide_one: bool,
        joiner: &'static str,
    ) -> Self {
        Self {
            forms,
            class,
            elide_one,
            joiner,
        }
    }
}

/// Count to plural-class mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRule {
    /// 1 → One, everything else → Other.
    Simple,
    /// Last-two-digit rule: 1 (not 11) → One, 2-4 (not 12-14) → Few, else Many.
    Slavic,
    /// No plural distinction.
    Invariant,
}

#[derive(Debug)]
pub struct AgreementForm {
    pub value: u32,
    pub class: GrammaticalClass,
    pub form: &'static str,
}

/// Concord prefixes for one noun class.
#[derive(Debug)]
pub struct Concord {
    pub class: GrammaticalClass,
    /// Adjectival prefix fused onto a numeral stem ("ama" + "bili").
    pub prefix: &'static str,
    /// Relative prefix fused onto a full number word for other counts.
    pub relative: Option<&'static str>,
    /// Numeral stems taking `prefix`.
    pub stems: &'static [(u32, &'static str)],
}

/// How two chunks are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    /// Literal separator.
    Plain(&'static str),
    /// Conjunction word surrounded by spaces.
    Word(&'static str),
    /// Conjunction fused onto the following word.
    Fused(&'static str),
}

/// Predicate over a join between the previous and the next non-empty chunk.
#[derive(Debug)]
pub enum JoinPredicate {
    Always,
    /// The next chunk is the last non-zero chunk.
    NextIsLast,
    NextScale(usize),
    NextBelow(u32),
    PrevScale(usize),
    AllOf(&'static [JoinPredicate]),
}

#[derive(Debug)]
pub struct ConjunctionRule {
    pub when: JoinPredicate,
    pub joiner: Joiner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Conjunction attached to a word.
    Conjunction,
    /// Concord prefix attached to a numeral.
    Concord,
    /// Compounding inside a number word.
    Compound,
}

/// `left` suffix and `right` prefix replaced by `fused`.
#[derive(Debug)]
pub struct FusionRule {
    pub kind: JoinKind,
    pub left: &'static str,
    pub right: &'static str,
    pub fused: &'static str,
}

#[derive(Debug)]
pub struct VowelPair {
    pub left: char,
    pub right: char,
    pub fused: &'static str,
}

/// Fixed words outside the numeral system proper.
#[derive(Debug)]
pub struct ProfileWords {
    pub negative: &'static str,
    pub not_a_number: &'static str,
    pub infinity: &'static str,
    pub decimal_point: &'static str,
    pub decimal_comma: &'static str,
    pub default_separator: DecimalSeparator,
    pub era_before: &'static str,
    pub era_after: &'static str,
    /// Era word precedes the year.
    pub era_first: bool,
}

#[derive(Debug)]
pub enum YearStyle {
    Cardinal,
    /// Read years by centuries ("nineteen ninety-nine").
    Centuries(CenturyRule),
}

#[derive(Debug)]
pub struct CenturyRule {
    pub min_century: u32,
    pub max_century: u32,
    pub hundred: &'static str,
    /// Keep the hundred word when the year has a remainder ("neunzehnhundertfünf").
    pub always_hundred: bool,
    /// Word for a zero tens digit ("nineteen oh-five").
    pub oh: Option<&'static str>,
    pub joiner: &'static str,
}

/// Default currency of a profile.
#[derive(Debug)]
pub struct CurrencyDefaults {
    pub main: WordForms,
    pub main_class: GrammaticalClass,
    pub sub: Option<WordForms>,
    pub sub_class: GrammaticalClass,
    pub separator: &'static str,
    /// A count of one is carried by the singular noun alone.
    pub elide_one: bool,
}

impl CurrencyDefaults {
    /// Convert to the option-level currency record.
    pub fn to_info(&self) -> CurrencyInfo {
        let few = |forms: &WordForms| forms.few.map(str::to_string);
        let plural = |forms: &WordForms| forms.other.or(forms.many).map(str::to_string);
        CurrencyInfo {
            main_unit_singular: self.main.one.to_string(),
            main_unit_plural: plural(&self.main),
            main_unit_few: few(&self.main),
            main_unit_class: Some(self.main_class),
            sub_unit_singular: self.sub.as_ref().map(|s| s.one.to_string()),
            sub_unit_plural: self.sub.as_ref().and_then(plural),
            sub_unit_few: self.sub.as_ref().and_then(few),
            sub_unit_class: Some(self.sub_class),
            separator: Some(self.separator.to_string()),
        }
    }
}

impl GrammarProfile {
    /// Largest scale index with a scale word.
    pub fn max_scale_index(&self) -> usize {
        self.scales.len()
    }

    /// Scale definition for a chunk index (index 0 has none).
    pub fn scale(&self, index: usize) -> Option<&ScaleDef> {
        index.checked_sub(1).and_then(|i| self.scales.get(i))
    }

    /// Citation form of a digit 0-9.
    pub fn digit_word(&self, digit: u32) -> &'static str {
        if digit == 0 {
            return self.zero;
        }
        let units = match &self.chunk {
            ChunkStyle::Positional(rules) => rules.units,
            ChunkStyle::CountedNouns(rules) => rules.units,
        };
        units.get(digit as usize).copied().unwrap_or(self.zero)
    }

    /// Decimal mark word for a separator style.
    pub fn decimal_word(&self, separator: DecimalSeparator) -> &'static str {
        match separator {
            DecimalSeparator::Comma => self.words.decimal_comma,
            DecimalSeparator::Point => self.words.decimal_point,
        }
    }

    /// Check the tables are internally consistent.
    pub fn validate(&self) -> NumWordsResult<()> {
        let err = |msg: String| Err(NumWordsError::config(format!("{}: {msg}", self.lang)));

        let Some(digits) = chunk_digits(self.chunk_base) else {
            return err(format!("chunk base {} is not a power of ten", self.chunk_base));
        };

        match &self.chunk {
            ChunkStyle::Positional(rules) => {
                if rules.units.len() < 10 {
                    return err("positional profile needs at least ten unit words".into());
                }
                let mut previous = digits;
                for place in rules.places {
                    if place.power >= previous || place.power == 0 {
                        return err(format!("place power {} out of order", place.power));
                    }
                    let irregular = std::iter::once(place.forms)
                        .chain(place.class_forms.iter().map(|(_, forms)| *forms));
                    for forms in irregular {
                        if !forms.is_empty() && forms.len() != 10 {
                            return err(format!("place {} needs ten irregular forms", place.word));
                        }
                    }
                    previous = place.power;
                }
                let below = 10usize.pow(previous);
                if rules.units.len() < below && (rules.tens.len() != 10 || below > 100) {
                    return err(format!("values below {below} cannot be rendered"));
                }
            }
            ChunkStyle::CountedNouns(rules) => {
                if rules.units.len() < 10 {
                    return err("counted-noun profile needs ten unit words".into());
                }
                let mut previous = digits;
                for noun in rules.nouns {
                    if noun.power >= previous || noun.power == 0 {
                        return err(format!("noun power {} out of order", noun.power));
                    }
                    previous = noun.power;
                }
                if previous != 1 {
                    return err("counted-noun profile needs a tens noun".into());
                }
            }
        }

        for (index, scale) in self.scales.iter().enumerate() {
            if scale.forms.one.is_empty() {
                return err(format!("scale {} has no singular", index + 1));
            }
        }

        for concord in self.concords {
            if concord.prefix.is_empty() && concord.relative.is_none() {
                return err(format!("concord for {} is empty", concord.class));
            }
        }

        Ok(())
    }
}

/// Number of decimal digits in a chunk, if the base is a power of ten.
fn chunk_digits(base: u32) -> Option<u32> {
    let mut digits = 0;
    let mut rest = base;
    while rest > 1 {
        if rest % 10 != 0 {
            return None;
        }
        rest /= 10;
        digits += 1;
    }
    (digits > 0).then_some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_digits() {
        assert_eq!(chunk_digits(1000), Some(3));
        assert_eq!(chunk_digits(10_000), Some(4));
        assert_eq!(chunk_digits(1_000_000), Some(6));
        assert_eq!(chunk_digits(1), None);
        assert_eq!(chunk_digits(1024), None);
    }

    #[test]
    fn test_word_forms_fallback() {
        let forms = WordForms::plural("dollar", "dollars");
        assert_eq!(forms.get(CountClass::One), "dollar");
        assert_eq!(forms.get(CountClass::Other), "dollars");
        assert_eq!(forms.get(CountClass::Many), "dollars");
        assert_eq!(forms.get(CountClass::Few), "dollars");

        let forms = WordForms::slavic("рубль", "рубля", "рублей");
        assert_eq!(forms.get(CountClass::Few), "рубля");
        assert_eq!(forms.get(CountClass::Many), "рублей");
    }

    #[test]
    fn test_currency_defaults_to_info() {
        let defaults = CurrencyDefaults {
            main: WordForms::slavic("рубль", "рубля", "рублей"),
            main_class: GrammaticalClass::Masculine,
            sub: None,
            sub_class: GrammaticalClass::Feminine,
            separator: "",
            elide_one: false,
        };
        let info = defaults.to_info();
        assert_eq!(info.main_unit_singular, "рубль");
        assert_eq!(info.main_unit_few.as_deref(), Some("рубля"));
        assert_eq!(info.main_unit_plural.as_deref(), Some("рублей"));
        assert!(info.sub_unit_singular.is_none());
        assert!(info.sub_unit_plural.is_none());
    }
}
