//! English, American and British usage.

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const UNITS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: &[&str] = &[
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: &[ScaleDef] = &[
    scale("thousand"),
    scale("million"),
    scale("billion"),
    scale("trillion"),
    scale("quadrillion"),
    scale("quintillion"),
    scale("sextillion"),
    scale("septillion"),
    scale("octillion"),
    scale("nonillion"),
    scale("decillion"),
];

const fn scale(word: &'static str) -> ScaleDef {
    ScaleDef::new(WordForms::invariant(word), GrammaticalClass::Unmarked, false, " ")
}

const fn hundred(rest_conjunction: Option<&'static str>) -> PlaceDef {
    PlaceDef {
        power: 2,
        word: "hundred",
        forms: &[],
        class_forms: &[],
        solo: None,
        elide_one: false,
        multiplier_class: None,
        multiplier_agrees: false,
        joiner: " ",
        rest_joiner: " ",
        rest_conjunction,
    }
}

const US_PLACES: &[PlaceDef] = &[hundred(None)];
const GB_PLACES: &[PlaceDef] = &[hundred(Some("and"))];

const TENS_RULE: TensRule = TensRule {
    order: TensOrder::TensFirst,
    joiner: "-",
    unit_class: None,
};

const WORDS: ProfileWords = ProfileWords {
    negative: "minus",
    not_a_number: "not a number",
    infinity: "infinity",
    decimal_point: "point",
    decimal_comma: "comma",
    default_separator: DecimalSeparator::Point,
    era_before: "BC",
    era_after: "AD",
    era_first: false,
};

const YEAR: YearStyle = YearStyle::Centuries(CenturyRule {
    min_century: 10,
    max_century: 99,
    hundred: "hundred",
    always_hundred: false,
    oh: Some("oh"),
    joiner: " ",
});

pub static EN: GrammarProfile = GrammarProfile {
    lang: Lang::En,
    name: "English (US)",
    zero: "zero",
    chunk_base: 1000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: TENS,
        tens_rule: TENS_RULE,
        places: US_PLACES,
    }),
    count_rule: CountRule::Simple,
    agreement: &[],
    concords: &[],
    scales: SCALES,
    noun_first: false,
    chunk_joiner: " ",
    conjunctions: &[],
    fusions: &[],
    coalescence: &[],
    words: WORDS,
    year: YEAR,
    currency: CurrencyDefaults {
        main: WordForms::plural("dollar", "dollars"),
        main_class: GrammaticalClass::Unmarked,
        sub: Some(WordForms::plural("cent", "cents")),
        sub_class: GrammaticalClass::Unmarked,
        separator: "and",
        elide_one: false,
    },
};

pub static EN_GB: GrammarProfile = GrammarProfile {
    lang: Lang::EnGb,
    name: "English (UK)",
    zero: "zero",
    chunk_base: 1000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: TENS,
        tens_rule: TENS_RULE,
        places: GB_PLACES,
    }),
    count_rule: CountRule::Simple,
    agreement: &[],
    concords: &[],
    scales: SCALES,
    noun_first: false,
    chunk_joiner: " ",
    // "one thousand and five", "one million and ninety-nine"
    conjunctions: &[ConjunctionRule {
        when: JoinPredicate::AllOf(&[
            JoinPredicate::NextIsLast,
            JoinPredicate::NextScale(0),
            JoinPredicate::NextBelow(100),
        ]),
        joiner: Joiner::Word("and"),
    }],
    fusions: &[],
    coalescence: &[],
    words: WORDS,
    year: YEAR,
    currency: CurrencyDefaults {
        main: WordForms::plural("pound", "pounds"),
        main_class: GrammaticalClass::Unmarked,
        sub: Some(WordForms::plural("penny", "pence")),
        sub_class: GrammaticalClass::Unmarked,
        separator: "and",
        elide_one: false,
    },
};
