//! German. Compounds are written solid ("zweihundertdreiundvierzig"); scales from
//! a million up are feminine nouns.

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const UNITS: &[&str] = &[
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const TENS: &[&str] = &[
    "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

const fn feminine(one: &'static str, other: &'static str) -> ScaleDef {
    ScaleDef::new(WordForms::plural(one, other), GrammaticalClass::Feminine, false, " ")
}

pub static DE: GrammarProfile = GrammarProfile {
    lang: Lang::De,
    name: "Deutsch",
    zero: "null",
    chunk_base: 1000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: TENS,
        tens_rule: TensRule {
            order: TensOrder::UnitsFirst,
            joiner: "und",
            unit_class: Some(GrammaticalClass::Neuter),
        },
        places: &[PlaceDef {
            power: 2,
            word: "hundert",
            forms: &[],
            class_forms: &[],
            solo: None,
            elide_one: false,
            multiplier_class: Some(GrammaticalClass::Neuter),
            multiplier_agrees: false,
            joiner: "",
            rest_joiner: "",
            rest_conjunction: None,
        }],
    }),
    count_rule: CountRule::Simple,
    agreement: &[
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Masculine,
            form: "ein",
        },
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Neuter,
            form: "ein",
        },
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Feminine,
            form: "eine",
        },
    ],
    concords: &[],
    scales: &[
        ScaleDef::new(WordForms::invariant("tausend"), GrammaticalClass::Neuter, false, ""),
        feminine("Million", "Millionen"),
        feminine("Milliarde", "Milliarden"),
        feminine("Billion", "Billionen"),
        feminine("Billiarde", "Billiarden"),
        feminine("Trillion", "Trillionen"),
        feminine("Trilliarde", "Trilliarden"),
        feminine("Quadrillion", "Quadrillionen"),
        feminine("Quadrilliarde", "Quadrilliarden"),
    ],
    noun_first: false,
    chunk_joiner: " ",
    // "zweitausendvierundzwanzig" is one word
    conjunctions: &[ConjunctionRule {
        when: JoinPredicate::PrevScale(1),
        joiner: Joiner::Plain(""),
    }],
    fusions: &[],
    coalescence: &[],
    words: ProfileWords {
        negative: "minus",
        not_a_number: "keine Zahl",
        infinity: "unendlich",
        decimal_point: "Punkt",
        decimal_comma: "Komma",
        default_separator: DecimalSeparator::Comma,
        era_before: "v. Chr.",
        era_after: "n. Chr.",
        era_first: false,
    },
    year: YearStyle::Centuries(CenturyRule {
        min_century: 11,
        max_century: 19,
        hundred: "hundert",
        always_hundred: true,
        oh: None,
        joiner: "",
    }),
    currency: CurrencyDefaults {
        main: WordForms::invariant("Euro"),
        main_class: GrammaticalClass::Masculine,
        sub: Some(WordForms::invariant("Cent")),
        sub_class: GrammaticalClass::Masculine,
        separator: "und",
        elide_one: false,
    },
};
