//! Spanish. Long scale: chunks of a million, "mil" lives inside the chunk.

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const UNITS: &[&str] = &[
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
    "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho",
    "diecinueve", "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro",
    "veinticinco", "veintiséis", "veintisiete", "veintiocho", "veintinueve",
];

const TENS: &[&str] = &[
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: &[&str] = &[
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos", "seiscientos",
    "setecientos", "ochocientos", "novecientos",
];

const HUNDREDS_FEMININE: &[&str] = &[
    "", "ciento", "doscientas", "trescientas", "cuatrocientas", "quinientas", "seiscientas",
    "setecientas", "ochocientas", "novecientas",
];

const fn scale(one: &'static str, other: &'static str) -> ScaleDef {
    ScaleDef::new(WordForms::plural(one, other), GrammaticalClass::Masculine, false, " ")
}

pub static ES: GrammarProfile = GrammarProfile {
    lang: Lang::Es,
    name: "Español",
    zero: "cero",
    chunk_base: 1_000_000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: TENS,
        tens_rule: TensRule {
            order: TensOrder::TensFirst,
            joiner: " y ",
            unit_class: None,
        },
        places: &[
            PlaceDef {
                power: 3,
                word: "mil",
                forms: &[],
                class_forms: &[],
                solo: None,
                elide_one: true,
                multiplier_class: Some(GrammaticalClass::Masculine),
                multiplier_agrees: true,
                joiner: " ",
                rest_joiner: " ",
                rest_conjunction: None,
            },
            PlaceDef {
                power: 2,
                word: "cien",
                forms: HUNDREDS,
                class_forms: &[(GrammaticalClass::Feminine, HUNDREDS_FEMININE)],
                solo: Some("cien"),
                elide_one: false,
                multiplier_class: None,
                multiplier_agrees: false,
                joiner: " ",
                rest_joiner: " ",
                rest_conjunction: None,
            },
        ],
    }),
    count_rule: CountRule::Simple,
    agreement: &[
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Masculine,
            form: "un",
        },
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Feminine,
            form: "una",
        },
        AgreementForm {
            value: 21,
            class: GrammaticalClass::Masculine,
            form: "veintiún",
        },
        AgreementForm {
            value: 21,
            class: GrammaticalClass::Feminine,
            form: "veintiuna",
        },
    ],
    concords: &[],
    scales: &[
        scale("millón", "millones"),
        scale("billón", "billones"),
        scale("trillón", "trillones"),
        scale("cuatrillón", "cuatrillones"),
        scale("quintillón", "quintillones"),
        scale("sextillón", "sextillones"),
    ],
    noun_first: false,
    chunk_joiner: " ",
    conjunctions: &[],
    fusions: &[],
    coalescence: &[],
    words: ProfileWords {
        negative: "menos",
        not_a_number: "no es un número",
        infinity: "infinito",
        decimal_point: "punto",
        decimal_comma: "coma",
        default_separator: DecimalSeparator::Comma,
        era_before: "a. C.",
        era_after: "d. C.",
        era_first: false,
    },
    year: YearStyle::Cardinal,
    currency: CurrencyDefaults {
        main: WordForms::plural("euro", "euros"),
        main_class: GrammaticalClass::Masculine,
        sub: Some(WordForms::plural("céntimo", "céntimos")),
        sub_class: GrammaticalClass::Masculine,
        separator: "con",
        elide_one: false,
    },
};
