//! Russian. Scale nouns take one/few/many forms, and "тысяча" is feminine.

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const UNITS: &[&str] = &[
    "ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
    "десять", "одиннадцать", "двенадцать", "тринадцать", "четырнадцать", "пятнадцать",
    "шестнадцать", "семнадцать", "восемнадцать", "девятнадцать",
];

const TENS: &[&str] = &[
    "", "десять", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят",
    "восемьдесят", "девяносто",
];

const HUNDREDS: &[&str] = &[
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот",
    "девятьсот",
];

const fn masculine(one: &'static str, few: &'static str, many: &'static str) -> ScaleDef {
    ScaleDef::new(WordForms::slavic(one, few, many), GrammaticalClass::Masculine, false, " ")
}

pub static RU: GrammarProfile = GrammarProfile {
    lang: Lang::Ru,
    name: "Русский",
    zero: "ноль",
    chunk_base: 1000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: TENS,
        tens_rule: TensRule {
            order: TensOrder::TensFirst,
            joiner: " ",
            unit_class: None,
        },
        places: &[PlaceDef {
            power: 2,
            word: "сто",
            forms: HUNDREDS,
            class_forms: &[],
            solo: None,
            elide_one: false,
            multiplier_class: None,
            multiplier_agrees: false,
            joiner: " ",
            rest_joiner: " ",
            rest_conjunction: None,
        }],
    }),
    count_rule: CountRule::Slavic,
    agreement: &[
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Feminine,
            form: "одна",
        },
        AgreementForm {
            value: 1,
            class: GrammaticalClass::Neuter,
            form: "одно",
        },
        AgreementForm {
            value: 2,
            class: GrammaticalClass::Feminine,
            form: "две",
        },
    ],
    concords: &[],
    scales: &[
        ScaleDef::new(
            WordForms::slavic("тысяча", "тысячи", "тысяч"),
            GrammaticalClass::Feminine,
            false,
            " ",
        ),
        masculine("миллион", "миллиона", "миллионов"),
        masculine("миллиард", "миллиарда", "миллиардов"),
        masculine("триллион", "триллиона", "триллионов"),
        masculine("квадриллион", "квадриллиона", "квадриллионов"),
        masculine("квинтиллион", "квинтиллиона", "квинтиллионов"),
        masculine("секстиллион", "секстиллиона", "секстиллионов"),
        masculine("септиллион", "септиллиона", "септиллионов"),
    ],
    noun_first: false,
    chunk_joiner: " ",
    conjunctions: &[],
    fusions: &[],
    coalescence: &[],
    words: ProfileWords {
        negative: "минус",
        not_a_number: "не число",
        infinity: "бесконечность",
        decimal_point: "точка",
        decimal_comma: "запятая",
        default_separator: DecimalSeparator::Comma,
        era_before: "до н. э.",
        era_after: "н. э.",
        era_first: false,
    },
    year: YearStyle::Cardinal,
    currency: CurrencyDefaults {
        main: WordForms::slavic("рубль", "рубля", "рублей"),
        main_class: GrammaticalClass::Masculine,
        sub: Some(WordForms::slavic("копейка", "копейки", "копеек")),
        sub_class: GrammaticalClass::Feminine,
        separator: "",
        elide_one: false,
    },
};
