//! Sino-Korean numerals, grouped by myriads (만, 억, 조, ...).

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const UNITS: &[&str] = &["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

const fn place(power: u32, word: &'static str) -> PlaceDef {
    PlaceDef {
        power,
        word,
        forms: &[],
        class_forms: &[],
        solo: None,
        elide_one: true,
        multiplier_class: None,
        multiplier_agrees: false,
        joiner: "",
        rest_joiner: "",
        rest_conjunction: None,
    }
}

const fn myriad(word: &'static str) -> ScaleDef {
    ScaleDef::new(WordForms::invariant(word), GrammaticalClass::Unmarked, false, "")
}

pub static KO: GrammarProfile = GrammarProfile {
    lang: Lang::Ko,
    name: "한국어",
    zero: "영",
    chunk_base: 10_000,
    chunk: ChunkStyle::Positional(PositionalRules {
        units: UNITS,
        tens: &[],
        tens_rule: TensRule {
            order: TensOrder::TensFirst,
            joiner: "",
            unit_class: None,
        },
        places: &[place(3, "천"), place(2, "백"), place(1, "십")],
    }),
    count_rule: CountRule::Invariant,
    agreement: &[],
    concords: &[],
    scales: &[
        // 만 alone, but 일억, 일조
        ScaleDef::new(WordForms::invariant("만"), GrammaticalClass::Unmarked, true, ""),
        myriad("억"),
        myriad("조"),
        myriad("경"),
        myriad("해"),
        myriad("자"),
        myriad("양"),
        myriad("구"),
        myriad("간"),
    ],
    noun_first: false,
    chunk_joiner: " ",
    conjunctions: &[],
    fusions: &[],
    coalescence: &[],
    words: ProfileWords {
        negative: "마이너스",
        not_a_number: "숫자가 아님",
        infinity: "무한대",
        decimal_point: "점",
        decimal_comma: "점",
        default_separator: DecimalSeparator::Point,
        era_before: "기원전",
        era_after: "서기",
        era_first: true,
    },
    year: YearStyle::Cardinal,
    currency: CurrencyDefaults {
        main: WordForms::invariant("원"),
        main_class: GrammaticalClass::Unmarked,
        sub: None,
        sub_class: GrammaticalClass::Unmarked,
        separator: "",
        elide_one: false,
    },
};
