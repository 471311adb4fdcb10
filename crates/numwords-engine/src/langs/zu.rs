//! Zulu. Tens, hundreds and scales are nouns that precede their count, and
//! counts take the concord of the noun class they modify.

use numwords_core::{DecimalSeparator, GrammaticalClass, Lang};

use crate::profile::*;

const CLASS_6: GrammaticalClass = GrammaticalClass::NounClass(6);
const CLASS_8: GrammaticalClass = GrammaticalClass::NounClass(8);
const CLASS_10: GrammaticalClass = GrammaticalClass::NounClass(10);

const UNITS: &[&str] = &[
    "iqanda",
    "kunye",
    "kubili",
    "kuthathu",
    "kune",
    "kuhlanu",
    "isithupha",
    "isikhombisa",
    "isishiyagalombili",
    "isishiyagalolunye",
];

const STEMS: &[(u32, &str)] = &[(2, "bili"), (3, "thathu"), (4, "ne"), (5, "hlanu")];

const fn noun(one: &'static str, other: &'static str, class: GrammaticalClass) -> ScaleDef {
    ScaleDef::new(WordForms::plural(one, other), class, true, " ")
}

const fn conjunction(right: &'static str, fused: &'static str) -> FusionRule {
    FusionRule {
        kind: JoinKind::Conjunction,
        left: "na",
        right,
        fused,
    }
}

const fn concord(left: &'static str, right: &'static str, fused: &'static str) -> FusionRule {
    FusionRule {
        kind: JoinKind::Concord,
        left,
        right,
        fused,
    }
}

const fn vowels(left: char, right: char, fused: &'static str) -> VowelPair {
    VowelPair { left, right, fused }
}

pub static ZU: GrammarProfile = GrammarProfile {
    lang: Lang::Zu,
    name: "isiZulu",
    zero: "iqanda",
    chunk_base: 1000,
    chunk: ChunkStyle::CountedNouns(CountedNounRules {
        units: UNITS,
        nouns: &[
            CountedNoun {
                power: 2,
                noun: noun("ikhulu", "amakhulu", CLASS_6),
            },
            CountedNoun {
                power: 1,
                noun: noun("ishumi", "amashumi", CLASS_6),
            },
        ],
        joiner: Joiner::Fused("na"),
    }),
    count_rule: CountRule::Simple,
    agreement: &[],
    concords: &[
        Concord {
            class: CLASS_6,
            prefix: "ama",
            relative: Some("a"),
            stems: STEMS,
        },
        Concord {
            class: CLASS_8,
            prefix: "ezin",
            relative: Some("ezi"),
            stems: STEMS,
        },
        Concord {
            class: CLASS_10,
            prefix: "ezin",
            relative: Some("ezi"),
            stems: STEMS,
        },
    ],
    scales: &[
        noun("inkulungwane", "izinkulungwane", CLASS_10),
        noun("isigidi", "izigidi", CLASS_8),
        noun("ibhiliyoni", "amabhiliyoni", CLASS_6),
        noun("ithriliyoni", "amathriliyoni", CLASS_6),
    ],
    noun_first: true,
    chunk_joiner: " ",
    conjunctions: &[ConjunctionRule {
        when: JoinPredicate::Always,
        joiner: Joiner::Fused("na"),
    }],
    fusions: &[
        conjunction("kunye", "nanye"),
        conjunction("kubili", "nambili"),
        conjunction("kuthathu", "nantathu"),
        conjunction("kune", "nane"),
        conjunction("kuhlanu", "nanhlanu"),
        concord("n", "b", "mb"),
        concord("n", "th", "nt"),
        concord("n", "n", "n"),
        concord("", "i", "yi"),
        concord("", "a", "nga"),
    ],
    coalescence: &[
        vowels('a', 'a', "a"),
        vowels('a', 'i', "e"),
        vowels('a', 'e', "e"),
        vowels('a', 'o', "o"),
        vowels('a', 'u', "o"),
    ],
    words: ProfileWords {
        negative: "ukususa",
        not_a_number: "akuyona inombolo",
        infinity: "okungapheli",
        decimal_point: "iphoyinti",
        decimal_comma: "ukhefana",
        default_separator: DecimalSeparator::Point,
        era_before: "BC",
        era_after: "AD",
        era_first: false,
    },
    year: YearStyle::Cardinal,
    currency: CurrencyDefaults {
        main: WordForms::plural("irandi", "amarandi"),
        main_class: CLASS_6,
        sub: Some(WordForms::plural("isenti", "amasenti")),
        sub_class: CLASS_6,
        separator: "na",
        elide_one: true,
    },
};
