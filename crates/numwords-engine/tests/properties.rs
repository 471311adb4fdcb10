//! Cross-language properties of the conversion pipeline.

use num_bigint::BigUint;
use numwords_core::{
    ConversionOptions, GrammaticalClass, Lang, NumWordsError, NumberSpeller, NumericInput,
};
use numwords_engine::decompose::{Chunk, Decomposer};
use numwords_engine::{convert, convert_str, registry, to_words, Converter};

#[test]
fn test_every_value_below_ten_thousand_has_words() {
    for lang in Lang::ALL {
        for n in 0u32..10_000 {
            let words = to_words(n, lang).unwrap();
            assert!(!words.trim().is_empty(), "{lang}: {n} rendered empty");
            assert!(!words.contains("  "), "{lang}: {n} has a double space: {words:?}");
            assert_eq!(words, words.trim(), "{lang}: {n} has outer whitespace");
        }
    }
}

#[test]
fn test_zero_is_the_zero_word() {
    for lang in Lang::ALL {
        let profile = registry::profile(lang).unwrap();
        assert_eq!(to_words(0, lang).unwrap(), profile.zero);
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let options = ConversionOptions::default();
    for lang in Lang::ALL {
        for input in ["7", "1001", "987654321", "12.034", "-15"] {
            let first = convert_str(input, lang, &options, None).unwrap();
            let second = convert_str(input, lang, &options, None).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_chunk_boundaries() {
    let decomposer = Decomposer::for_profile(registry::profile(Lang::En).unwrap());
    let chunks = |n: u32| decomposer.decompose(&BigUint::from(n)).unwrap();

    assert_eq!(chunks(999), vec![Chunk { scale_index: 0, value: 999 }]);
    assert_eq!(chunks(1000), vec![Chunk { scale_index: 1, value: 1 }]);
    assert_eq!(
        chunks(1001),
        vec![
            Chunk { scale_index: 0, value: 1 },
            Chunk { scale_index: 1, value: 1 },
        ]
    );
}

#[test]
fn test_every_scale_threshold() {
    for lang in Lang::ALL {
        let profile = registry::profile(lang).unwrap();
        let decomposer = Decomposer::for_profile(profile);
        let base = profile.chunk_base;

        for k in 1..=profile.max_scale_index() {
            let threshold = BigUint::from(base).pow(k as u32);
            let below = &threshold - 1u32;
            let above = &threshold + 1u32;

            let full: Vec<Chunk> = (0..k)
                .map(|scale_index| Chunk {
                    scale_index,
                    value: base - 1,
                })
                .collect();
            assert_eq!(decomposer.decompose(&below).unwrap(), full, "{lang} k={k}");
            assert_eq!(
                decomposer.decompose(&threshold).unwrap(),
                vec![Chunk { scale_index: k, value: 1 }],
                "{lang} k={k}"
            );
            assert_eq!(
                decomposer.decompose(&above).unwrap(),
                vec![
                    Chunk { scale_index: 0, value: 1 },
                    Chunk { scale_index: k, value: 1 },
                ],
                "{lang} k={k}"
            );

            for n in [below, threshold, above] {
                let words = to_words(n.clone(), lang).unwrap();
                assert!(!words.is_empty(), "{lang}: {n} rendered empty");
                assert!(!words.contains("  "), "{lang}: {n} has a double space: {words:?}");
            }
        }
    }
}

#[test]
fn test_eliding_profiles_at_boundaries() {
    assert_eq!(to_words(999, Lang::Es).unwrap(), "novecientos noventa y nueve");
    assert_eq!(to_words(1000, Lang::Es).unwrap(), "mil");
    assert_eq!(to_words(1001, Lang::Es).unwrap(), "mil uno");

    assert_eq!(
        to_words(999, Lang::Zu).unwrap(),
        "amakhulu ayisishiyagalolunye namashumi ayisishiyagalolunye nesishiyagalolunye"
    );
    assert_eq!(to_words(1000, Lang::Zu).unwrap(), "inkulungwane");
    assert_eq!(to_words(1001, Lang::Zu).unwrap(), "inkulungwane nanye");

    assert_eq!(to_words(9999, Lang::Ko).unwrap(), "구천구백구십구");
    assert_eq!(to_words(10_000, Lang::Ko).unwrap(), "만");
    assert_eq!(to_words(10_001, Lang::Ko).unwrap(), "만 일");
}

#[test]
fn test_overflow_never_truncates() {
    let options = ConversionOptions::default();
    for lang in Lang::ALL {
        let profile = registry::profile(lang).unwrap();
        let base = BigUint::from(profile.chunk_base);
        let too_big = base.pow(profile.max_scale_index() as u32 + 1);
        let largest = &too_big - 1u32;

        assert!(convert(largest, lang, &options, None).is_ok(), "{lang}");
        match convert(too_big.clone(), lang, &options, None) {
            Err(NumWordsError::ScaleOverflow {
                lang: failed,
                scale_index,
                max_scale_index,
            }) => {
                assert_eq!(failed, lang);
                assert_eq!(scale_index, max_scale_index + 1);
            }
            other => panic!("{lang}: expected overflow, got {other:?}"),
        }
        assert_eq!(convert(too_big, lang, &options, Some("#")).unwrap(), "#");
    }
}

#[test]
fn test_gendered_one_and_two() {
    let feminine = ConversionOptions::new().with_class(GrammaticalClass::Feminine);
    let masculine = ConversionOptions::new().with_class(GrammaticalClass::Masculine);

    assert_eq!(convert(1, Lang::Ru, &feminine, None).unwrap(), "одна");
    assert_eq!(convert(2, Lang::Ru, &feminine, None).unwrap(), "две");
    assert_eq!(convert(2, Lang::Ru, &masculine, None).unwrap(), "два");
    assert_eq!(convert(1, Lang::Es, &feminine, None).unwrap(), "una");
    assert_eq!(convert(1, Lang::Es, &masculine, None).unwrap(), "un");
    assert_eq!(convert(1, Lang::De, &feminine, None).unwrap(), "eine");

    assert_eq!(convert(201, Lang::Es, &feminine, None).unwrap(), "doscientas una");
    assert_eq!(convert(201, Lang::Es, &masculine, None).unwrap(), "doscientos un");

    let class10 = ConversionOptions::new().with_class(GrammaticalClass::NounClass(10));
    assert_eq!(convert(2, Lang::Zu, &class10, None).unwrap(), "ezimbili");
}

#[test]
fn test_negative_prefix_single_space() {
    let options = ConversionOptions::new().with_negative_prefix("negative ");
    assert_eq!(convert(-42, Lang::En, &options, None).unwrap(), "negative forty-two");
    assert_eq!(
        convert(-42, Lang::Ru, &ConversionOptions::default(), None).unwrap(),
        "минус сорок два"
    );
    assert_eq!(
        convert(-0.0f64, Lang::En, &ConversionOptions::default(), None).unwrap(),
        "zero"
    );
}

#[test]
fn test_speller_trait_objects() {
    let spellers: Vec<Box<dyn NumberSpeller>> = Lang::ALL
        .into_iter()
        .map(|lang| Box::new(Converter::new(lang).unwrap()) as Box<dyn NumberSpeller>)
        .collect();

    let value = NumericInput::from(12u32);
    let options = ConversionOptions::default();
    for speller in &spellers {
        let words = speller.spell(&value, &options, None).unwrap();
        assert!(!words.is_empty(), "{}", speller.lang());
    }
}

#[test]
fn test_profiles_shared_across_threads() {
    let handles: Vec<_> = Lang::ALL
        .into_iter()
        .map(|lang| std::thread::spawn(move || to_words(123_456_789u32, lang).unwrap()))
        .collect();
    for (lang, handle) in Lang::ALL.into_iter().zip(handles) {
        assert_eq!(handle.join().unwrap(), to_words(123_456_789u32, lang).unwrap());
    }
}
