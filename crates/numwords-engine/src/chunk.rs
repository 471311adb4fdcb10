//! Rendering of a single chunk (`1..chunk_base`) into words.

use numwords_core::GrammaticalClass;
use tracing::trace;

use crate::agreement::AgreementResolver;
use crate::fusion::MorphologyFuser;
use crate::profile::{
    ChunkStyle, CountedNounRules, GrammarProfile, JoinKind, PlaceDef, PositionalRules, ScaleDef,
    TensOrder,
};
use crate::scale::ScaleSelector;

/// Renders chunk values and counted scale phrases for one profile.
#[derive(Debug, Clone, Copy)]
pub struct ChunkRenderer {
    profile: &'static GrammarProfile,
    agreement: AgreementResolver,
    fuser: MorphologyFuser,
    selector: ScaleSelector,
}

impl ChunkRenderer {
    pub fn new(profile: &'static GrammarProfile) -> Self {
        Self {
            profile,
            agreement: AgreementResolver::new(profile),
            fuser: MorphologyFuser::new(profile.fusions, profile.coalescence),
            selector: ScaleSelector::new(profile.count_rule),
        }
    }

    pub fn agreement(&self) -> &AgreementResolver {
        &self.agreement
    }

    pub fn fuser(&self) -> &MorphologyFuser {
        &self.fuser
    }

    /// Words for `value` agreeing with `class`. Zero renders as the empty string.
    pub fn render(&self, value: u32, class: GrammaticalClass) -> String {
        if value == 0 {
            return String::new();
        }
        match &self.profile.chunk {
            ChunkStyle::Positional(rules) => self.positional(rules, rules.places, value, class),
            ChunkStyle::CountedNouns(rules) => self.counted(rules, value, class),
        }
    }

    /// A numeral used as the count of a noun of `class`.
    ///
    /// Stored agreeing forms win, then the relative concord on the citation
    /// form, then a plain rendering in the class.
    pub fn render_count(&self, count: u32, class: GrammaticalClass) -> String {
        if let Some(form) = self.agreement.exact(count, class) {
            return form;
        }
        if let Some(relative) = self.agreement.relative_concord(class) {
            let plain = self.render(count, GrammaticalClass::Unmarked);
            return self.fuser.fuse(relative, &plain, JoinKind::Concord, "");
        }
        self.render(count, class)
    }

    /// Count plus counted noun ("две тысячи", "izinkulungwane ezimbili").
    pub fn noun_phrase(&self, count: u32, scale: &ScaleDef) -> String {
        let choice = self.selector.select(count, scale);
        if choice.elide_numeral {
            trace!(count, word = choice.word, "numeral elided");
            return choice.word.to_string();
        }
        let numeral = self.render_count(count, scale.class);
        if self.profile.noun_first {
            self.fuser
                .fuse(choice.word, &numeral, JoinKind::Compound, scale.joiner)
        } else {
            self.fuser
                .fuse(&numeral, choice.word, JoinKind::Compound, scale.joiner)
        }
    }

    fn positional(
        &self,
        rules: &PositionalRules,
        places: &[PlaceDef],
        value: u32,
        class: GrammaticalClass,
    ) -> String {
        if value == 0 {
            return String::new();
        }
        let Some((place, lower)) = places.split_first() else {
            return self.below_places(rules, value, class);
        };

        let unit = 10u32.pow(place.power);
        if value < unit {
            return self.positional(rules, lower, value, class);
        }

        let multiplier = value / unit;
        let rest = value % unit;
        let head = self.place_head(rules, place, lower, multiplier, rest, class);
        let tail = self.positional(rules, lower, rest, class);

        if tail.is_empty() {
            head
        } else if let Some(conjunction) = place.rest_conjunction {
            format!("{head} {conjunction} {tail}")
        } else {
            self.fuser
                .fuse(&head, &tail, JoinKind::Compound, place.rest_joiner)
        }
    }

    fn place_head(
        &self,
        rules: &PositionalRules,
        place: &PlaceDef,
        lower: &[PlaceDef],
        multiplier: u32,
        rest: u32,
        class: GrammaticalClass,
    ) -> String {
        if multiplier == 1 && rest == 0 {
            if let Some(solo) = place.solo {
                return solo.to_string();
            }
        }
        let forms = place
            .class_forms
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(place.forms, |(_, forms)| *forms);
        if let Some(form) = forms.get(multiplier as usize) {
            return form.to_string();
        }
        if multiplier == 1 && place.elide_one {
            return place.word.to_string();
        }
        let multiplier_class = match place.multiplier_class {
            Some(_) if place.multiplier_agrees && class != GrammaticalClass::Unmarked => class,
            fixed => fixed.unwrap_or_default(),
        };
        let numeral = self.positional(rules, lower, multiplier, multiplier_class);
        self.fuser
            .fuse(&numeral, place.word, JoinKind::Compound, place.joiner)
    }

    fn below_places(&self, rules: &PositionalRules, value: u32, class: GrammaticalClass) -> String {
        if let Some(form) = self.agreement.exact(value, class) {
            return form;
        }
        if let Some(word) = rules.units.get(value as usize) {
            return word.to_string();
        }

        let tens = rules
            .tens
            .get((value / 10) as usize)
            .copied()
            .unwrap_or_default();
        let units = value % 10;
        if units == 0 {
            return tens.to_string();
        }
        let unit = self
            .agreement
            .resolve(units, rules.tens_rule.unit_class.unwrap_or(class));
        let joiner = rules.tens_rule.joiner;
        match rules.tens_rule.order {
            TensOrder::TensFirst => self.fuser.fuse(tens, &unit, JoinKind::Compound, joiner),
            TensOrder::UnitsFirst => self.fuser.fuse(&unit, tens, JoinKind::Compound, joiner),
        }
    }

    fn counted(&self, rules: &CountedNounRules, value: u32, class: GrammaticalClass) -> String {
        let mut remaining = value;
        let mut parts = Vec::with_capacity(rules.nouns.len() + 1);

        for noun in rules.nouns {
            let place = 10u32.pow(noun.power);
            let count = remaining / place;
            remaining %= place;
            if count > 0 {
                parts.push(self.noun_phrase(count, &noun.noun));
            }
        }
        if remaining > 0 {
            parts.push(self.agreement.resolve(remaining, class));
        }

        parts
            .iter()
            .fold(String::new(), |acc, part| self.fuser.join(&acc, part, rules.joiner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use numwords_core::Lang;

    fn renderer(lang: Lang) -> ChunkRenderer {
        ChunkRenderer::new(registry::profile(lang).unwrap())
    }

    fn words(lang: Lang, value: u32) -> String {
        renderer(lang).render(value, GrammaticalClass::Unmarked)
    }

    #[test]
    fn test_english_chunks() {
        assert_eq!(words(Lang::En, 7), "seven");
        assert_eq!(words(Lang::En, 13), "thirteen");
        assert_eq!(words(Lang::En, 40), "forty");
        assert_eq!(words(Lang::En, 45), "forty-five");
        assert_eq!(words(Lang::En, 100), "one hundred");
        assert_eq!(words(Lang::En, 345), "three hundred forty-five");
        assert_eq!(words(Lang::En, 999), "nine hundred ninety-nine");
        assert_eq!(words(Lang::En, 0), "");
    }

    #[test]
    fn test_british_hundred_and() {
        assert_eq!(words(Lang::EnGb, 101), "one hundred and one");
        assert_eq!(words(Lang::EnGb, 342), "three hundred and forty-two");
        assert_eq!(words(Lang::EnGb, 300), "three hundred");
    }

    #[test]
    fn test_russian_hundreds_and_agreement() {
        let r = renderer(Lang::Ru);
        assert_eq!(r.render(200, GrammaticalClass::Unmarked), "двести");
        assert_eq!(r.render(521, GrammaticalClass::Unmarked), "пятьсот двадцать один");
        assert_eq!(r.render(521, GrammaticalClass::Feminine), "пятьсот двадцать одна");
        assert_eq!(r.render(12, GrammaticalClass::Feminine), "двенадцать");
    }

    #[test]
    fn test_spanish_long_chunk() {
        assert_eq!(words(Lang::Es, 100), "cien");
        assert_eq!(words(Lang::Es, 101), "ciento uno");
        assert_eq!(words(Lang::Es, 1000), "mil");
        assert_eq!(words(Lang::Es, 1001), "mil uno");
        assert_eq!(words(Lang::Es, 21_000), "veintiún mil");
        assert_eq!(words(Lang::Es, 100_000), "cien mil");
        assert_eq!(words(Lang::Es, 2500), "dos mil quinientos");
        assert_eq!(words(Lang::Es, 45), "cuarenta y cinco");
    }

    #[test]
    fn test_spanish_feminine_hundreds() {
        let r = renderer(Lang::Es);
        assert_eq!(r.render(201, GrammaticalClass::Feminine), "doscientas una");
        assert_eq!(r.render(500, GrammaticalClass::Feminine), "quinientas");
        assert_eq!(r.render(100, GrammaticalClass::Feminine), "cien");
        assert_eq!(r.render(200_000, GrammaticalClass::Feminine), "doscientas mil");
        assert_eq!(r.render(1000, GrammaticalClass::Feminine), "mil");
        assert_eq!(r.render(200, GrammaticalClass::Masculine), "doscientos");
        assert_eq!(r.render(200_000, GrammaticalClass::Unmarked), "doscientos mil");
    }

    #[test]
    fn test_german_compounds() {
        assert_eq!(words(Lang::De, 1), "eins");
        assert_eq!(words(Lang::De, 21), "einundzwanzig");
        assert_eq!(words(Lang::De, 100), "einhundert");
        assert_eq!(words(Lang::De, 101), "einhunderteins");
        assert_eq!(words(Lang::De, 234), "zweihundertvierunddreißig");
    }

    #[test]
    fn test_korean_positional() {
        assert_eq!(words(Lang::Ko, 10), "십");
        assert_eq!(words(Lang::Ko, 11), "십일");
        assert_eq!(words(Lang::Ko, 1111), "천백십일");
        assert_eq!(words(Lang::Ko, 2345), "이천삼백사십오");
    }

    #[test]
    fn test_zulu_counted_nouns() {
        assert_eq!(words(Lang::Zu, 1), "kunye");
        assert_eq!(words(Lang::Zu, 10), "ishumi");
        assert_eq!(words(Lang::Zu, 11), "ishumi nanye");
        assert_eq!(words(Lang::Zu, 16), "ishumi nesithupha");
        assert_eq!(words(Lang::Zu, 20), "amashumi amabili");
        assert_eq!(words(Lang::Zu, 25), "amashumi amabili nanhlanu");
        assert_eq!(words(Lang::Zu, 60), "amashumi ayisithupha");
        assert_eq!(words(Lang::Zu, 110), "ikhulu neshumi");
        assert_eq!(words(Lang::Zu, 123), "ikhulu namashumi amabili nantathu");
    }

    #[test]
    fn test_noun_phrase_cross_class() {
        let r = renderer(Lang::Ru);
        let thousand = scale_of(Lang::Ru, 1);
        assert_eq!(r.noun_phrase(1, thousand), "одна тысяча");
        assert_eq!(r.noun_phrase(2, thousand), "две тысячи");
        assert_eq!(r.noun_phrase(5, thousand), "пять тысяч");
        assert_eq!(r.noun_phrase(21, thousand), "двадцать одна тысяча");

        let r = renderer(Lang::Zu);
        let thousand = scale_of(Lang::Zu, 1);
        assert_eq!(r.noun_phrase(1, thousand), "inkulungwane");
        assert_eq!(r.noun_phrase(2, thousand), "izinkulungwane ezimbili");
        assert_eq!(r.noun_phrase(6, thousand), "izinkulungwane eziyisithupha");
        assert_eq!(r.noun_phrase(20, thousand), "izinkulungwane ezingamashumi amabili");
    }

    fn scale_of(lang: Lang, index: usize) -> &'static ScaleDef {
        registry::profile(lang).unwrap().scale(index).unwrap()
    }
}
