//! Grammatical agreement of numerals.

use numwords_core::GrammaticalClass;

use crate::fusion::MorphologyFuser;
use crate::profile::{GrammarProfile, JoinKind};

/// Raw agreement data for a numeral before fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    /// A stored form such as "одна" or "veintiún".
    Word(&'static str),
    /// A concord prefix that still has to be fused onto a stem.
    Concord {
        prefix: &'static str,
        stem: &'static str,
    },
}

/// Resolves the form of a numeral that agrees with a class.
#[derive(Debug, Clone, Copy)]
pub struct AgreementResolver {
    profile: &'static GrammarProfile,
    fuser: MorphologyFuser,
}

impl AgreementResolver {
    pub fn new(profile: &'static GrammarProfile) -> Self {
        Self {
            profile,
            fuser: MorphologyFuser::new(profile.fusions, profile.coalescence),
        }
    }

    /// Class-specific data for `value`, if the profile has any.
    pub fn numeral(&self, value: u32, class: GrammaticalClass) -> Option<Numeral> {
        if class == GrammaticalClass::Unmarked {
            return None;
        }
        if let Some(form) = self
            .profile
            .agreement
            .iter()
            .find(|a| a.value == value && a.class == class)
        {
            return Some(Numeral::Word(form.form));
        }
        let concord = self.profile.concords.iter().find(|c| c.class == class)?;
        let (_, stem) = concord.stems.iter().find(|(v, _)| *v == value)?;
        Some(Numeral::Concord {
            prefix: concord.prefix,
            stem: *stem,
        })
    }

    /// Agreeing form of `value`, or `None` when the citation form applies.
    pub fn exact(&self, value: u32, class: GrammaticalClass) -> Option<String> {
        match self.numeral(value, class)? {
            Numeral::Word(form) => Some(form.to_string()),
            Numeral::Concord { prefix, stem } => {
                Some(self.fuser.fuse(prefix, stem, JoinKind::Concord, ""))
            }
        }
    }

    /// Agreeing form of a single digit, falling back to the citation form.
    pub fn resolve(&self, value: u32, class: GrammaticalClass) -> String {
        self.exact(value, class)
            .unwrap_or_else(|| self.profile.digit_word(value).to_string())
    }

    /// Relative concord prefix for counts without a dedicated stem.
    pub fn relative_concord(&self, class: GrammaticalClass) -> Option<&'static str> {
        self.profile
            .concords
            .iter()
            .find(|c| c.class == class)
            .and_then(|c| c.relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use numwords_core::Lang;

    fn resolver(lang: Lang) -> AgreementResolver {
        AgreementResolver::new(registry::profile(lang).unwrap())
    }

    #[test]
    fn test_russian_feminine_forms() {
        let r = resolver(Lang::Ru);
        assert_eq!(r.resolve(1, GrammaticalClass::Feminine), "одна");
        assert_eq!(r.resolve(2, GrammaticalClass::Feminine), "две");
        assert_eq!(r.resolve(1, GrammaticalClass::Masculine), "один");
        assert_eq!(r.resolve(5, GrammaticalClass::Feminine), "пять");
        assert!(r.exact(3, GrammaticalClass::Feminine).is_none());
    }

    #[test]
    fn test_unmarked_is_citation_form() {
        let r = resolver(Lang::De);
        assert_eq!(r.resolve(1, GrammaticalClass::Unmarked), "eins");
        assert_eq!(r.resolve(1, GrammaticalClass::Neuter), "ein");
        assert_eq!(r.resolve(1, GrammaticalClass::Feminine), "eine");
    }

    #[test]
    fn test_zulu_concords() {
        let r = resolver(Lang::Zu);
        assert_eq!(r.resolve(2, GrammaticalClass::NounClass(6)), "amabili");
        assert_eq!(r.resolve(2, GrammaticalClass::NounClass(10)), "ezimbili");
        assert_eq!(r.resolve(3, GrammaticalClass::NounClass(10)), "ezintathu");
        assert_eq!(r.resolve(4, GrammaticalClass::NounClass(10)), "ezine");
        assert_eq!(r.resolve(5, GrammaticalClass::NounClass(8)), "ezinhlanu");
        assert_eq!(r.resolve(6, GrammaticalClass::NounClass(6)), "isithupha");
        assert!(matches!(
            r.numeral(2, GrammaticalClass::NounClass(10)),
            Some(Numeral::Concord { prefix: "ezin", stem: "bili" })
        ));
    }

    #[test]
    fn test_relative_concord() {
        let r = resolver(Lang::Zu);
        assert_eq!(r.relative_concord(GrammaticalClass::NounClass(6)), Some("a"));
        assert_eq!(r.relative_concord(GrammaticalClass::NounClass(10)), Some("ezi"));
        assert_eq!(r.relative_concord(GrammaticalClass::Feminine), None);
    }
}
