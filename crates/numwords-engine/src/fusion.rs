//! Joining words at morpheme boundaries.
//!
//! Fusion is ordered: explicit profile rules first, then generic vowel
//! coalescence, then the caller's default joiner. Languages without fusion
//! data always land on the default joiner.

use tracing::trace;

use crate::profile::{FusionRule, JoinKind, Joiner, VowelPair};

/// Applies a profile's fusion and coalescence tables.
#[derive(Debug, Clone, Copy)]
pub struct MorphologyFuser {
    rules: &'static [FusionRule],
    coalescence: &'static [VowelPair],
}

impl MorphologyFuser {
    pub fn new(rules: &'static [FusionRule], coalescence: &'static [VowelPair]) -> Self {
        Self { rules, coalescence }
    }

    /// Join `left` and `right` at a boundary of the given kind.
    pub fn fuse(&self, left: &str, right: &str, kind: JoinKind, default_joiner: &str) -> String {
        if left.is_empty() {
            return right.to_string();
        }
        if right.is_empty() {
            return left.to_string();
        }

        for rule in self.rules.iter().filter(|r| r.kind == kind) {
            if left.ends_with(rule.left) && right.starts_with(rule.right) {
                let head = &left[..left.len() - rule.left.len()];
                let tail = &right[rule.right.len()..];
                trace!(left, right, fused = rule.fused, "fusion rule");
                return format!("{head}{}{tail}", rule.fused);
            }
        }

        if kind != JoinKind::Compound {
            if let Some(joined) = self.coalesce(left, right) {
                return joined;
            }
        }

        format!("{left}{default_joiner}{right}")
    }

    fn coalesce(&self, left: &str, right: &str) -> Option<String> {
        let last = left.chars().next_back()?;
        let first = right.chars().next()?;
        let pair = self
            .coalescence
            .iter()
            .find(|p| p.left == last && p.right == first)?;
        let head = &left[..left.len() - last.len_utf8()];
        let tail = &right[first.len_utf8()..];
        trace!(left, right, fused = pair.fused, "vowel coalescence");
        Some(format!("{head}{}{tail}", pair.fused))
    }

    /// Join two rendered phrases with a chunk or place joiner.
    pub fn join(&self, left: &str, right: &str, joiner: Joiner) -> String {
        if left.is_empty() {
            return right.to_string();
        }
        if right.is_empty() {
            return left.to_string();
        }
        match joiner {
            Joiner::Plain(sep) => format!("{left}{sep}{right}"),
            Joiner::Word(word) => format!("{left} {word} {right}"),
            Joiner::Fused(word) => {
                let attached = self.fuse(word, right, JoinKind::Conjunction, "");
                format!("{left} {attached}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: &[FusionRule] = &[
        FusionRule {
            kind: JoinKind::Conjunction,
            left: "na",
            right: "kunye",
            fused: "nanye",
        },
        FusionRule {
            kind: JoinKind::Concord,
            left: "n",
            right: "b",
            fused: "mb",
        },
    ];

    static VOWELS: &[VowelPair] = &[
        VowelPair {
            left: 'a',
            right: 'i',
            fused: "e",
        },
        VowelPair {
            left: 'a',
            right: 'a',
            fused: "a",
        },
    ];

    fn fuser() -> MorphologyFuser {
        MorphologyFuser::new(RULES, VOWELS)
    }

    #[test]
    fn test_rule_before_coalescence() {
        assert_eq!(fuser().fuse("na", "kunye", JoinKind::Conjunction, " "), "nanye");
        assert_eq!(fuser().fuse("ezin", "bili", JoinKind::Concord, ""), "ezimbili");
    }

    #[test]
    fn test_rule_kind_must_match() {
        assert_eq!(fuser().fuse("ezin", "bili", JoinKind::Compound, ""), "ezinbili");
    }

    #[test]
    fn test_vowel_coalescence() {
        assert_eq!(fuser().fuse("na", "ishumi", JoinKind::Conjunction, " "), "neshumi");
        assert_eq!(fuser().fuse("na", "amashumi", JoinKind::Conjunction, " "), "namashumi");
    }

    #[test]
    fn test_default_joiner() {
        assert_eq!(fuser().fuse("twenty", "one", JoinKind::Compound, "-"), "twenty-one");
        assert_eq!(fuser().fuse("na", "ishumi", JoinKind::Compound, " "), "na ishumi");
        let empty = MorphologyFuser::new(&[], &[]);
        assert_eq!(empty.fuse("na", "ishumi", JoinKind::Conjunction, " "), "na ishumi");
    }

    #[test]
    fn test_join_styles() {
        let f = fuser();
        assert_eq!(f.join("one hundred", "one", Joiner::Word("and")), "one hundred and one");
        assert_eq!(f.join("tausend", "eins", Joiner::Plain("")), "tausendeins");
        assert_eq!(f.join("ishumi", "kunye", Joiner::Fused("na")), "ishumi nanye");
        assert_eq!(f.join("", "kunye", Joiner::Fused("na")), "kunye");
    }
}
