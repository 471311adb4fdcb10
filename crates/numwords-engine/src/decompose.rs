//! Splitting an integer into scale chunks.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use numwords_core::{Lang, NumWordsError, NumWordsResult};

use crate::profile::GrammarProfile;

/// One non-zero group of digits and the scale it is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// 0 for the units chunk, `i` for `chunk_base^i`.
    pub scale_index: usize,
    /// Always in `1..chunk_base`.
    pub value: u32,
}

/// Splits integers into base-`chunk_base` groups.
#[derive(Debug, Clone)]
pub struct Decomposer {
    lang: Lang,
    chunk_base: u32,
    max_scale_index: usize,
}

impl Decomposer {
    pub fn new(lang: Lang, chunk_base: u32, max_scale_index: usize) -> Self {
        Self {
            lang,
            chunk_base,
            max_scale_index,
        }
    }

    pub fn for_profile(profile: &GrammarProfile) -> Self {
        Self::new(profile.lang, profile.chunk_base, profile.max_scale_index())
    }

    /// Non-zero chunks, least significant first. Zero yields no chunks.
    ///
    /// Fails with [`NumWordsError::ScaleOverflow`] when a non-zero chunk sits
    /// above the largest scale the profile names.
    pub fn decompose(&self, n: &BigUint) -> NumWordsResult<Vec<Chunk>> {
        let base = BigUint::from(self.chunk_base);
        let mut chunks = Vec::new();
        let mut rest = n.clone();
        let mut scale_index = 0usize;

        while !rest.is_zero() {
            let value = (&rest % &base)
                .to_u32()
                .ok_or_else(|| NumWordsError::internal("chunk exceeds u32"))?;
            if value != 0 {
                if scale_index > self.max_scale_index {
                    return Err(NumWordsError::ScaleOverflow {
                        lang: self.lang,
                        scale_index,
                        max_scale_index: self.max_scale_index,
                    });
                }
                chunks.push(Chunk { scale_index, value });
            }
            rest /= &base;
            scale_index += 1;
        }

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigUint {
        s.parse().unwrap()
    }

    #[test]
    fn test_decompose_thousands() {
        let d = Decomposer::new(Lang::En, 1000, 11);
        let chunks = d.decompose(&BigUint::from(2_500_042u32)).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { scale_index: 0, value: 42 },
                Chunk { scale_index: 1, value: 500 },
                Chunk { scale_index: 2, value: 2 },
            ]
        );
    }

    #[test]
    fn test_decompose_skips_zero_chunks() {
        let d = Decomposer::new(Lang::En, 1000, 11);
        let chunks = d.decompose(&BigUint::from(1_000_005u32)).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { scale_index: 0, value: 5 },
                Chunk { scale_index: 2, value: 1 },
            ]
        );
    }

    #[test]
    fn test_decompose_zero() {
        let d = Decomposer::new(Lang::En, 1000, 11);
        assert!(d.decompose(&BigUint::zero()).unwrap().is_empty());
    }

    #[test]
    fn test_decompose_myriads() {
        let d = Decomposer::new(Lang::Ko, 10_000, 9);
        let chunks = d.decompose(&BigUint::from(123_456_789u32)).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { scale_index: 0, value: 6789 },
                Chunk { scale_index: 1, value: 2345 },
                Chunk { scale_index: 2, value: 1 },
            ]
        );
    }

    #[test]
    fn test_decompose_overflow() {
        let d = Decomposer::new(Lang::Zu, 1000, 4);
        let err = d.decompose(&big("1000000000000000")).unwrap_err();
        assert_eq!(
            err,
            NumWordsError::ScaleOverflow {
                lang: Lang::Zu,
                scale_index: 5,
                max_scale_index: 4,
            }
        );
        assert!(d.decompose(&big("999999999999999")).is_ok());
    }
}
