//! Whole-number conversion: decompose, render chunks, insert conjunctions.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use numwords_core::{GrammaticalClass, NumWordsError, NumWordsResult};
use tracing::{debug, trace};

use crate::chunk::ChunkRenderer;
use crate::decompose::{Chunk, Decomposer};
use crate::profile::{GrammarProfile, JoinKind, JoinPredicate, Joiner};

/// A chunk after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChunk {
    pub scale_index: usize,
    pub value: u32,
    pub words: String,
}

/// What a conjunction rule sees at the join before `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinContext {
    pub prev_scale: usize,
    pub next_scale: usize,
    pub next_value: u32,
    pub next_is_last: bool,
}

impl JoinPredicate {
    pub fn matches(&self, ctx: &JoinContext) -> bool {
        match self {
            JoinPredicate::Always => true,
            JoinPredicate::NextIsLast => ctx.next_is_last,
            JoinPredicate::NextScale(index) => ctx.next_scale == *index,
            JoinPredicate::NextBelow(limit) => ctx.next_value < *limit,
            JoinPredicate::PrevScale(index) => ctx.prev_scale == *index,
            JoinPredicate::AllOf(all) => all.iter().all(|p| p.matches(ctx)),
        }
    }
}

/// Converts arbitrary-precision non-negative integers to words.
#[derive(Debug, Clone)]
pub struct IntegerConverter {
    profile: &'static GrammarProfile,
    decomposer: Decomposer,
    chunks: ChunkRenderer,
}

impl IntegerConverter {
    pub fn new(profile: &'static GrammarProfile) -> Self {
        Self {
            profile,
            decomposer: Decomposer::for_profile(profile),
            chunks: ChunkRenderer::new(profile),
        }
    }

    pub fn chunks(&self) -> &ChunkRenderer {
        &self.chunks
    }

    /// Words for `n`, with the units chunk agreeing with `class`.
    pub fn convert(&self, n: &BigUint, class: GrammaticalClass) -> NumWordsResult<String> {
        if n.is_zero() {
            return Ok(self.profile.zero.to_string());
        }
        let chunks = self.decomposer.decompose(n)?;
        debug!(chunks = chunks.len(), "decomposed");

        let rendered = chunks
            .iter()
            .rev()
            .map(|chunk| self.render_chunk(chunk, class))
            .collect::<NumWordsResult<Vec<_>>>()?;

        Ok(self.insert_conjunctions(&rendered))
    }

    /// Words for `n` used as the count of a noun of `class`.
    pub fn convert_count(&self, n: &BigUint, class: GrammaticalClass) -> NumWordsResult<String> {
        if n.is_zero() {
            return Ok(self.profile.zero.to_string());
        }
        if let Some(small) = n.to_u32().filter(|v| *v < self.profile.chunk_base) {
            return Ok(self.chunks.render_count(small, class));
        }
        match self.chunks.agreement().relative_concord(class) {
            Some(relative) => {
                let plain = self.convert(n, GrammaticalClass::Unmarked)?;
                Ok(self
                    .chunks
                    .fuser()
                    .fuse(relative, &plain, JoinKind::Concord, ""))
            }
            None => self.convert(n, class),
        }
    }

    fn render_chunk(&self, chunk: &Chunk, class: GrammaticalClass) -> NumWordsResult<RenderedChunk> {
        if chunk.scale_index == 0 {
            return Ok(RenderedChunk {
                scale_index: 0,
                value: chunk.value,
                words: self.chunks.render(chunk.value, class),
            });
        }
        let scale = self.profile.scale(chunk.scale_index).ok_or_else(|| {
            NumWordsError::internal(format!("no scale word at index {}", chunk.scale_index))
        })?;
        Ok(RenderedChunk {
            scale_index: chunk.scale_index,
            value: chunk.value,
            words: self.chunks.noun_phrase(chunk.value, scale),
        })
    }

    fn insert_conjunctions(&self, rendered: &[RenderedChunk]) -> String {
        let Some((first, rest)) = rendered.split_first() else {
            return String::new();
        };

        let mut out = first.words.clone();
        let mut prev_scale = first.scale_index;
        for (i, next) in rest.iter().enumerate() {
            let ctx = JoinContext {
                prev_scale,
                next_scale: next.scale_index,
                next_value: next.value,
                next_is_last: i + 1 == rest.len(),
            };
            let joiner = self
                .profile
                .conjunctions
                .iter()
                .find(|rule| rule.when.matches(&ctx))
                .map(|rule| rule.joiner)
                .unwrap_or(Joiner::Plain(self.profile.chunk_joiner));
            trace!(?ctx, ?joiner, "chunk join");
            out = self.chunks.fuser().join(&out, &next.words, joiner);
            prev_scale = next.scale_index;
        }
        out
    }
}
