//! The ordered candidate pass.

use crate::analyzer::normalizer::compact_into;
use crate::analyzer::tokenizer::WordTokenizer;
use crate::arena::TagArena;
use crate::synth::stats::SynthesisStats;
use crate::synth::types::{HashtagEngine, OriginBuf, BASE_TAGS, MAX_SOURCE_WORDS};
use crate::synth::variants::expand_variants;
use creatorskit_types::TagOrigin;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

impl HashtagEngine {
    /// Runs the candidate pass over a pre-validated caption.
    ///
    /// Emission order is fixed for reproducibility: base tags, bare caption
    /// words, suffix variants, whole-text candidate. A single forward pass
    /// over that stream deduplicates with an explicit seen-set, preserving
    /// first occurrence, and stops admitting once `max_tags` labels survive.
    pub(crate) fn synthesize(&mut self, caption: &str) {
        self.tags.clear();
        self.origins.clear();
        self.seen.clear();
        self.stats = SynthesisStats::default();

        self.normalizer.normalize_into(caption, &mut self.norm_buf);
        if self.config.full_text_candidate {
            compact_into(caption, &mut self.compact_buf);
        }

        let mut words: SmallVec<[&str; MAX_SOURCE_WORDS]> = SmallVec::new();
        WordTokenizer::new(self.config.max_source_words).tokenize(&self.norm_buf, |word, _pos| {
            words.push(word);
        });

        let max_tags = self.config.max_tags;

        for tag in BASE_TAGS {
            Self::admit(
                &mut self.seen,
                &mut self.tags,
                &mut self.origins,
                &mut self.stats,
                max_tags,
                tag,
                TagOrigin::Base,
            );
        }

        for &word in &words {
            Self::admit(
                &mut self.seen,
                &mut self.tags,
                &mut self.origins,
                &mut self.stats,
                max_tags,
                word,
                TagOrigin::Word,
            );
        }

        for &word in &words {
            expand_variants(word, &mut self.variant_buf, |label| {
                Self::admit(
                    &mut self.seen,
                    &mut self.tags,
                    &mut self.origins,
                    &mut self.stats,
                    max_tags,
                    label,
                    TagOrigin::Variant,
                );
            });
        }

        if self.config.full_text_candidate {
            Self::admit(
                &mut self.seen,
                &mut self.tags,
                &mut self.origins,
                &mut self.stats,
                max_tags,
                &self.compact_buf,
                TagOrigin::FullText,
            );
        }

        self.stats.emitted = self.tags.len() as u32;
    }

    /// Admits one candidate label into the result.
    ///
    /// An empty label is skipped outright (an all-space caption produces an
    /// empty whole-text candidate). Labels already seen count as duplicates
    /// whether or not they made it into the result, so truncation reporting
    /// matches a dedup-then-slice of the full candidate stream.
    #[inline(always)]
    fn admit(
        seen: &mut FxHashSet<String>,
        tags: &mut TagArena,
        origins: &mut OriginBuf,
        stats: &mut SynthesisStats,
        max_tags: usize,
        label: &str,
        origin: TagOrigin,
    ) {
        stats.candidates_considered += 1;

        if label.is_empty() {
            return;
        }

        if seen.contains(label) {
            stats.duplicates_removed += 1;
            return;
        }
        seen.insert(label.to_owned());

        if tags.len() >= max_tags {
            stats.truncated += 1;
            return;
        }

        if tags.push(label).is_some() {
            origins.push(origin);
        }
    }
}
