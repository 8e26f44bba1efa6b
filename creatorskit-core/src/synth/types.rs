//! Engine types and constants.

use crate::analyzer::normalizer::CaptionNormalizer;
use crate::arena::TagArena;
use crate::synth::stats::SynthesisStats;
use creatorskit_types::{SynthesisConfig, TagOrigin};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// The six fixed tags that open every synthesis, in emission order.
pub const BASE_TAGS: [&str; 6] = ["fyp", "viral", "trending", "foryou", "explore", "tiktok"];

/// Hard cap on emitted tags per caption (default configuration).
pub const MAX_TAGS: usize = 30;

/// Number of caption words used for variant generation (default configuration).
pub const MAX_SOURCE_WORDS: usize = 5;

/// Maximum caption length accepted by the validating API (bytes).
pub const MAX_CAPTION_LENGTH: usize = 1_000;

/// Inline buffer for per-tag provenance, sized for the default tag cap.
pub(crate) type OriginBuf = SmallVec<[TagOrigin; MAX_TAGS]>;

/// Deterministic hashtag synthesis engine.
///
/// Holds reusable scratch buffers so repeated synthesis through one engine
/// avoids re-allocating its working state on every call.
/// Synthesis takes `&mut self`; use one engine per thread. The free
/// [`generate_hashtags`](crate::synth::generate_hashtags) function is pure
/// and safe to call from anywhere.
pub struct HashtagEngine {
    pub(crate) normalizer: CaptionNormalizer,
    pub(crate) config: SynthesisConfig,
    /// Surviving labels of the most recent synthesis.
    pub(crate) tags: TagArena,
    /// Provenance of each surviving label, parallel to `tags`.
    pub(crate) origins: OriginBuf,
    pub(crate) seen: FxHashSet<String>,
    /// Reusable buffer for the normalized caption.
    pub(crate) norm_buf: String,
    /// Reusable buffer for the space-stripped original caption.
    pub(crate) compact_buf: String,
    /// Reusable buffer for variant construction.
    pub(crate) variant_buf: String,
    /// Counters from the most recent synthesis.
    pub(crate) stats: SynthesisStats,
    /// Total number of captions processed.
    pub(crate) captions_processed: u64,
    /// Total number of tags emitted.
    pub(crate) tags_emitted: u64,
}

impl Default for HashtagEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HashtagEngine {
    /// Creates a new engine with the default configuration.
    pub fn new() -> Self {
        Self {
            normalizer: CaptionNormalizer::default(),
            config: SynthesisConfig::default(),
            tags: TagArena::with_capacity(512, MAX_TAGS),
            origins: SmallVec::new(),
            seen: FxHashSet::default(),
            norm_buf: String::with_capacity(256),
            compact_buf: String::with_capacity(256),
            variant_buf: String::with_capacity(64),
            stats: SynthesisStats::default(),
            captions_processed: 0,
            tags_emitted: 0,
        }
    }

    /// Creates a new engine with custom configuration.
    pub fn with_config(config: SynthesisConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Returns the number of tags in the most recent result.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the engine holds no result.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Drops the held result and resets all counters.
    pub fn clear(&mut self) {
        self.tags.clear();
        self.origins.clear();
        self.seen.clear();
        self.stats = SynthesisStats::default();
        self.captions_processed = 0;
        self.tags_emitted = 0;
    }

    /// Returns basic metrics about the engine's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            captions_processed: self.captions_processed,
            tags_emitted: self.tags_emitted,
            last_tag_count: self.tags.len() as u64,
        }
    }
}

/// Basic operational metrics for the synthesis engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineMetrics {
    /// Total number of captions that reached synthesis (failed validations
    /// are not counted).
    pub captions_processed: u64,
    /// Total number of tags emitted across all captions.
    pub tags_emitted: u64,
    /// Number of tags in the most recent result.
    pub last_tag_count: u64,
}
