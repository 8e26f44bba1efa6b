//! Hashtag synthesis.
//!
//! Transforms a free-text caption into a ranked, deduplicated list of
//! hashtags using only deterministic string manipulation.
//!
//! Candidate order is fixed: the six base tags, then the first caption
//! words, then per-word suffix variants, then the space-stripped whole
//! caption. A single forward pass with an explicit seen-set removes
//! duplicates while preserving first occurrence, and the result is capped
//! at the configured tag limit.
//!
//! The [`HashtagEngine`] reuses buffers across calls and validates input;
//! [`generate_hashtags`] is the pure, total, one-shot form.

mod api;
mod candidates;
mod stats;
mod types;
pub mod variants;

pub use api::generate_hashtags;
pub use stats::SynthesisStats;
pub use types::{
    EngineMetrics, HashtagEngine, BASE_TAGS, MAX_CAPTION_LENGTH, MAX_SOURCE_WORDS, MAX_TAGS,
};
