//! CreatorsKit hashtag synthesis engine.
//!
//! Deterministically turns a free-text caption into a ranked, deduplicated,
//! length-bounded list of hashtags. No network calls, no model inference,
//! no persistence: the whole pipeline is string manipulation.
//!
//! The pipeline has three stages:
//!
//! 1. **Analyze** ([`analyzer`]): lowercase and collapse whitespace, split
//!    into capped words, and strip spaces from the original caption for the
//!    whole-text candidate.
//! 2. **Expand** ([`synth::variants`]): derive suffix variants from each
//!    word.
//! 3. **Admit** ([`synth`]): stream candidates in fixed order through a
//!    seen-set, preserving first occurrence, capped at the tag limit.
//!
//! # Quick start
//!
//! ```
//! use creatorskit_core::generate_hashtags;
//!
//! let tags = generate_hashtags("cat video");
//! assert_eq!(tags[0].as_str(), "#fyp");
//! assert_eq!(tags.last().unwrap().as_str(), "#catvideo");
//! ```
//!
//! For repeated synthesis, [`HashtagEngine`] reuses its buffers across
//! calls and adds input validation, batch generation, borrowed access to
//! the last result, and per-call statistics.

pub mod analyzer;
pub mod arena;
pub mod synth;

pub use synth::{generate_hashtags, HashtagEngine};
