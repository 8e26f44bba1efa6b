//! Caption analysis pipeline.
//!
//! This module provides the caption processing components:
//! - **Normalizer**: Lowercases text and collapses whitespace, plus the
//!   space-stripping "compaction" used by the whole-text candidate
//! - **Tokenizer**: Splits normalized captions into words, capped at the
//!   synthesis word limit

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{compact, compact_into, CaptionNormalizer, NormalizerConfig};
pub use tokenizer::WordTokenizer;
