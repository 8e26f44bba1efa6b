//! Core types for the CreatorsKit hashtag synthesis engine.
//!
//! This crate provides the fundamental types that are shared across
//! the CreatorsKit ecosystem. Keeping types separate ensures:
//!
//! - **Zero-cost abstractions**: Types are sized for cache efficiency
//! - **Cross-crate compatibility**: Core and callers share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Index of a tag within a synthesis result.
///
/// Tags are identified by a 32-bit unsigned integer. A single synthesis
/// emits at most a few dozen tags, so this leaves plenty of headroom while
/// keeping span bookkeeping compact.
pub type TagId = u32;

/// A `#`-prefixed hashtag string.
///
/// The prefixed form is stored directly, so rendering a tag is free and
/// equality/hashing operate on exactly what a caller would serialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hashtag {
    text: String,
}

impl Hashtag {
    /// Creates a hashtag from an unprefixed label.
    ///
    /// `Hashtag::new("cat")` renders as `#cat`. The label is taken as-is;
    /// no casing or punctuation normalization is applied.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let mut text = String::with_capacity(label.len() + 1);
        text.push('#');
        text.push_str(label);
        Self { text }
    }

    /// Returns the full `#`-prefixed form.
    #[inline(always)]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the label without the leading `#`.
    #[inline(always)]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.text[1..]
    }

    /// Consumes the hashtag, returning the prefixed string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Hashtag {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Provenance of a synthesized tag.
///
/// Candidates are emitted in origin order: all base tags first, then bare
/// caption words, then suffixed variants, then the whole-text candidate.
///
/// `#[repr(u8)]` guarantees stable 1-byte layout for compact storage
/// alongside tag spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TagOrigin {
    /// One of the six fixed, input-independent generic tags.
    Base = 0,
    /// A bare word taken from the lowercased caption.
    Word = 1,
    /// A caption word with a numeric or `official` suffix.
    Variant = 2,
    /// The original caption with ASCII spaces removed.
    FullText = 3,
}

impl TagOrigin {
    /// Emission precedence of this origin (lower is emitted earlier).
    ///
    /// Not stored per tag; derived when inspecting results.
    #[must_use]
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Short name for logs and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TagOrigin::Base => "base",
            TagOrigin::Word => "word",
            TagOrigin::Variant => "variant",
            TagOrigin::FullText => "fulltext",
        }
    }
}

impl fmt::Display for TagOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when feeding a caption to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionError {
    /// Caption exceeds the maximum allowed size.
    TooLarge {
        /// The actual size of the caption in bytes.
        size: usize,
        /// The maximum allowed size in bytes.
        max_size: usize,
    },
    /// Caption contains invalid control characters.
    InvalidInput {
        /// Description of the invalid content.
        reason: &'static str,
    },
}

impl fmt::Display for CaptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptionError::TooLarge { size, max_size } => {
                write!(
                    f,
                    "caption too large: {} bytes (max: {} bytes)",
                    size, max_size
                )
            }
            CaptionError::InvalidInput { reason } => {
                write!(f, "caption contains invalid input: {}", reason)
            }
        }
    }
}

impl core::error::Error for CaptionError {}

/// Synthesis configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Maximum number of tags emitted per caption.
    /// Default: 30
    pub max_tags: usize,
    /// Maximum number of caption words used for variant generation.
    /// Default: 5
    pub max_source_words: usize,
    /// Whether to append the space-stripped whole-caption candidate.
    pub full_text_candidate: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_tags: 30,
            max_source_words: 5,
            full_text_candidate: true,
        }
    }
}

impl SynthesisConfig {
    /// Creates a configuration that emits word-derived tags only
    /// (no whole-text candidate).
    pub const fn words_only() -> Self {
        Self {
            max_tags: 30,
            max_source_words: 5,
            full_text_candidate: false,
        }
    }

    /// Creates a configuration for short tag lists.
    pub const fn compact() -> Self {
        Self {
            max_tags: 10,
            max_source_words: 3,
            full_text_candidate: true,
        }
    }
}
