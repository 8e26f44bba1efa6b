//! Variant expansion module.
//!
//! Expands each source word into its suffix variants. Variants are the
//! bulk of the candidate stream feeding deduplication.

/// Suffixes applied to each source word, in emission order.
///
/// The empty suffix re-emits the bare word; the downstream seen-set removes
/// it again, since bare words are always emitted before variants.
pub const VARIANT_SUFFIXES: [&str; 4] = ["", "1", "2", "official"];

/// Expands a word into its suffix variants.
///
/// Each variant is built in the caller-provided scratch buffer and handed
/// to the callback as a borrowed slice. The buffer is reused between
/// variants, so the slice must not be held across invocations.
///
/// # Example
///
/// ```
/// use creatorskit_core::synth::variants::expand_variants;
///
/// let mut scratch = String::new();
/// let mut out = Vec::new();
/// expand_variants("cat", &mut scratch, |v| out.push(v.to_string()));
///
/// assert_eq!(out, ["cat", "cat1", "cat2", "catofficial"]);
/// ```
#[inline(always)]
pub fn expand_variants<F>(word: &str, scratch: &mut String, mut callback: F)
where
    F: FnMut(&str),
{
    for suffix in VARIANT_SUFFIXES {
        scratch.clear();
        scratch.push_str(word);
        scratch.push_str(suffix);
        callback(scratch);
    }
}

/// Number of variants emitted per word.
#[inline(always)]
pub const fn count_variants() -> usize {
    VARIANT_SUFFIXES.len()
}

/// Trait for types that can expand a word into candidate labels.
///
/// This allows custom expansion strategies while reusing the same
/// synthesis pass.
pub trait VariantExpander {
    /// Expands `word`, emitting each candidate label.
    fn expand<F>(&self, word: &str, scratch: &mut String, callback: F)
    where
        F: FnMut(&str);
}

/// Standard fixed-suffix expander.
pub struct SuffixExpander;

impl VariantExpander for SuffixExpander {
    #[inline(always)]
    fn expand<F>(&self, word: &str, scratch: &mut String, callback: F)
    where
        F: FnMut(&str),
    {
        expand_variants(word, scratch, callback);
    }
}
