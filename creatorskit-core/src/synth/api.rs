//! Public API for caption synthesis.

use crate::synth::types::{HashtagEngine, MAX_CAPTION_LENGTH};
use creatorskit_types::{CaptionError, Hashtag, TagId, TagOrigin};

/// Checks if input contains invalid control characters (other than whitespace).
fn contains_invalid_controls(input: &str) -> bool {
    input
        .bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F))
}

impl HashtagEngine {
    /// Synthesizes hashtags for a caption.
    ///
    /// # Errors
    ///
    /// Returns `CaptionError::TooLarge` if the caption exceeds the length cap.
    /// Returns `CaptionError::InvalidInput` if the caption contains control
    /// characters.
    #[inline(never)]
    pub fn generate(&mut self, caption: &str) -> Result<Vec<Hashtag>, CaptionError> {
        if caption.len() > MAX_CAPTION_LENGTH {
            return Err(CaptionError::TooLarge {
                size: caption.len(),
                max_size: MAX_CAPTION_LENGTH,
            });
        }

        if contains_invalid_controls(caption) {
            return Err(CaptionError::InvalidInput {
                reason: "control characters (0x00-0x1F excluding whitespace) are not allowed",
            });
        }

        Ok(self.run(caption))
    }

    /// Synthesizes hashtags for multiple captions.
    ///
    /// Results are appended to `out` in caption order; a failed caption
    /// contributes an empty list. Returns `(succeeded, failed)` counts and
    /// the last error encountered.
    pub fn generate_batch(
        &mut self,
        captions: &[&str],
        out: &mut Vec<Vec<Hashtag>>,
    ) -> (usize, usize, Option<CaptionError>) {
        let mut succeeded = 0;
        let mut failed = 0;
        let mut last_error = None;

        for &caption in captions {
            match self.generate(caption) {
                Ok(tags) => {
                    succeeded += 1;
                    out.push(tags);
                }
                Err(e) => {
                    failed += 1;
                    last_error = Some(e);
                    out.push(Vec::new());
                }
            }
        }
        (succeeded, failed, last_error)
    }

    /// Returns a label from the most recent result, without its `#` prefix.
    #[inline(always)]
    pub fn tag(&self, tag_id: TagId) -> Option<&str> {
        self.tags.get(tag_id)
    }

    /// Returns the provenance of a tag in the most recent result.
    #[inline(always)]
    pub fn origin(&self, tag_id: TagId) -> Option<TagOrigin> {
        self.origins.get(tag_id as usize).copied()
    }

    /// Iterates over the most recent result's labels in emission order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter()
    }

    /// Iterates over `(label, origin)` pairs of the most recent result.
    pub fn tags_with_origin(&self) -> impl Iterator<Item = (&str, TagOrigin)> {
        self.tags.iter().zip(self.origins.iter().copied())
    }

    fn run(&mut self, caption: &str) -> Vec<Hashtag> {
        self.synthesize(caption);
        self.captions_processed += 1;
        self.tags_emitted += self.tags.len() as u64;

        self.tags.iter().map(Hashtag::new).collect()
    }
}

/// Synthesizes hashtags for a caption with the default configuration.
///
/// This is the total form of the synthesizer: any string input, including
/// the empty string, produces a valid result. No validation, no error path,
/// no side effects; identical input yields identical output.
///
/// # Example
///
/// ```
/// use creatorskit_core::synth::generate_hashtags;
///
/// let tags = generate_hashtags("cat video");
/// assert_eq!(tags[0].as_str(), "#fyp");
/// assert!(tags.iter().any(|t| t.as_str() == "#catvideo"));
/// ```
#[must_use]
pub fn generate_hashtags(text: &str) -> Vec<Hashtag> {
    HashtagEngine::new().run(text)
}
