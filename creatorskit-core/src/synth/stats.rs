//! Synthesis statistics.

use crate::synth::types::HashtagEngine;

/// A snapshot of the most recent synthesis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisStats {
    /// Candidates fed into the deduplication pass.
    pub candidates_considered: u32,
    /// Candidates dropped because an identical label was already emitted.
    pub duplicates_removed: u32,
    /// Unique candidates dropped by the tag cap.
    pub truncated: u32,
    /// Tags that survived into the result.
    pub emitted: u32,
}

impl SynthesisStats {
    /// Number of distinct labels the pass encountered.
    #[inline(always)]
    #[must_use]
    pub const fn unique_candidates(&self) -> u32 {
        self.emitted + self.truncated
    }
}

impl HashtagEngine {
    /// Returns statistics for the most recent synthesis.
    #[inline(always)]
    #[must_use]
    pub fn stats(&self) -> SynthesisStats {
        self.stats
    }
}

impl core::fmt::Display for SynthesisStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} candidates, {} duplicates removed, {} tags",
            self.candidates_considered, self.duplicates_removed, self.emitted
        )?;

        if self.truncated > 0 {
            write!(f, ", {} truncated", self.truncated)?;
        }

        Ok(())
    }
}
