//! Bump Store for Tag Labels
//!
//! Eliminates per-tag allocations by keeping every surviving label of the
//! most recent synthesis in a single contiguous buffer. Tags are referenced
//! by (offset, length) pairs.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena Buffer: [tag0][tag1][tag2][tag3]...[free space]
//!               ^     ^     ^     ^
//!               |     |     |     |
//! Spans:       (0,3) (3,5) (8,8) (16,4) ...
//! ```
//!
//! Clearing resets the spans and the write position but keeps capacity, so
//! repeated synthesis through the same engine settles into zero allocations.

use creatorskit_types::TagId;

/// Tag reference - 6 bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSpan {
    offset: u32,
    len: u16,
}

impl TagSpan {
    /// Creates a new tag span.
    #[inline(always)]
    pub const fn new(offset: u32, len: u16) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len as usize
    }
}

/// Bump store for tag label text.
pub struct TagArena {
    /// Contiguous label storage
    buffer: String,
    /// Label spans (offset, length pairs)
    spans: Vec<TagSpan>,
}

impl Default for TagArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TagArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
            spans: Vec::with_capacity(32),
        }
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(buffer_cap: usize, tag_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(buffer_cap),
            spans: Vec::with_capacity(tag_cap),
        }
    }

    /// Returns the number of tags stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no tags are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Clears all tags (keeps capacity).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
    }

    /// Appends a tag label to the arena.
    ///
    /// Returns `None` if the label length exceeds u16::MAX (65535 bytes).
    #[inline]
    pub fn push(&mut self, label: &str) -> Option<TagId> {
        if label.len() > u16::MAX as usize {
            return None;
        }

        let tag_id = self.spans.len() as TagId;
        let offset = self.buffer.len() as u32;

        self.buffer.push_str(label);
        self.spans.push(TagSpan::new(offset, label.len() as u16));
        Some(tag_id)
    }

    /// Gets a tag label by ID.
    ///
    /// Spans always cut the buffer where a pushed label started or ended,
    /// so slicing stays on char boundaries.
    #[inline(always)]
    pub fn get(&self, tag_id: TagId) -> Option<&str> {
        let span = self.spans.get(tag_id as usize)?;
        let start = span.offset();
        Some(&self.buffer[start..start + span.len()])
    }

    /// Iterates over stored labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().map(move |span| {
            let start = span.offset();
            &self.buffer[start..start + span.len()]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_push_get() {
        let mut arena = TagArena::new();

        let id0 = arena.push("fyp").expect("should push");
        let id1 = arena.push("viral").expect("should push");
        let id2 = arena.push("catvideo").expect("should push");

        assert_eq!(id0, 0);
        assert_eq!(id1, 1);
        assert_eq!(id2, 2);

        assert_eq!(arena.get(id0), Some("fyp"));
        assert_eq!(arena.get(id1), Some("viral"));
        assert_eq!(arena.get(id2), Some("catvideo"));
        assert_eq!(arena.get(3), None);
    }

    #[test]
    fn empty_label() {
        let mut arena = TagArena::new();
        let id = arena.push("").expect("should push");
        assert_eq!(arena.get(id), Some(""));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn label_too_long() {
        let mut arena = TagArena::new();
        let label = "x".repeat(70000);
        assert!(arena.push(&label).is_none());
    }

    #[test]
    fn unicode_labels() {
        let mut arena = TagArena::new();
        let id0 = arena.push("café").expect("should push");
        let id1 = arena.push("日本語").expect("should push");
        assert_eq!(arena.get(id0), Some("café"));
        assert_eq!(arena.get(id1), Some("日本語"));
    }

    #[test]
    fn clear_resets() {
        let mut arena = TagArena::with_capacity(1024, 64);
        for i in 0..30 {
            arena.push(&format!("tag{}", i)).expect("should push");
        }

        arena.clear();

        assert_eq!(arena.len(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.get(0), None);
    }

    #[test]
    fn reusable_after_clear() {
        let mut arena = TagArena::new();
        arena.push("trending").expect("should push");
        arena.clear();

        let id = arena.push("explore").expect("should push");
        assert_eq!(id, 0);
        assert_eq!(arena.get(id), Some("explore"));
    }

    #[test]
    fn iter_in_insertion_order() {
        let mut arena = TagArena::new();
        for label in ["fyp", "viral", "trending"] {
            arena.push(label).expect("should push");
        }

        let collected: Vec<&str> = arena.iter().collect();
        assert_eq!(collected, vec!["fyp", "viral", "trending"]);
    }
}
