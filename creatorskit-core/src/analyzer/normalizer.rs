use memchr::memchr_iter;

#[inline(always)]
const fn is_ascii_break(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

/// Configuration options for caption normalization.
#[derive(Clone, Copy)]
pub struct NormalizerConfig {
    /// When enabled, any Unicode whitespace character is treated as a word
    /// break. When disabled, only ASCII whitespace splits words; other
    /// whitespace characters pass through into the output.
    pub unicode_whitespace: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            unicode_whitespace: true,
        }
    }
}

/// Caption normalizer.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses consecutive whitespace into single spaces
/// - Removes leading/trailing whitespace
///
/// The output upholds the tokenizer contract: lowercase, no leading or
/// trailing space, no consecutive spaces.
///
/// # Examples
///
/// ```
/// use creatorskit_core::analyzer::normalizer::CaptionNormalizer;
///
/// let normalizer = CaptionNormalizer::default();
/// assert_eq!(normalizer.normalize("  Cat   VIDEO  "), "cat video");
/// ```
pub struct CaptionNormalizer {
    config: NormalizerConfig,
}

impl Default for CaptionNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl CaptionNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes a caption into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when
    /// necessary. Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let unicode_ws = self.config.unicode_whitespace;
        let mut pending_space = false;

        for ch in input.chars() {
            let is_break = if unicode_ws {
                ch.is_whitespace()
            } else {
                is_ascii_break(ch)
            };

            if is_break {
                pending_space = true;
                continue;
            }

            // Leading whitespace never flushes: the output is still empty.
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;

            if ch.is_ascii() {
                out.push(ch.to_ascii_lowercase());
            } else {
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
    }

    /// Normalizes a caption and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Strips ASCII space bytes (0x20) from a caption into an existing buffer.
///
/// Only the space character is removed; casing, tabs, and every other
/// character pass through untouched. This is the whole-text candidate
/// transform: `compact("Cat Video")` yields `"CatVideo"`.
#[inline]
pub fn compact_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    let bytes = input.as_bytes();
    let mut start = 0usize;

    for i in memchr_iter(b' ', bytes) {
        if start < i {
            // Space is ASCII, so both sides of the cut are char boundaries.
            out.push_str(&input[start..i]);
        }
        start = i + 1;
    }

    out.push_str(&input[start..]);
}

/// Strips ASCII spaces and returns a new String.
#[inline]
pub fn compact(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    compact_into(input, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        CaptionNormalizer::default().normalize(input)
    }

    fn norm_ascii(input: &str) -> String {
        CaptionNormalizer::new(NormalizerConfig {
            unicode_whitespace: false,
        })
        .normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123 abc!");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_unchanged() {
        assert_eq!(norm("foo-bar_baz"), "foo-bar_baz");
        assert_eq!(norm("rock n' roll"), "rock n' roll");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_whitespace_removed() {
        assert_eq!(norm("   hello"), "hello");
        assert_eq!(norm("hello   "), "hello");
        assert_eq!(norm("  hello world  "), "hello world");
    }

    #[test]
    fn only_whitespace() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("\n\t\r"), "");
    }

    #[test]
    fn no_double_spaces() {
        let out = norm("hello   world  test");
        assert!(!out.contains("  "));
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("CAFÉ"), "café");
    }

    #[test]
    fn unicode_whitespace_splits_by_default() {
        assert_eq!(norm("cat\u{00A0}video"), "cat video");
        assert_eq!(norm("cat\u{2003}video"), "cat video");
    }

    #[test]
    fn unicode_whitespace_preserved_in_ascii_mode() {
        assert_eq!(norm_ascii("cat\u{00A0}video"), "cat\u{00A0}video");
        assert_eq!(norm_ascii("CAT  VIDEO"), "cat video");
    }

    #[test]
    fn expanding_lowercase_does_not_panic() {
        let result = norm("İstanbul");
        assert!(std::str::from_utf8(result.as_bytes()).is_ok());
    }

    #[test]
    fn emoji_passthrough() {
        assert_eq!(norm("Hello 🌍 World"), "hello 🌍 world");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn idempotent() {
        let n = CaptionNormalizer::default();
        let samples = ["hello world", "foo   bar", "ÜBER Café"];

        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = CaptionNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn compact_removes_only_ascii_spaces() {
        assert_eq!(compact("cat video"), "catvideo");
        assert_eq!(compact("Cat Video"), "CatVideo");
        assert_eq!(compact("a\tb c"), "a\tbc");
        assert_eq!(compact("cat\u{00A0}video"), "cat\u{00A0}video");
    }

    #[test]
    fn compact_no_spaces_is_identity() {
        assert_eq!(compact("catvideo"), "catvideo");
        assert_eq!(compact(""), "");
    }

    #[test]
    fn compact_all_spaces_is_empty() {
        assert_eq!(compact("   "), "");
    }

    #[test]
    fn compact_preserves_unicode() {
        assert_eq!(compact("Café au lait"), "Caféaulait");
        assert_eq!(compact("🌍 earth"), "🌍earth");
    }

    #[test]
    fn compact_into_reuses_buffer() {
        let mut buf = String::with_capacity(64);
        compact_into("a b c", &mut buf);
        assert_eq!(buf, "abc");
        compact_into("x y", &mut buf);
        assert_eq!(buf, "xy");
    }
}
