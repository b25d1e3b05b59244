/// Message revealed after the greeting is accepted.
pub const DEFAULT_MESSAGE: &str = "Roses are pink and stars softly gleam \u{2014} my heart blooms brighter because of you. Will you hold it forever?";

/// Delay between two revealed characters.
pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 36;

/// Typewriter-style reveal of a fixed message, one character per interval.
///
/// The reveal is a pure function of elapsed time; it counts Unicode scalar values so
/// multi-byte characters are never split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedReveal {
    text: String,
    char_interval_ms: u64,
    char_count: usize,
}

impl Default for TypedReveal {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE, DEFAULT_CHAR_INTERVAL_MS)
    }
}

impl TypedReveal {
    /// Reveal `text` at one character per `char_interval_ms` (minimum 1 ms).
    pub fn new(text: impl Into<String>, char_interval_ms: u64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_interval_ms: char_interval_ms.max(1),
            char_count,
        }
    }

    /// Full message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters visible `elapsed_ms` after the reveal started.
    pub fn chars_visible_at(&self, elapsed_ms: u64) -> usize {
        let n = elapsed_ms / self.char_interval_ms;
        usize::try_from(n).unwrap_or(usize::MAX).min(self.char_count)
    }

    /// Visible prefix `elapsed_ms` after the reveal started.
    pub fn visible_at(&self, elapsed_ms: u64) -> &str {
        let n = self.chars_visible_at(elapsed_ms);
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    /// Whether the whole message is visible at `elapsed_ms`.
    pub fn is_complete_at(&self, elapsed_ms: u64) -> bool {
        self.chars_visible_at(elapsed_ms) == self.char_count
    }

    /// Elapsed time at which the last character appears.
    pub fn completes_after(&self) -> u64 {
        (self.char_count as u64).saturating_mul(self.char_interval_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/typed.rs"]
mod tests;
