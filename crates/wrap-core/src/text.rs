//! Text measurement helpers.

/// Count whitespace-separated tokens.
#[must_use]
pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
