//! Char-boundary-safe windows over byte offsets.

/// Byte offset `n` characters before `pos`, or 0.
pub(crate) fn back_chars(text: &str, pos: usize, n: usize) -> usize {
    if n == 0 {
        return pos;
    }
    text[..pos]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `n` characters after `pos`, or the end of the text.
pub(crate) fn forward_chars(text: &str, pos: usize, n: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Slice of `text` spanning `before` chars ahead of `start` to `after` chars past `end`.
pub(crate) fn window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    &text[back_chars(text, start, before)..forward_chars(text, end, after)]
}

/// First `n` characters of `s`.
pub(crate) fn prefix_chars(s: &str, n: usize) -> &str {
    &s[..forward_chars(s, 0, n)]
}
