//! Code-point level helpers.
//!
//! Devanagari letters and vowel signs take three bytes each in UTF-8, so any
//! length or truncation arithmetic on terms has to count `char`s, never bytes.

/// Number of Unicode code points in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Drops the last `n` code points of `s`.
///
/// The result borrows from `s` and always ends on a character boundary.
/// Dropping as many code points as `s` holds, or more, yields `""`.
pub fn truncate_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}
