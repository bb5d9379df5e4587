//! Character-boundary safe tail slicing

/// Length of `text` in characters (Unicode scalar values).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Return the last `max_chars` characters of `text`.
///
/// The whole string is returned when it is already short enough.
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }

    match text.char_indices().rev().nth(max_chars - 1) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

/// Return the first `max_chars` characters of `text`.
pub fn head_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
