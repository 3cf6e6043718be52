use unicode_width::UnicodeWidthChar;

/// Shorten to at most `max_len` chars, ending in "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Terminal columns taken by the first `cursor` chars of `text`.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    text.chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}
