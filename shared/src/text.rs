/// Truncates `text` to at most `max` characters without splitting a
/// multi-byte character.
pub fn clamp_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
