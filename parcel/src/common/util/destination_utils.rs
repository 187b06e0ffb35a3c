/// Folds a destination name into its stored form.
///
/// Surrounding whitespace is trimmed and ASCII letters are lowercased. Bytes
/// outside the ASCII range pass through untouched.
///
/// ```rust
/// use parcel::common::normalize_destination;
///
/// assert_eq!(normalize_destination("  Canada "), "canada");
/// ```
pub fn normalize_destination(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Cuts `name` down to at most `max_len` bytes without splitting a character.
pub fn truncate_destination(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }
    let mut end = max_len;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
