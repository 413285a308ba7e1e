//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, adding "..." if needed.
///
/// Lengths are counted in `char`s, so multi-byte input is never split.
///
/// # Examples
///
/// ```rust
/// use accelspec_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("v4:8x8x8", 10), "v4:8x8x8");
/// assert_eq!(truncate_string("v5:12x12x12", 8), "v5:12...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let cut = s.char_indices().nth(keep).map_or(s.len(), |(idx, _)| idx);
    format!("{}...", &s[..cut])
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("v4-8", 10), "v4-8");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("v5p-17920", 9), "v5p-17920");
    }

    #[test]
    fn test_truncate_string_needs_truncation() {
        assert_eq!(truncate_string("v5:16x20x28", 8), "v5:16...");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("v5\u{e9}:\u{d7}16x20", 6), "v5\u{e9}...");
        assert_eq!(truncate_string("\u{b5}\u{b5}\u{b5}\u{b5}", 4), "\u{b5}\u{b5}\u{b5}\u{b5}");
        assert_eq!(truncate_string("\u{b5}\u{b5}\u{b5}\u{b5}\u{b5}", 4), "\u{b5}...");
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("v5p-17920", 2), "...");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "---");
    }
}
