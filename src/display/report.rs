//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for report columns.

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Right-align text in a field of given width (measured in characters)
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width (measured in characters)
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("abcdef", 3), "abcdef");
    }
}
