//! Text normalization helpers

use std::collections::HashSet;

/// Collapse every maximal whitespace run (spaces, tabs, newlines) to a
/// single ASCII space, trim, and lower-case. Idempotent.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whitespace-delimited word set. Punctuation is not stripped, so a word
/// with trailing punctuation is a distinct token from the bare word.
pub fn word_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace_and_lowercases() {
        let text = "  Senior\tRust\n\nEngineer   at\r\n ACME  ";
        assert_eq!(clean_text(text), "senior rust engineer at acme");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let inputs = [
            "  Hello\n world ",
            "already clean",
            "",
            "\t\n ",
            "MIXED Case\twith\ttabs",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_clean_text_has_no_consecutive_or_edge_whitespace() {
        let cleaned = clean_text("  a   b\t\tc \n d  ");
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, cleaned.trim());
    }

    #[test]
    fn test_word_set_keeps_punctuation_attached() {
        let words = word_set("rust, rust and rust.");
        assert!(words.contains("rust,"));
        assert!(words.contains("rust"));
        assert!(words.contains("rust."));
        assert_eq!(words.len(), 4);
    }
}
