//! Garbage-line filtering for OCR output.

use super::patterns::{DIGITS_PUNCT_ONLY, GARBAGE_PATTERNS};

/// True if a line is header/footer/boilerplate noise and should be
/// skipped by item extraction. Field extraction scans full text and
/// does not use this filter.
pub fn is_garbage_line(line: &str) -> bool {
    let line_lower = line.trim().to_lowercase();

    if GARBAGE_PATTERNS.iter().any(|p| p.is_match(&line_lower)) {
        return true;
    }

    // Too short or all digits/punctuation.
    if line.trim().chars().count() < 5 {
        return true;
    }
    if DIGITS_PUNCT_ONLY.is_match(line) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_markers_are_garbage() {
        assert!(is_garbage_line("Page 1"));
        assert!(is_garbage_line("page 3 of 12"));
        assert!(is_garbage_line("2 of 7"));
    }

    #[test]
    fn test_urls_and_phones_are_garbage() {
        assert!(is_garbage_line("https://www.moh.gov.kw/tenders"));
        assert!(is_garbage_line("+965 2462 0000"));
    }

    #[test]
    fn test_institutional_headers_are_garbage() {
        assert!(is_garbage_line("Ministry of Health"));
        assert!(is_garbage_line("STATE OF KUWAIT"));
        assert!(is_garbage_line("Medical Stores Administration"));
        assert!(is_garbage_line("Tender Department"));
    }

    #[test]
    fn test_short_lines_are_garbage() {
        assert!(is_garbage_line(""));
        assert!(is_garbage_line("ab"));
        assert!(is_garbage_line("  x  "));
    }

    #[test]
    fn test_digits_and_punctuation_only_is_garbage() {
        assert!(is_garbage_line("12345"));
        assert!(is_garbage_line("12, 34 - 56.78"));
        assert!(is_garbage_line("-----------"));
    }

    #[test]
    fn test_content_lines_survive() {
        assert!(!is_garbage_line("1. Surgical Gloves - 500 pieces"));
        assert!(!is_garbage_line("Closing Date: 15/03/2025"));
    }
}
