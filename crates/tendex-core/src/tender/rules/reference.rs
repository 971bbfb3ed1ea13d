//! Tender reference number extraction.

use super::patterns::{FILENAME_REFERENCE, REFERENCE_PATTERNS};

/// Extract the tender reference number (e.g. "25MS1234").
///
/// The source filename is tried first; on a miss the ordered text
/// patterns are walked and the first match wins. Returns an empty
/// string when nothing matches.
pub fn extract_reference_number(text: &str, filename: &str) -> String {
    if !filename.is_empty() {
        if let Some(caps) = FILENAME_REFERENCE.captures(filename) {
            return caps[1].to_string();
        }
    }

    for pattern in REFERENCE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            return caps[1].to_uppercase();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filename_wins_over_text() {
        let result = extract_reference_number(
            "Tender No. 30EQ999 for supply of gloves",
            "25MS1234_tender.pdf",
        );
        assert_eq!(result, "25MS1234");
    }

    #[test]
    fn test_labeled_text_reference() {
        assert_eq!(
            extract_reference_number("Tender No: 7TN2024 closing soon", ""),
            "7TN2024"
        );
    }

    #[test]
    fn test_text_reference_is_uppercased() {
        assert_eq!(
            extract_reference_number("reference 25ms1234", ""),
            "25MS1234"
        );
    }

    #[test]
    fn test_department_code_whitelist() {
        assert_eq!(
            extract_reference_number("awarded under 12LB345 last year", ""),
            "12LB345"
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(extract_reference_number("no reference here", "notes.pdf"), "");
    }
}
