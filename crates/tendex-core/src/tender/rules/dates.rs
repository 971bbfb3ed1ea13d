//! Closing and posting date extraction.
//!
//! Dates stay strings in dd/mm/yyyy shape; OCR output is too noisy to
//! promise calendar-valid dates, and the record contract is
//! format-preserving.

use super::patterns::{CLOSING_DATE_PATTERNS, DATE_BARE, POSTING_DATE};

/// Normalize date separators to `/`.
fn normalize_separators(date: &str) -> String {
    date.replace(['-', '.'], "/")
}

/// Extract the tender closing date.
///
/// Labeled patterns are preferred over bare dates. When a pattern
/// matches more than once the last occurrence wins: closing dates near
/// the document end supersede earlier draft dates.
pub fn extract_closing_date(text: &str) -> String {
    for pattern in CLOSING_DATE_PATTERNS.iter() {
        let matches: Vec<&str> = pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        if let Some(date) = matches.last() {
            return normalize_separators(date);
        }
    }

    String::new()
}

/// Extract the posting/publication date.
///
/// A "Posted"/"Published" label is preferred; the fallback is the first
/// bare date anywhere in the text.
pub fn extract_posting_date(text: &str) -> String {
    if let Some(caps) = POSTING_DATE.captures(text) {
        return normalize_separators(&caps[1]);
    }

    DATE_BARE
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_closing_date() {
        assert_eq!(
            extract_closing_date("Closing Date: 15/03/2025"),
            "15/03/2025"
        );
    }

    #[test]
    fn test_last_labeled_occurrence_wins() {
        let text = "Closing Date: 15/03/2025 ... amended ... Closing Date: 20/03/2025";
        assert_eq!(extract_closing_date(text), "20/03/2025");
    }

    #[test]
    fn test_separators_normalized() {
        assert_eq!(extract_closing_date("Deadline: 15-03-2025"), "15/03/2025");
        assert_eq!(extract_closing_date("Deadline: 15.03.2025"), "15/03/2025");
    }

    #[test]
    fn test_bare_date_fallback() {
        assert_eq!(
            extract_closing_date("submissions accepted until 20/03/2025 noon"),
            "20/03/2025"
        );
    }

    #[test]
    fn test_posting_date_label_preferred() {
        let text = "issued 01/01/2025\nPublished: 05/02/2025";
        assert_eq!(extract_posting_date(text), "05/02/2025");
    }

    #[test]
    fn test_posting_date_first_bare_fallback() {
        let text = "opening 10/01/2025 and closing 20/03/2025";
        assert_eq!(extract_posting_date(text), "10/01/2025");
    }

    #[test]
    fn test_no_dates() {
        assert_eq!(extract_closing_date("no dates at all"), "");
        assert_eq!(extract_posting_date("no dates at all"), "");
    }
}
