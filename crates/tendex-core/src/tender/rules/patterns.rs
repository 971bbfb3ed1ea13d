//! Common regex patterns for tender field and item extraction.
//!
//! Ordered pattern lists are tried first-match-wins; keep the order
//! stable, later entries are deliberately looser fallbacks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Reference number in the source filename, e.g. "25MS1234_tender.pdf".
    // Case-sensitive: filenames carry the department code uppercased.
    pub static ref FILENAME_REFERENCE: Regex = Regex::new(
        r"(\d{1,2}[A-Z]{2,3}\d{2,4})"
    ).unwrap();

    // Reference number patterns over document text, tried in order.
    pub static ref REFERENCE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:Tender\s*(?:No\.?|Number|Ref\.?)?[:\s]*)?(\d{1,2}[A-Z]{2,3}\d{2,4})").unwrap(),
        Regex::new(r"(?i)(?:Reference[:\s]*)?(\d{1,2}[A-Z]{2,3}\d{2,4})").unwrap(),
        // Known department codes used by the Medical Stores tenders.
        Regex::new(r"(?i)\b(\d{1,2}(?:TN|LB|AL|EQ|LS|MA|PS|PT|TE|TS|IC|RC|BM)\d{2,4})\b").unwrap(),
    ];

    // Closing date patterns, labeled first, bare dd/dd/dddd as fallback.
    pub static ref CLOSING_DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:Closing\s*Date|Close\s*Date|Last\s*Date|Deadline)[:\s]*(\d{1,2}[/\-\.]\d{1,2}[/\-\.]\d{2,4})").unwrap(),
        Regex::new(r"(?i)(?:close[sd]?\s*(?:on|by)?|deadline)[:\s]*(\d{1,2}[/\-\.]\d{1,2}[/\-\.]\d{2,4})").unwrap(),
        Regex::new(r"(\d{2}/\d{2}/\d{4})").unwrap(),
    ];

    // Posting date label pattern; first bare date is the fallback.
    pub static ref POSTING_DATE: Regex = Regex::new(
        r"(?i)(?:Posted|Published|Posted\s*Date|Publication\s*Date)[:\s]*(\d{1,2}[/\-\.]\d{1,2}[/\-\.]\d{2,4})"
    ).unwrap();

    // Bare dd/mm/yyyy date anywhere in text.
    pub static ref DATE_BARE: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Boilerplate line patterns, matched against the lowercased trimmed
    // line, anchored at line start.
    pub static ref GARBAGE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^page\s*\d+").unwrap(),
        Regex::new(r"^\d+\s*of\s*\d+$").unwrap(),
        Regex::new(r"^https?://").unwrap(),
        // Phone-number shaped lines.
        Regex::new(r"^\+?\d{3}[\s\-]?\d{4}[\s\-]?\d{4}$").unwrap(),
        Regex::new(r"^ministry\s+of\s+health").unwrap(),
        Regex::new(r"^state\s+of\s+kuwait").unwrap(),
        Regex::new(r"^medical\s+stores").unwrap(),
        Regex::new(r"^tender\s+department").unwrap(),
    ];

    // Lines with only digits, whitespace and light punctuation.
    pub static ref DIGITS_PUNCT_ONLY: Regex = Regex::new(
        r"^[\d\s\-\.\,]+$"
    ).unwrap();

    // Structural item patterns, tried in order per line.
    pub static ref ITEM_PATTERNS: Vec<Regex> = vec![
        // "1. Description - 500 pieces" / "1) Description : 500"
        Regex::new(r"(?i)^[\s]*(\d+)[.):\-\s]+([^0-9]+?)\s*[-\u{2013}:]\s*(\d+(?:[.,]\d+)?)\s*(pieces?|pcs?|units?|each|nos?|sets?|qty)?").unwrap(),
        // Tab-delimited table rows.
        Regex::new(r"(?i)^[\s]*(\d+)\s+([^\t]+?)\t+\s*(\d+(?:[.,]\d+)?)\s*(pieces?|pcs?|units?)?").unwrap(),
        // "1. Description 100 pieces"
        Regex::new(r"(?i)^[\s]*(\d+)[.)\s]+(.+?)\s+(\d+)\s*(pieces?|pcs?|units?|each|nos?|sets?|qty)?[\s]*$").unwrap(),
        // MOH Medical Store rows with a packaging-unit token before the quantity.
        Regex::new(r"(?i)^[\s]*(\d+)\s*\|?\s*([A-Z][A-Za-z\s\d\-\./]+)\s+(?:PFS|VIAL|AMP|TAB|CAP|TUBE|BTL|BOX|PKT|SET|UNIT|PCE)\s+(\d+[\d,]*)").unwrap(),
    ];

    // Loose trailing-quantity fallback for lines no structural pattern
    // accepted: "<text> 500 pieces".
    pub static ref ITEM_FALLBACK: Regex = Regex::new(
        r"(?i)(.{10,}?)\s+(\d+)\s*(pieces?|pcs?|units?|each|nos?|sets?|qty)\s*$"
    ).unwrap();

    // Specification section spans, label through terminating label or
    // end of text.
    pub static ref SPECIFICATION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?is)(?:Technical\s*)?Specifications?[:\s]*(.+?)(?:Terms|Conditions|Notes|\z)").unwrap(),
        Regex::new(r"(?is)Requirements?[:\s]*(.+?)(?:Terms|Notes|\z)").unwrap(),
        Regex::new(r"(?is)Description[:\s]*(.+?)(?:Quantity|Terms|\z)").unwrap(),
    ];

    // Cleanup helpers.
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    pub static ref LEADING_REMNANTS: Regex = Regex::new(r"^[\d\s\-\.]+").unwrap();
    pub static ref TRAILING_SEPARATORS: Regex = Regex::new(r"[\s\-\u{2013}:]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_reference_is_case_sensitive() {
        assert!(FILENAME_REFERENCE.is_match("25MS1234_tender.pdf"));
        assert!(!FILENAME_REFERENCE.is_match("25ms1234_tender.pdf"));
    }

    #[test]
    fn test_first_item_pattern_matches_dash_separated() {
        let caps = ITEM_PATTERNS[0]
            .captures("1. Surgical Gloves - 500 pieces")
            .unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(caps[2].trim(), "Surgical Gloves");
        assert_eq!(&caps[3], "500");
        assert_eq!(&caps[4], "pieces");
    }

    #[test]
    fn test_moh_pattern_matches_packaging_unit() {
        let caps = ITEM_PATTERNS[3]
            .captures("12 | Insulin Glargine 100IU/ml VIAL 4,500")
            .unwrap();
        assert_eq!(&caps[1], "12");
        assert_eq!(&caps[3], "4,500");
    }
}
