//! Tender data models.
//!
//! All fields are always present: missing values are empty strings or
//! zero, never null, so serialized records keep a stable shape.

use serde::{Deserialize, Serialize};

/// Primary language classification of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Latin-script dominant text.
    English,
    /// Arabic-script dominant text (ratio > 0.30).
    Arabic,
    /// Noticeable Arabic presence (0.05 < ratio <= 0.30).
    Mixed,
    /// No non-whitespace characters to classify.
    Unknown,
}

impl Default for Language {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Result of language detection on a text span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Primary language classification.
    pub language: Language,

    /// Fraction of non-whitespace characters in Arabic script ranges.
    pub arabic_ratio: f32,

    /// True if at least one Arabic character is present, regardless of
    /// how the ratio classifies the span.
    pub has_arabic: bool,
}

impl Default for LanguageInfo {
    fn default() -> Self {
        Self {
            language: Language::Unknown,
            arabic_ratio: 0.0,
            has_arabic: false,
        }
    }
}

/// A single line item extracted from a tender document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenderItem {
    /// Item number as printed (not guaranteed numeric-sequential).
    pub item_number: String,

    /// Cleaned description, collapsed whitespace, max 500 chars.
    pub description: String,

    /// Quantity as a digits/separator string; may be empty.
    pub quantity: String,

    /// Lower-cased unit token, "units" when absent.
    pub unit: String,

    /// Per-item technical specifications (rarely populated by OCR).
    pub specifications: String,

    /// Language classification of the description.
    pub language: Language,

    /// True when the description contains any Arabic characters.
    pub has_arabic: bool,
}

/// Complete extraction result for one source PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenderRecord {
    /// Tender reference number, e.g. "25MS1234". Empty when not found.
    pub reference_number: String,

    /// Tender title. Empty when not found.
    pub title: String,

    /// Closing date as dd/mm/yyyy text. Empty when not found.
    pub closing_date: String,

    /// Posting/publication date. Empty when not found.
    pub posting_date: String,

    /// Department the tender was processed for.
    pub department: String,

    /// Extracted line items, in order of first appearance.
    pub items: Vec<TenderItem>,

    /// Specifications section text, max 2000 chars.
    pub specifications_text: String,

    /// Number of extracted items.
    pub items_count: usize,

    /// Average OCR confidence in [0, 100]. 0 means no confident words.
    pub ocr_confidence: f32,

    /// Source file names this record was extracted from.
    pub source_files: Vec<String>,

    /// ISO-8601 timestamp of the extraction.
    pub extraction_timestamp: String,

    /// Extraction method identifier.
    pub extraction_method: String,

    /// Document-level language classification.
    pub language: Language,

    /// True when the document contains any Arabic characters.
    pub has_arabic_content: bool,

    /// Full OCR text; populated only when explicitly requested.
    pub raw_text: String,

    /// Error descriptions; empty on success.
    pub errors: Vec<String>,
}

impl Default for TenderRecord {
    fn default() -> Self {
        Self {
            reference_number: String::new(),
            title: String::new(),
            closing_date: String::new(),
            posting_date: String::new(),
            department: String::new(),
            items: Vec::new(),
            specifications_text: String::new(),
            items_count: 0,
            ocr_confidence: 0.0,
            source_files: Vec::new(),
            extraction_timestamp: String::new(),
            extraction_method: "ocr".to_string(),
            language: Language::Unknown,
            has_arabic_content: false,
            raw_text: String::new(),
            errors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_all_fields() {
        let record = TenderRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["reference_number"], "");
        assert_eq!(json["items_count"], 0);
        assert_eq!(json["language"], "unknown");
        assert_eq!(json["extraction_method"], "ocr");
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_language_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Language::Arabic).unwrap(),
            "\"arabic\""
        );
        assert_eq!(
            serde_json::from_str::<Language>("\"mixed\"").unwrap(),
            Language::Mixed
        );
    }
}
