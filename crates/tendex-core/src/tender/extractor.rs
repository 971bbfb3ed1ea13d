//! Tender extraction orchestrator.

use std::path::Path;

use tracing::{debug, info};

use crate::models::config::TendexConfig;
use crate::models::tender::TenderRecord;
use crate::ocr::OcrEngine;

use super::rules::{
    detect_language, extract_closing_date, extract_items, extract_posting_date,
    extract_reference_number, extract_specifications,
};

/// Main extractor composing the OCR pipeline and the rule-based parser
/// into one `TenderRecord` per PDF.
pub struct TenderExtractor {
    engine: OcrEngine,
}

impl TenderExtractor {
    /// Create an extractor from configuration.
    pub fn new(config: &TendexConfig) -> Self {
        Self {
            engine: OcrEngine::new(config.ocr.clone()),
        }
    }

    /// Process a single PDF into a fully populated record.
    ///
    /// OCR failure is not an error here: an empty OCR result produces a
    /// valid record carrying a descriptive error string, with the
    /// reference number recovered from the filename alone. No retry is
    /// attempted; retry policy belongs to the caller.
    pub fn process_pdf(
        &self,
        pdf_path: &Path,
        department: &str,
        max_pages: Option<usize>,
        include_raw_text: bool,
    ) -> TenderRecord {
        let filename = pdf_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (text, confidence) = self.engine.extract_text_from_pdf(pdf_path, max_pages);

        if text.is_empty() {
            return TenderRecord {
                reference_number: extract_reference_number("", &filename),
                department: department.to_string(),
                source_files: vec![filename],
                errors: vec!["Failed to extract text from PDF".to_string()],
                extraction_timestamp: chrono::Local::now().to_rfc3339(),
                ..TenderRecord::default()
            };
        }

        let lang_info = detect_language(&text);
        let items = extract_items(&text);
        debug!("Extracted {} items from {}", items.len(), filename);

        let record = TenderRecord {
            reference_number: extract_reference_number(&text, &filename),
            closing_date: extract_closing_date(&text),
            posting_date: extract_posting_date(&text),
            department: department.to_string(),
            items_count: items.len(),
            items,
            specifications_text: extract_specifications(&text),
            ocr_confidence: confidence,
            source_files: vec![filename],
            extraction_timestamp: chrono::Local::now().to_rfc3339(),
            language: lang_info.language,
            has_arabic_content: lang_info.has_arabic,
            raw_text: if include_raw_text { text } else { String::new() },
            ..TenderRecord::default()
        };

        info!(
            "Processed {} - reference {:?}, {} items, confidence {:.1}%",
            record.source_files[0], record.reference_number, record.items_count,
            record.ocr_confidence
        );

        record
    }
}
