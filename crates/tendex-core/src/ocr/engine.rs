//! OCR pipeline: rasterize, preprocess, recognize, aggregate.

use std::path::Path;

use image::DynamicImage;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::models::config::OcrConfig;
use crate::pdf::PdfRasterizer;

use super::preprocessing::ImagePreprocessor;
use super::tesseract::{OcrWord, TesseractRunner};

/// Separator inserted between page texts in the aggregated output.
pub const PAGE_BREAK: &str = "\n\n--- PAGE BREAK ---\n\n";

/// OCR engine for PDF text extraction.
///
/// Pages are processed sequentially within one call; the engine holds
/// no state across calls beyond its configuration.
pub struct OcrEngine {
    config: OcrConfig,
    rasterizer: PdfRasterizer,
    preprocessor: ImagePreprocessor,
}

impl OcrEngine {
    /// Create an engine from configuration.
    pub fn new(config: OcrConfig) -> Self {
        let rasterizer = PdfRasterizer::new(config.dpi);
        Self {
            config,
            rasterizer,
            preprocessor: ImagePreprocessor::new(),
        }
    }

    /// Extract text and average confidence from a PDF.
    ///
    /// Never fails: a missing file or any rasterization/recognition
    /// error yields `("", 0.0)` and a log entry. The caller decides
    /// what an empty result means.
    pub fn extract_text_from_pdf(
        &self,
        pdf_path: &Path,
        max_pages: Option<usize>,
    ) -> (String, f32) {
        if !pdf_path.exists() {
            error!("PDF not found: {}", pdf_path.display());
            return (String::new(), 0.0);
        }

        match self.try_extract(pdf_path, max_pages) {
            Ok(result) => result,
            Err(e) => {
                warn!("OCR failed for {}: {}", pdf_path.display(), e);
                (String::new(), 0.0)
            }
        }
    }

    fn try_extract(&self, pdf_path: &Path, max_pages: Option<usize>) -> Result<(String, f32)> {
        let max_pages = max_pages.unwrap_or(self.config.max_pages);
        let runner = TesseractRunner::from_config(&self.config)?;

        // Scratch directory scoped to this call; dropped with its images.
        std::fs::create_dir_all(&self.config.temp_dir)?;
        let workdir = tempfile::tempdir_in(&self.config.temp_dir)?;

        info!("Converting PDF to images: {}", pdf_path.display());
        let pages = self
            .rasterizer
            .rasterize(pdf_path, 1, max_pages, workdir.path())?;

        info!("Processing {} pages", pages.len());

        let mut page_texts = Vec::new();
        let mut confidences = Vec::new();

        for page_path in &pages {
            let image = image::open(page_path)?;
            let prepared = self.preprocessor.prepare(&image);
            let words = runner.recognize_image(&DynamicImage::ImageLuma8(prepared))?;

            let kept: Vec<&OcrWord> = words
                .iter()
                .filter(|w| w.confidence > 0.0 && !w.text.trim().is_empty())
                .collect();

            if !kept.is_empty() {
                let page_confidence =
                    kept.iter().map(|w| w.confidence).sum::<f32>() / kept.len() as f32;
                confidences.push(page_confidence);
            }

            let page_text = kept
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            page_texts.push(page_text);
        }

        let full_text = page_texts.join(PAGE_BREAK);
        let avg_confidence = if confidences.is_empty() {
            0.0
        } else {
            confidences.iter().sum::<f32>() / confidences.len() as f32
        };

        info!(
            "Extracted {} characters, confidence: {:.1}%",
            full_text.len(),
            avg_confidence
        );

        Ok((full_text, avg_confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::OcrConfig;

    #[test]
    fn test_missing_file_yields_empty_result() {
        let engine = OcrEngine::new(OcrConfig::default());
        let (text, confidence) =
            engine.extract_text_from_pdf(Path::new("/nonexistent/tender.pdf"), None);

        assert!(text.is_empty());
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_unreadable_pdf_yields_empty_result() {
        // A present-but-invalid PDF must be recovered locally, not raised.
        let scratch = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(scratch.path(), b"not a pdf").unwrap();

        let engine = OcrEngine::new(OcrConfig::default());
        let (text, confidence) = engine.extract_text_from_pdf(scratch.path(), Some(2));

        assert!(text.is_empty());
        assert_eq!(confidence, 0.0);
    }
}
