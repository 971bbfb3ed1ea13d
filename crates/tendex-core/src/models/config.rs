//! Configuration structures for the extraction pipeline.
//!
//! Configuration is built once and passed into constructors; nothing
//! here is process-global.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the tendex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TendexConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Tender extraction configuration.
    pub extraction: ExtractionConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Explicit tesseract binary path; standard locations are probed
    /// when unset.
    pub tesseract_path: Option<PathBuf>,

    /// OCR language codes, tried together ("eng+ara").
    pub languages: Vec<String>,

    /// DPI for rendering PDF pages to images.
    pub dpi: u32,

    /// Maximum pages to process per PDF.
    pub max_pages: usize,

    /// Tesseract page segmentation mode.
    pub psm: u32,

    /// Tesseract OCR engine mode.
    pub oem: u32,

    /// Scratch directory for intermediate rasterized images.
    pub temp_dir: PathBuf,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: None,
            languages: vec!["eng".to_string(), "ara".to_string()],
            dpi: 300,
            max_pages: 10,
            psm: 6,
            oem: 3,
            temp_dir: std::env::temp_dir().join("tendex_ocr"),
        }
    }
}

impl OcrConfig {
    /// Language codes joined for the tesseract `-l` argument.
    pub fn language_arg(&self) -> String {
        self.languages.join("+")
    }
}

/// Tender extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Department name recorded on extracted tenders.
    pub department: String,

    /// Include the full OCR text in the output record.
    pub include_raw_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            department: "Biomedical Engineering".to_string(),
            include_raw_text: false,
        }
    }
}

impl TendexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
