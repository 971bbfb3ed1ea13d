//! Error types for the tendex-core library.

use thiserror::Error;

/// Main error type for the tendex library.
#[derive(Error, Debug)]
pub enum TendexError {
    /// PDF rasterization error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF rasterization.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The PDF file does not exist.
    #[error("PDF not found: {0}")]
    NotFound(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// pdftoppm invocation failed.
    #[error("rasterization failed: {0}")]
    Rasterization(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// No usable tesseract binary was found.
    #[error("tesseract binary not found")]
    TesseractNotFound,

    /// Tesseract invocation failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Tesseract produced output we could not parse.
    #[error("failed to parse OCR output: {0}")]
    OutputParse(String),

    /// Image preprocessing failed.
    #[error("preprocessing failed: {0}")]
    Preprocessing(String),

    /// Invalid image data or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the tendex library.
pub type Result<T> = std::result::Result<T, TendexError>;
