//! Core library for tender OCR extraction.
//!
//! This crate provides:
//! - PDF page rasterization via poppler's pdftoppm
//! - OCR pipeline driving the external tesseract binary
//! - Rule-based tender field extraction (reference numbers, dates,
//!   items, specifications) over bilingual English/Arabic text
//! - Tender data models with a stable, never-null JSON shape

pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod tender;

pub use error::{OcrError, PdfError, Result, TendexError};
pub use models::config::{ExtractionConfig, OcrConfig, TendexConfig};
pub use models::tender::{Language, LanguageInfo, TenderItem, TenderRecord};
pub use ocr::{
    DependencyStatus, ImageTextExtractor, ImageTextRequest, ImageTextResponse, OcrEngine,
    check_dependencies,
};
pub use pdf::PdfRasterizer;
pub use tender::TenderExtractor;
