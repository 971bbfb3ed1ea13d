//! OCR pipeline built around external tesseract and poppler binaries.

mod deps;
mod engine;
mod image_text;
mod preprocessing;
mod tesseract;

pub use deps::{DependencyStatus, check_dependencies, check_poppler, find_tesseract};
pub use engine::{OcrEngine, PAGE_BREAK};
pub use image_text::{ImageTextExtractor, ImageTextRequest, ImageTextResponse, Region, TextLineBox};
pub use preprocessing::ImagePreprocessor;
pub use tesseract::{OcrWord, TesseractRunner};
