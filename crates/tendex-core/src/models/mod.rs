//! Data models for tender extraction.

pub mod config;
pub mod tender;

pub use config::{ExtractionConfig, OcrConfig, TendexConfig};
pub use tender::{Language, LanguageInfo, TenderItem, TenderRecord};
