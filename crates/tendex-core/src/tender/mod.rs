//! Tender parsing and extraction.

mod extractor;
pub mod rules;

pub use extractor::TenderExtractor;
