//! Rule-based extractors for tender OCR text.

pub mod dates;
pub mod garbage;
pub mod items;
pub mod language;
pub mod patterns;
pub mod reference;
pub mod specs;

pub use dates::{extract_closing_date, extract_posting_date};
pub use garbage::is_garbage_line;
pub use items::extract_items;
pub use language::detect_language;
pub use reference::extract_reference_number;
pub use specs::extract_specifications;
