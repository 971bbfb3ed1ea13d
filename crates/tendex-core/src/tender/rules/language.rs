//! Script-based language detection for bilingual tender text.

use crate::models::tender::{Language, LanguageInfo};

/// True for characters in the Arabic Unicode ranges: basic Arabic,
/// supplement, extended-A, presentation forms A and B.
fn is_arabic_char(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}')
}

/// Classify a text span by its Arabic-script character ratio.
///
/// `has_arabic` is set whenever any Arabic character is present, even
/// when the ratio still classifies the span as `english`.
pub fn detect_language(text: &str) -> LanguageInfo {
    let arabic_chars = text.chars().filter(|c| is_arabic_char(*c)).count();
    let total_chars = text.chars().filter(|c| !c.is_whitespace()).count();

    if total_chars == 0 {
        return LanguageInfo::default();
    }

    let arabic_ratio = arabic_chars as f32 / total_chars as f32;

    let language = if arabic_ratio > 0.3 {
        Language::Arabic
    } else if arabic_ratio > 0.05 {
        Language::Mixed
    } else {
        Language::English
    };

    LanguageInfo {
        language,
        arabic_ratio,
        has_arabic: arabic_chars > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text_is_unknown() {
        let info = detect_language("");
        assert_eq!(info.language, Language::Unknown);
        assert_eq!(info.arabic_ratio, 0.0);
        assert!(!info.has_arabic);

        // Whitespace-only counts as empty too.
        assert_eq!(detect_language("  \n\t ").language, Language::Unknown);
    }

    #[test]
    fn test_english_text() {
        let info = detect_language("Surgical Gloves Latex Free");
        assert_eq!(info.language, Language::English);
        assert!(!info.has_arabic);
    }

    #[test]
    fn test_arabic_text() {
        let info = detect_language("وزارة الصحة دولة الكويت");
        assert_eq!(info.language, Language::Arabic);
        assert!(info.has_arabic);
        assert!(info.arabic_ratio > 0.3);
    }

    #[test]
    fn test_mixed_text() {
        let info = detect_language("Syringe 10ml حقنة available in stock now");
        assert_eq!(info.language, Language::Mixed);
        assert!(info.has_arabic);
    }

    #[test]
    fn test_trace_arabic_keeps_english_classification() {
        // One Arabic character in a long English span: ratio stays under
        // the mixed threshold but has_arabic is still set.
        let text = format!("{} \u{0645}", "medical consumables ".repeat(10));
        let info = detect_language(&text);
        assert_eq!(info.language, Language::English);
        assert!(info.has_arabic);
    }

    #[test]
    fn test_ratio_in_unit_range() {
        for text in ["", "abc", "مستشفى", "a م", "123 456"] {
            let info = detect_language(text);
            assert!((0.0..=1.0).contains(&info.arabic_ratio));
        }
    }
}
