//! Specifications section extraction.

use super::patterns::{SPECIFICATION_PATTERNS, WHITESPACE_RUN};

const MIN_SPECS_LEN: usize = 50;
const MAX_SPECS_LEN: usize = 2000;

/// Extract the specifications/requirements section.
///
/// Ordered patterns capture the span between a section label and a
/// terminating label (or end of text). A span is only accepted when,
/// after whitespace collapse, it exceeds 50 characters; otherwise the
/// next pattern is tried. The result is truncated to 2000 characters.
pub fn extract_specifications(text: &str) -> String {
    for pattern in SPECIFICATION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let specs = WHITESPACE_RUN
                .replace_all(caps[1].trim(), " ")
                .into_owned();

            if specs.chars().count() > MIN_SPECS_LEN {
                return specs.chars().take(MAX_SPECS_LEN).collect();
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_specifications_span_extracted() {
        let text = "Specifications: Nitrile examination gloves, powder free,\n\
                    textured fingertips, sizes S through XL, CE marked.\n\
                    Terms and conditions apply.";
        let specs = extract_specifications(text);
        assert!(specs.starts_with("Nitrile examination gloves"));
        assert!(specs.contains("CE marked"));
        assert!(!specs.contains("conditions"));
    }

    #[test]
    fn test_short_span_rejected() {
        // Collapsed span under the 50 character floor yields nothing.
        assert_eq!(extract_specifications("Specifications: short text"), "");
    }

    #[test]
    fn test_requirements_fallback() {
        let text = format!(
            "Requirements: {}\nNotes: delivery within 30 days",
            "sterile single use surgical instruments stainless steel grade "
        );
        let specs = extract_specifications(&text);
        assert!(specs.starts_with("sterile single use"));
        assert!(!specs.contains("delivery"));
    }

    #[test]
    fn test_truncated_to_limit() {
        let text = format!("Specifications: {}", "spec ".repeat(1000));
        assert_eq!(extract_specifications(&text).chars().count(), 2000);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let text = "Specifications: gloves   with\n\n   extra     padding and reinforced cuffs for clinical use";
        let specs = extract_specifications(text);
        assert!(specs.contains("gloves with extra padding"));
    }
}
