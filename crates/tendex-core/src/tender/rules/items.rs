//! Line-oriented item extraction with multi-pattern matching and dedup.

use tracing::debug;

use crate::models::tender::TenderItem;

use super::garbage::is_garbage_line;
use super::language::detect_language;
use super::patterns::{
    ITEM_FALLBACK, ITEM_PATTERNS, LEADING_REMNANTS, TRAILING_SEPARATORS, WHITESPACE_RUN,
};

const MAX_DESCRIPTION_LEN: usize = 500;
const DEDUP_PREFIX_LEN: usize = 100;

/// Collapse whitespace and strip leading/trailing digit and separator
/// remnants left behind by the structural patterns.
fn clean_description(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    let stripped = LEADING_REMNANTS.replace(&collapsed, "");
    TRAILING_SEPARATORS.replace(&stripped, "").into_owned()
}

/// Keep only digits and decimal separators.
fn clean_quantity(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

fn build_item(item_number: String, description: String, quantity: String, unit: String) -> TenderItem {
    let lang_info = detect_language(&description);

    TenderItem {
        item_number,
        description: description.chars().take(MAX_DESCRIPTION_LEN).collect(),
        quantity,
        unit,
        specifications: String::new(),
        language: lang_info.language,
        has_arabic: lang_info.has_arabic,
    }
}

/// Extract structured items from OCR text.
///
/// Each non-garbage line is tried against the ordered structural
/// patterns; the first pattern that matches the line wins. While no
/// item has been accepted yet, a loose trailing-quantity fallback is
/// also tried per line, synthesizing sequential item numbers. The
/// guard is re-checked on every line rather than latched once.
pub fn extract_items(text: &str) -> Vec<TenderItem> {
    let mut items: Vec<TenderItem> = Vec::new();
    let mut current_item_number: u64 = 0;

    for line in text.split('\n') {
        let line = line.trim();

        if is_garbage_line(line) {
            continue;
        }
        if line.chars().count() < 5 {
            continue;
        }

        for pattern in ITEM_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                let item_no = caps[1].to_string();
                let description = clean_description(caps.get(2).map_or("", |m| m.as_str()));
                let quantity = clean_quantity(caps.get(3).map_or("", |m| m.as_str()));
                let unit = caps
                    .get(4)
                    .map(|m| m.as_str().to_lowercase())
                    .unwrap_or_else(|| "units".to_string());

                if description.chars().count() > 3 {
                    current_item_number = item_no.parse().unwrap_or(current_item_number);
                    items.push(build_item(item_no, description, quantity, unit));
                }
                break;
            }
        }

        // Loose fallback for lines ending in "<quantity> <unit>".
        if items.is_empty() || current_item_number == 0 {
            if let Some(caps) = ITEM_FALLBACK.captures(line) {
                let description = caps[1].trim().to_string();
                let quantity = caps[2].to_string();
                let unit = caps[3].to_lowercase();

                if description.chars().count() > 5 && !is_garbage_line(&description) {
                    current_item_number += 1;
                    items.push(build_item(
                        current_item_number.to_string(),
                        description,
                        quantity,
                        unit,
                    ));
                }
            }
        }
    }

    debug!("Extracted {} items before dedup", items.len());

    dedup_items(items)
}

/// Keep the first occurrence of each case-folded 100-character
/// description prefix, preserving original order.
fn dedup_items(items: Vec<TenderItem>) -> Vec<TenderItem> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        let key: String = item
            .description
            .to_lowercase()
            .chars()
            .take(DEDUP_PREFIX_LEN)
            .collect();
        if seen.insert(key) {
            unique.push(item);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbered_list_with_garbage_dropped() {
        let text = "1. Surgical Gloves - 500 pieces\n2. Syringes 10ml - 1000 units\nPage 1 of 3\n";
        let items = extract_items(text);

        assert_eq!(items.len(), 2);

        assert_eq!(items[0].item_number, "1");
        assert_eq!(items[0].description, "Surgical Gloves");
        assert_eq!(items[0].quantity, "500");
        assert_eq!(items[0].unit, "pieces");

        assert_eq!(items[1].item_number, "2");
        assert_eq!(items[1].description, "Syringes 10ml");
        assert_eq!(items[1].quantity, "1000");
        assert_eq!(items[1].unit, "units");
    }

    #[test]
    fn test_unit_defaults_to_units() {
        let items = extract_items("3. Bandage Rolls Sterile - 250\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit, "units");
        assert_eq!(items[0].quantity, "250");
    }

    #[test]
    fn test_tab_delimited_rows() {
        let items = extract_items("4 Oxygen Masks Adult\t120 pcs\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_number, "4");
        assert_eq!(items[0].description, "Oxygen Masks Adult");
        assert_eq!(items[0].quantity, "120");
        assert_eq!(items[0].unit, "pcs");
    }

    #[test]
    fn test_moh_packaging_format() {
        let items = extract_items("7 | Ceftriaxone 1g Injection VIAL 12,000\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_number, "7");
        assert!(items[0].description.starts_with("Ceftriaxone"));
        assert_eq!(items[0].quantity, "12,000");
        assert_eq!(items[0].unit, "units");
    }

    #[test]
    fn test_fallback_synthesizes_item_number() {
        let text = "Latex examination gloves large 500 pieces\nDisposable face masks type II 2000 pcs\n";
        let items = extract_items(text);

        // The guard goes false once the first fallback item lands, so
        // only the first loose line is captured.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_number, "1");
        assert_eq!(items[0].description, "Latex examination gloves large");
        assert_eq!(items[0].quantity, "500");
        assert_eq!(items[0].unit, "pieces");
    }

    #[test]
    fn test_short_description_rejected() {
        // Cleaned description of 3 chars or fewer is not emitted.
        let items = extract_items("1. abc - 100 pieces\n");
        assert!(items.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let text = "1. Surgical Gloves - 500 pieces\n2. surgical gloves - 900 pieces\n";
        let items = extract_items(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_number, "1");
        assert_eq!(items[0].quantity, "500");
    }

    #[test]
    fn test_dedup_uses_hundred_char_prefix() {
        let long = "x".repeat(120);
        let text = format!("1. A{} - 10 pieces\n2. A{}zz - 20 pieces\n", long, long);
        let items = extract_items(&text);

        // Identical first 100 chars, later duplicate dropped.
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_arabic_item_language() {
        let items = extract_items("1. قفازات جراحية معقمة - 500 pieces\n");
        assert_eq!(items.len(), 1);
        assert!(items[0].has_arabic);
    }

    #[test]
    fn test_description_truncated_to_500() {
        let text = format!("1. {} - 10 pieces\n", "word ".repeat(200));
        let items = extract_items(&text);
        assert_eq!(items.len(), 1);
        assert!(items[0].description.chars().count() <= 500);
    }

    #[test]
    fn test_order_preserved() {
        let text = "1. Alpha dressing kits - 10 sets\n2. Beta suture packs - 20 sets\n3. Gamma drain tubes - 30 sets\n";
        let items = extract_items(text);
        let numbers: Vec<&str> = items.iter().map(|i| i.item_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }
}
