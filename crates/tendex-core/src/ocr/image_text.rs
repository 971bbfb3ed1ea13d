//! Image text service: base64 image in, text plus line boxes out.
//!
//! Thin request/response wrapper around the recognizer for
//! receipt-style documents. Any failure, including "no text found",
//! is reported inside the response envelope rather than raised.

use std::collections::BTreeMap;
use std::time::Instant;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OcrError, Result};
use crate::models::config::OcrConfig;

use super::tesseract::{OcrWord, TesseractRunner};

/// Crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Request for the image text service.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageTextRequest {
    /// Base64-encoded image data.
    pub image: String,

    /// Optional crop region applied before recognition.
    #[serde(default)]
    pub region: Option<Region>,
}

/// One recognized text line with its bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLineBox {
    /// Line text, words joined with single spaces.
    pub text: String,

    /// Mean word confidence, scaled to [0, 1].
    pub confidence: f32,

    /// Four corners, clockwise from top-left: [[x,y]; 4].
    #[serde(rename = "box")]
    pub corners: [[u32; 2]; 4],
}

/// Response envelope of the image text service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTextResponse {
    pub success: bool,
    pub text: String,
    pub boxes: Vec<TextLineBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageTextResponse {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            boxes: Vec::new(),
            processing_time_ms: None,
            error: Some(error.into()),
        }
    }
}

/// Extracts text and line boxes from arbitrary images.
pub struct ImageTextExtractor {
    runner: TesseractRunner,
}

impl ImageTextExtractor {
    /// Build an extractor from OCR configuration.
    pub fn new(config: &OcrConfig) -> std::result::Result<Self, OcrError> {
        Ok(Self {
            runner: TesseractRunner::from_config(config)?,
        })
    }

    /// Run the service: decode, crop, recognize, group into lines.
    pub fn extract(&self, request: &ImageTextRequest) -> ImageTextResponse {
        let started = Instant::now();

        let (text, boxes) = match self.try_extract(request) {
            Ok(result) => result,
            Err(e) => return ImageTextResponse::failure(e.to_string()),
        };

        if boxes.is_empty() {
            return ImageTextResponse::failure("No text detected");
        }

        ImageTextResponse {
            success: true,
            text,
            boxes,
            processing_time_ms: Some(started.elapsed().as_millis() as u64),
            error: None,
        }
    }

    fn try_extract(&self, request: &ImageTextRequest) -> Result<(String, Vec<TextLineBox>)> {
        let bytes = BASE64
            .decode(request.image.as_bytes())
            .map_err(|e| OcrError::InvalidImage(format!("bad base64 image data: {}", e)))?;

        let mut image = image::load_from_memory(&bytes)?;

        if let Some(region) = request.region {
            debug!(
                "Cropping to region {}x{}+{}+{}",
                region.width, region.height, region.x, region.y
            );
            image = image.crop_imm(region.x, region.y, region.width, region.height);
        }

        let words = self.runner.recognize_image(&image)?;
        Ok(group_into_lines(&words))
    }
}

/// Group confident words into reading-order lines keyed by the
/// recognizer's (block, paragraph, line) structure.
fn group_into_lines(words: &[OcrWord]) -> (String, Vec<TextLineBox>) {
    let mut lines: BTreeMap<(u32, u32, u32), Vec<&OcrWord>> = BTreeMap::new();

    for word in words {
        if word.confidence > 0.0 && !word.text.trim().is_empty() {
            lines
                .entry((word.block, word.paragraph, word.line))
                .or_default()
                .push(word);
        }
    }

    let mut texts = Vec::new();
    let mut boxes = Vec::new();

    for line_words in lines.values() {
        let text = line_words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let confidence = line_words.iter().map(|w| w.confidence).sum::<f32>()
            / line_words.len() as f32
            / 100.0;

        let left = line_words.iter().map(|w| w.left).min().unwrap_or(0);
        let top = line_words.iter().map(|w| w.top).min().unwrap_or(0);
        let right = line_words.iter().map(|w| w.left + w.width).max().unwrap_or(0);
        let bottom = line_words.iter().map(|w| w.top + w.height).max().unwrap_or(0);

        boxes.push(TextLineBox {
            text: text.clone(),
            confidence,
            corners: [[left, top], [right, top], [right, bottom], [left, bottom]],
        });
        texts.push(text);
    }

    (texts.join("\n"), boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(text: &str, conf: f32, block: u32, line: u32, left: u32) -> OcrWord {
        OcrWord {
            text: text.to_string(),
            confidence: conf,
            left,
            top: 10,
            width: 40,
            height: 12,
            block,
            paragraph: 1,
            line,
        }
    }

    #[test]
    fn test_words_grouped_by_line() {
        let words = vec![
            word("TOTAL", 95.0, 1, 1, 10),
            word("12.500", 90.0, 1, 1, 60),
            word("KWD", 88.0, 1, 2, 10),
        ];
        let (text, boxes) = group_into_lines(&words);

        assert_eq!(text, "TOTAL 12.500\nKWD");
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].corners[0], [10, 10]);
        assert_eq!(boxes[0].corners[2], [100, 22]);
    }

    #[test]
    fn test_low_confidence_words_dropped() {
        let words = vec![word("noise", -1.0, 1, 1, 0), word("keep", 80.0, 1, 2, 0)];
        let (text, boxes) = group_into_lines(&words);

        assert_eq!(text, "keep");
        assert_eq!(boxes.len(), 1);
        assert!((boxes[0].confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        let (text, boxes) = group_into_lines(&[]);
        assert!(text.is_empty());
        assert!(boxes.is_empty());
    }
}
