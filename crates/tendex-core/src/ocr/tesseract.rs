//! Tesseract invocation and TSV output parsing.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::DynamicImage;
use tracing::{debug, trace};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::deps::find_tesseract;

/// One recognized word from tesseract's TSV output.
#[derive(Debug, Clone)]
pub struct OcrWord {
    /// Recognized text.
    pub text: String,
    /// Recognition confidence (0-100); negative for non-word rows.
    pub confidence: f32,
    /// Left edge in pixels.
    pub left: u32,
    /// Top edge in pixels.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Block index within the page.
    pub block: u32,
    /// Paragraph index within the block.
    pub paragraph: u32,
    /// Line index within the paragraph.
    pub line: u32,
}

/// Runs the external tesseract binary in TSV output mode.
pub struct TesseractRunner {
    binary: PathBuf,
    language: String,
    psm: u32,
    oem: u32,
}

impl TesseractRunner {
    /// Build a runner from configuration, discovering the binary.
    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        let binary = find_tesseract(config.tesseract_path.as_deref())
            .ok_or(OcrError::TesseractNotFound)?;

        Ok(Self {
            binary,
            language: config.language_arg(),
            psm: config.psm,
            oem: config.oem,
        })
    }

    /// Recognize words in an image file.
    pub fn recognize_file(&self, image_path: &Path) -> Result<Vec<OcrWord>, OcrError> {
        trace!("Running tesseract on {}", image_path.display());

        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("--oem")
            .arg(self.oem.to_string())
            .arg("--psm")
            .arg(self.psm.to_string())
            .arg("tsv")
            .output()
            .map_err(|e| OcrError::Recognition(format!("failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!(
                "tesseract exited with {}: {}",
                output.status, stderr
            )));
        }

        let tsv = String::from_utf8_lossy(&output.stdout);
        parse_tsv(&tsv)
    }

    /// Recognize words in an in-memory image via a scratch PNG.
    pub fn recognize_image(&self, image: &DynamicImage) -> Result<Vec<OcrWord>, OcrError> {
        let scratch = tempfile::Builder::new()
            .prefix("tendex_ocr_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        image
            .save(scratch.path())
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        self.recognize_file(scratch.path())
    }
}

/// Parse tesseract TSV output into word records.
///
/// Columns: level page block par line word left top width height conf
/// text. Word rows have level 5; everything else is layout structure.
fn parse_tsv(tsv: &str) -> Result<Vec<OcrWord>, OcrError> {
    let mut words = Vec::new();

    for line in tsv.lines().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }
        if fields[0] != "5" {
            continue;
        }

        let parse_u32 = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| OcrError::OutputParse(format!("bad TSV field: {:?}", s)))
        };

        words.push(OcrWord {
            block: parse_u32(fields[2])?,
            paragraph: parse_u32(fields[3])?,
            line: parse_u32(fields[4])?,
            left: parse_u32(fields[6])?,
            top: parse_u32(fields[7])?,
            width: parse_u32(fields[8])?,
            height: parse_u32(fields[9])?,
            confidence: fields[10].parse::<f32>().unwrap_or(-1.0),
            text: fields[11].to_string(),
        });
    }

    debug!("Parsed {} word rows from tesseract TSV", words.len());
    Ok(words)
}
