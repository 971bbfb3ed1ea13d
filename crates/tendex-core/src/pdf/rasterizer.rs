//! PDF page rasterization via poppler's pdftoppm.

use std::path::{Path, PathBuf};
use std::process::Command;

use lopdf::Document;
use tracing::{debug, trace};

use super::Result;
use crate::error::PdfError;

/// Rasterizes PDF pages to PNG images by shelling out to `pdftoppm`.
pub struct PdfRasterizer {
    dpi: u32,
}

impl PdfRasterizer {
    /// Create a rasterizer rendering at the given DPI.
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Number of pages in the PDF.
    pub fn page_count(&self, pdf_path: &Path) -> Result<usize> {
        let document =
            Document::load(pdf_path).map_err(|e| PdfError::Parse(e.to_string()))?;
        let pages = document.get_pages().len();
        if pages == 0 {
            return Err(PdfError::NoPages);
        }
        Ok(pages)
    }

    /// Render pages `first_page..=last_page` (1-indexed, clamped to the
    /// document length) into `out_dir`, returning the PNG paths in page
    /// order.
    pub fn rasterize(
        &self,
        pdf_path: &Path,
        first_page: usize,
        last_page: usize,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        if !pdf_path.exists() {
            return Err(PdfError::NotFound(pdf_path.display().to_string()));
        }

        let page_count = self.page_count(pdf_path)?;
        let last_page = last_page.min(page_count);

        debug!(
            "Rasterizing pages {}-{} of {} at {} DPI",
            first_page,
            last_page,
            pdf_path.display(),
            self.dpi
        );

        let prefix = out_dir.join("page");
        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(first_page.to_string())
            .arg("-l")
            .arg(last_page.to_string())
            .arg(pdf_path)
            .arg(&prefix)
            .output()
            .map_err(|e| PdfError::Rasterization(format!("failed to run pdftoppm: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdfError::Rasterization(format!(
                "pdftoppm exited with {}: {}",
                output.status, stderr
            )));
        }

        // pdftoppm names output "page-01.png", "page-1.png", ... depending
        // on the page count; collect and sort to restore page order.
        let mut pages: Vec<PathBuf> = std::fs::read_dir(out_dir)
            .map_err(|e| PdfError::Rasterization(e.to_string()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().and_then(|e| e.to_str()) == Some("png")
                    && path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .is_some_and(|s| s.starts_with("page-"))
            })
            .collect();
        // Numeric sort: pdftoppm only zero-pads up to the document's
        // digit count.
        pages.sort_by_key(|path| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.trim_start_matches("page-").parse::<usize>().ok())
                .unwrap_or(usize::MAX)
        });

        if pages.is_empty() {
            return Err(PdfError::Rasterization(
                "pdftoppm produced no page images".to_string(),
            ));
        }

        trace!("Rasterized {} pages", pages.len());
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_of_missing_file_fails() {
        let rasterizer = PdfRasterizer::new(300);
        assert!(rasterizer.page_count(Path::new("/nonexistent/file.pdf")).is_err());
    }

    #[test]
    fn test_rasterize_missing_file_fails() {
        let rasterizer = PdfRasterizer::new(300);
        let tmp = tempfile::tempdir().unwrap();
        let result = rasterizer.rasterize(
            Path::new("/nonexistent/file.pdf"),
            1,
            10,
            tmp.path(),
        );
        assert!(matches!(result, Err(PdfError::NotFound(_))));
    }
}
