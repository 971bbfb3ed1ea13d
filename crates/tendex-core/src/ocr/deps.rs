//! External binary discovery and readiness checks.
//!
//! The pipeline depends on tesseract (recognition) and poppler's
//! pdftoppm (rasterization). Both must be present before any file is
//! touched; `check_dependencies` is the readiness surface callers gate
//! on.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Standard tesseract install locations, probed in order after the
/// configured path.
const TESSERACT_CANDIDATES: &[&str] = &[
    "/opt/homebrew/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/usr/bin/tesseract",
    "tesseract",
];

/// Result of the dependency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// A usable tesseract binary was found.
    pub tesseract_available: bool,

    /// Path of the tesseract binary that answered `--version`.
    pub tesseract_path: Option<PathBuf>,

    /// pdftoppm answered `-v`.
    pub poppler_available: bool,

    /// All dependencies present; processing may start.
    pub ready: bool,
}

fn probe(binary: &Path, arg: &str) -> bool {
    Command::new(binary)
        .arg(arg)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Find a usable tesseract binary: the configured path first, then the
/// standard install locations, then a bare-name lookup on PATH.
pub fn find_tesseract(configured: Option<&Path>) -> Option<PathBuf> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(TESSERACT_CANDIDATES.iter().map(PathBuf::from));

    for candidate in candidates {
        if probe(&candidate, "--version") {
            debug!("Found tesseract at {}", candidate.display());
            return Some(candidate);
        }
    }
    None
}

/// Check whether poppler's pdftoppm is available.
pub fn check_poppler() -> bool {
    // pdftoppm prints its version banner on stderr and exits 0 or 99
    // depending on the build; reaching it at all is what matters.
    Command::new("pdftoppm").arg("-v").output().is_ok()
}

/// Check all external dependencies.
pub fn check_dependencies(configured_tesseract: Option<&Path>) -> DependencyStatus {
    let tesseract_path = find_tesseract(configured_tesseract);
    let poppler_available = check_poppler();

    DependencyStatus {
        tesseract_available: tesseract_path.is_some(),
        ready: tesseract_path.is_some() && poppler_available,
        tesseract_path,
        poppler_available,
    }
}
