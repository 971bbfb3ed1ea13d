//! Check command - report external dependency status.

use std::path::PathBuf;

use clap::Args;
use console::style;

use tendex_core::ocr::check_dependencies;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Explicit tesseract binary path to probe first
    #[arg(long)]
    tesseract_path: Option<PathBuf>,
}

pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let status = check_dependencies(args.tesseract_path.as_deref());

    println!("{}", serde_json::to_string_pretty(&status)?);

    if !status.ready {
        eprintln!(
            "{} install tesseract and poppler before processing",
            style("not ready:").red()
        );
        std::process::exit(1);
    }

    Ok(())
}
