//! Batch command - process multiple tender PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use tendex_core::models::tender::TenderRecord;
use tendex_core::ocr::check_dependencies;
use tendex_core::tender::TenderExtractor;

use super::{fail, fail_with_details, process::build_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "tenders/*.pdf")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Department name recorded on extracted tenders
    #[arg(short, long, default_value = "Biomedical Engineering")]
    department: String,

    /// OCR languages (comma-separated tesseract codes)
    #[arg(short, long, default_value = "eng,ara")]
    languages: String,

    /// DPI for PDF rasterization
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// Maximum pages to process per PDF
    #[arg(long, default_value = "10")]
    max_pages: usize,

    /// Stop at the first record that carries extraction errors
    #[arg(long)]
    stop_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = build_config(&args.languages, args.dpi, args.max_pages, config_path)?;
    let deps = check_dependencies(config.ocr.tesseract_path.as_deref());
    if !deps.ready {
        fail_with_details("Missing dependencies", serde_json::to_value(&deps)?);
    }

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        fail(&format!("No PDF files match pattern: {}", args.input));
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let extractor = TenderExtractor::new(&config);
    let mut records: Vec<TenderRecord> = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(
            file.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let record =
            extractor.process_pdf(file, &args.department, Some(args.max_pages), false);

        if !record.errors.is_empty() {
            failed += 1;
            error!("Extraction errors for {}: {:?}", file.display(), record.errors);
            if args.stop_on_error {
                pb.abandon_with_message("stopped on error");
                fail(&format!("Extraction failed for {}", file.display()));
            }
        }

        if let Some(dir) = &args.output_dir {
            let out_path = dir
                .join(file.file_stem().unwrap_or_default())
                .with_extension("json");
            fs::write(&out_path, serde_json::to_string_pretty(&record)?)?;
            debug!("Wrote {}", out_path.display());
        }

        records.push(record);
        pb.inc(1);
    }

    pb.finish_with_message("done");

    // Aggregate goes to stdout when no output directory was given.
    if args.output_dir.is_none() {
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({ "success": true, "data": records }))?
        );
    }

    let total_items: usize = records.iter().map(|r| r.items_count).sum();
    eprintln!(
        "{} processed {} files ({} with errors), {} items in {:.1}s",
        style("✓").green(),
        records.len(),
        failed,
        total_items,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
