//! CLI application for tender OCR extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, check, config, image_text, process};

/// Tender OCR - Extract structured tender data from scanned PDFs
#[derive(Parser)]
#[command(name = "tendex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single tender PDF
    Process(process::ProcessArgs),

    /// Process multiple tender PDFs
    Batch(batch::BatchArgs),

    /// Check external dependencies (tesseract, poppler)
    Check(check::CheckArgs),

    /// Extract text and boxes from an image
    ImageText(image_text::ImageTextArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity. Structured output goes to
    // stdout, so logs stay on stderr.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Check(args) => check::run(args).await,
        Commands::ImageText(args) => image_text::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
