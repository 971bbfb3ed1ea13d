//! Image-text command - OCR an arbitrary image into text plus boxes.
//!
//! Reads a `{"image": <base64>, "region": {...}}` request from stdin
//! (the original service contract) or encodes a file given with
//! `--image`. The response envelope always goes to stdout.

use std::io::Read;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::Args;

use tendex_core::ocr::{ImageTextExtractor, ImageTextRequest, Region};

use super::{fail, process::build_config};

/// Arguments for the image-text command.
#[derive(Args)]
pub struct ImageTextArgs {
    /// Image file to OCR instead of reading a JSON request from stdin
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// OCR languages (comma-separated tesseract codes)
    #[arg(short, long, default_value = "eng,ara")]
    languages: String,

    /// Crop region as x,y,width,height
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,
}

fn parse_region(s: &str) -> Result<Region, String> {
    let parts: Vec<u32> = s
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid region {:?}: {}", s, e))?;

    match parts.as_slice() {
        [x, y, width, height] => Ok(Region {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
        }),
        _ => Err(format!("expected x,y,width,height, got {:?}", s)),
    }
}

fn read_request(args: &ImageTextArgs) -> Result<ImageTextRequest, String> {
    if let Some(path) = &args.image {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        return Ok(ImageTextRequest {
            image: BASE64.encode(bytes),
            region: args.region,
        });
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read stdin: {}", e))?;

    let mut request: ImageTextRequest =
        serde_json::from_str(&input).map_err(|e| format!("invalid request JSON: {}", e))?;
    if request.image.is_empty() {
        return Err("No image data provided".to_string());
    }
    if request.region.is_none() {
        request.region = args.region;
    }
    Ok(request)
}

pub async fn run(args: ImageTextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let request = match read_request(&args) {
        Ok(request) => request,
        Err(e) => fail(&e),
    };

    let config = build_config(&args.languages, 300, 1, config_path)?;
    let extractor = match ImageTextExtractor::new(&config.ocr) {
        Ok(extractor) => extractor,
        Err(e) => fail(&e.to_string()),
    };

    let response = extractor.extract(&request);
    println!("{}", serde_json::to_string(&response)?);

    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}
