//! CLI subcommands.

pub mod batch;
pub mod check;
pub mod config;
pub mod image_text;
pub mod process;

use serde_json::json;

/// Print a `{"success": false, "error": ...}` envelope and exit 1.
///
/// Error envelopes go to stdout so callers reading the stream always
/// get valid JSON, matching the service contract.
pub fn fail(error: &str) -> ! {
    println!("{}", json!({ "success": false, "error": error }));
    std::process::exit(1);
}

/// Like [`fail`] but with a structured `details` payload.
pub fn fail_with_details(error: &str, details: serde_json::Value) -> ! {
    println!(
        "{}",
        json!({ "success": false, "error": error, "details": details })
    );
    std::process::exit(1);
}
