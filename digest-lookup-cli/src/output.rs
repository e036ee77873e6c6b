use clap::ValueEnum;
use digest_lookup::{AnalysisReport, AnalysisStatus};
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

#[derive(Serialize)]
struct GeneratedDigest<'a> {
    hash: &'a str,
    registered: bool,
}

/// Renders an analysis result, without a trailing newline.
pub fn render_report(report: &AnalysisReport, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => {
            let status = match report.status {
                AnalysisStatus::Found => {
                    format!("Password found → {}", report.password.as_deref().unwrap_or_default())
                }
                _ => report.message.clone(),
            };
            Ok(format!("Input Hash: {}\nStatus: {}", report.input_hash, status))
        }
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

#[derive(Serialize)]
struct Message<'a> {
    message: &'a str,
}

/// Renders an informational reply (help, usage, unknown command).
pub fn render_message(message: &str, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(message.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Message { message })?),
    }
}

/// Renders a generated digest. An empty digest means nothing was registered.
pub fn render_digest(digest: &str, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text if digest.is_empty() => {
            Ok("Nothing to hash: enter a non-empty password.".to_string())
        }
        OutputFormat::Text => Ok(format!("Generated Hash: {digest}")),
        OutputFormat::Json => Ok(serde_json::to_string(&GeneratedDigest {
            hash: digest,
            registered: !digest.is_empty(),
        })?),
    }
}
