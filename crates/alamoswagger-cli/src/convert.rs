//! Conversion loop: one model file at a time, failures logged and skipped

use crate::discover;
use alamoswagger_core::{FileOutcome, GeneratorOptions};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Files converted and files skipped during one run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// (source, destination) for every file written
    pub converted: Vec<(PathBuf, PathBuf)>,

    /// (source, reason) for every file that produced no output
    pub failed: Vec<(PathBuf, String)>,
}

/// Where the converted form of `source` is written
pub fn destination_path(output_dir: &Path, source: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(source),
    }
}

/// Convert every model file in `input_dir` into `output_dir`.
///
/// Only failing to list the input or create the output directory is an error;
/// per-file failures end up in the summary.
pub fn run(input_dir: &Path, output_dir: &Path, options: &GeneratorOptions) -> Result<RunSummary> {
    let sources = discover::input_paths(input_dir)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut summary = RunSummary::default();

    for source in sources {
        match FileOutcome::convert(&source, options) {
            FileOutcome::Converted { source, output } => {
                let destination = destination_path(output_dir, &source);
                match fs::write(&destination, output) {
                    Ok(()) => {
                        info!(
                            source = %source.display(),
                            destination = %destination.display(),
                            "converted"
                        );
                        summary.converted.push((source, destination));
                    }
                    Err(err) => {
                        error!(
                            source = %source.display(),
                            destination = %destination.display(),
                            error = %err,
                            "couldn't write converted model"
                        );
                        summary.failed.push((source, err.to_string()));
                    }
                }
            }
            FileOutcome::Failed { source, error } => {
                error!(source = %source.display(), error = %error, "couldn't convert");
                summary.failed.push((source, error.to_string()));
            }
        }
    }

    info!(
        converted = summary.converted.len(),
        failed = summary.failed.len(),
        "conversion finished"
    );
    if !summary.failed.is_empty() {
        warn!(
            failed = summary.failed.len(),
            "some models were not converted"
        );
    }

    Ok(summary)
}
