//! Command-line path validation
//!
//! Runs before any conversion; a failure here aborts the whole run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Check the input and output directories.
///
/// - `input` must be a directory
/// - `output`, if it exists, must be a directory
/// - an existing `output` must be empty unless `force` is set
pub fn validate_paths(input: &Path, output: &Path, force: bool) -> Result<()> {
    if !input.is_dir() {
        anyhow::bail!(
            "The input directory should be a directory: {}",
            input.display()
        );
    }

    if output.exists() {
        if !output.is_dir() {
            anyhow::bail!(
                "The output directory should be a directory: {}",
                output.display()
            );
        }

        if !force {
            let mut entries = fs::read_dir(output)
                .with_context(|| format!("Failed to read output directory: {}", output.display()))?;
            if entries.next().is_some() {
                anyhow::bail!(
                    "The output directory should be empty (use --force to overwrite): {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}
