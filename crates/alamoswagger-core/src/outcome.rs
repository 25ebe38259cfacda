//! Per-file conversion results.

use crate::error::{ConvertError, ConvertResult};
use crate::generator::{GeneratorOptions, generate_serializable_class};
use std::path::{Path, PathBuf};

/// What happened to one input file.
///
/// Conversion never panics or aborts the run: every failure is carried here
/// with its reason so the caller decides how to report it.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was converted; `output` is the full replacement source
    Converted { source: PathBuf, output: String },
    /// The file could not be converted and no output should be written
    Failed { source: PathBuf, error: ConvertError },
}

impl FileOutcome {
    /// Read and convert one model file.
    pub fn convert(source: &Path, options: &GeneratorOptions) -> Self {
        Self::from_result(source, generate_serializable_class(source, options))
    }

    pub fn from_result(source: &Path, result: ConvertResult<String>) -> Self {
        let source = source.to_path_buf();
        match result {
            Ok(output) => FileOutcome::Converted { source, output },
            Err(error) => FileOutcome::Failed { source, error },
        }
    }

    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Converted { source, .. } | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}
