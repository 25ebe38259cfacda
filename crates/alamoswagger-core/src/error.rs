//! Error types for model conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error type for a single model file's conversion.
///
/// Every variant is fatal to the file being converted and to nothing else.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The model file could not be read
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Declared fields and JSON-encoded fields disagree
    #[error(
        "inconsistent field set: mapped but not declared [{}], declared but not mapped [{}]",
        undeclared.join(", "),
        unmapped.join(", ")
    )]
    InconsistentFields {
        undeclared: Vec<String>,
        unmapped: Vec<String>,
    },

    /// No public vars were found
    #[error("couldn't find a list of public vars in the file {file}")]
    NoFields { file: String },

    /// The decode initializer was asked to cover zero fields
    #[error("no fields to decode")]
    NothingToDecode,

    /// No public class declaration was found
    #[error("couldn't find class name in the file {file}")]
    ClassNameNotFound { file: String },

    /// The source has no encodeToJSON method to preserve
    #[error("there should be an encodeToJSON method in the file {file}")]
    EncodeMethodNotFound { file: String },

    /// A template could not be rendered with the given bindings
    #[error("failed to render template {template}: {reason}")]
    Render { template: String, reason: String },
}

/// Coarse classification of a [`ConvertError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading the candidate file failed
    Io,
    /// Declared fields and JSON keys are inconsistent
    Extraction,
    /// Fields, class declaration or encode method are missing
    MissingStructure,
    /// The templating step rejected its bindings
    Render,
}

impl ConvertError {
    /// Returns the taxonomy bucket this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Io { .. } => ErrorKind::Io,
            ConvertError::InconsistentFields { .. } => ErrorKind::Extraction,
            ConvertError::NoFields { .. }
            | ConvertError::NothingToDecode
            | ConvertError::ClassNameNotFound { .. }
            | ConvertError::EncodeMethodNotFound { .. } => ErrorKind::MissingStructure,
            ConvertError::Render { .. } => ErrorKind::Render,
        }
    }

    pub(crate) fn render(template: &str, reason: impl Into<String>) -> Self {
        ConvertError::Render {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}
