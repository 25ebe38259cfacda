//! alamoswagger-core - Decode-initializer generation for swagger-codegen Swift models
//!
//! swagger-codegen emits Swift model classes that can encode themselves to JSON
//! but not decode. This crate reads such a class and produces a replacement that
//! also conforms to `ResponseObjectSerializable`:
//!
//! - [`extract`] recovers fields, JSON keys, class name, imports and the
//!   `encodeToJSON` method with line-oriented patterns
//! - [`Field`] classifies each field as primitive, custom or list-of-custom
//! - [`decode`] renders one guarded assignment per field
//! - [`ModelFile`] renders the full replacement file from [`template`]s
//! - [`FileOutcome`] reports per-file success or failure
//!
//! # Example
//!
//! ```no_run
//! use alamoswagger_core::{FileOutcome, GeneratorOptions};
//! use std::path::Path;
//!
//! match FileOutcome::convert(Path::new("Models/Pet.swift"), &GeneratorOptions::default()) {
//!     FileOutcome::Converted { output, .. } => println!("{output}"),
//!     FileOutcome::Failed { error, .. } => eprintln!("{error}"),
//! }
//! ```

mod error;
mod field;
mod outcome;

pub mod decode;
pub mod extract;
pub mod generator;
pub mod template;

pub use decode::generate_decode_method;
pub use error::{ConvertError, ConvertResult, ErrorKind};
pub use extract::extract_fields;
pub use field::{DecodeStrategy, Field, PRIMITIVE_TYPES};
pub use generator::{
    DEFAULT_ATTRIBUTION, GeneratorOptions, ModelFile, generate_from_source,
    generate_serializable_class,
};
pub use outcome::FileOutcome;
pub use template::{Bindings, Template, render};
