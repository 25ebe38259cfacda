//! Whole-file generation.
//!
//! [`ModelFile`] gathers everything the output template needs from one source
//! model: its sorted fields, class name, imports, the preserved `encodeToJSON`
//! method and the generated decode initializer. Nothing here touches the
//! filesystem except [`generate_serializable_class`], which reads its input.

use crate::decode::{generate_decode_method, sort_by_declared_type};
use crate::error::{ConvertError, ConvertResult};
use crate::extract;
use crate::field::Field;
use crate::template::{Bindings, templates};
use std::path::{Path, PathBuf};

/// Attribution line written into every generated header.
pub const DEFAULT_ATTRIBUTION: &str =
    "Generated by swagger-codegen, made Alamofire compatible by Alamoswagger";

/// Knobs for the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Attribution text for the header comment
    pub attribution: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

/// Per-file generation context.
#[derive(Debug, Clone)]
pub struct ModelFile {
    /// Path the source was read from.
    pub source_path: PathBuf,

    /// Header comment naming the source file.
    pub header: String,

    /// `import` lines in source order.
    pub imports: Vec<String>,

    /// Class name taken from the public class declaration.
    pub class_name: String,

    /// Fields sorted by declared type.
    pub fields: Vec<Field>,

    /// The source's `encodeToJSON` method, verbatim.
    pub encode_method: String,

    /// The generated `init?(response:representation:)`.
    pub decode_method: String,
}

impl ModelFile {
    /// Build the generation context for one source model.
    pub fn from_source(
        source_path: &Path,
        source: &str,
        options: &GeneratorOptions,
    ) -> ConvertResult<Self> {
        let file = file_name(source_path);

        let mut fields = extract::extract_fields(source)?;
        sort_by_declared_type(&mut fields);
        if fields.is_empty() {
            return Err(ConvertError::NoFields { file });
        }

        let class_name = extract::class_name(source)
            .ok_or_else(|| ConvertError::ClassNameNotFound { file: file.clone() })?
            .to_string();

        let imports = extract::import_lines(source)
            .into_iter()
            .map(str::to_string)
            .collect();

        let encode_method = extract::encode_method(source)
            .ok_or_else(|| ConvertError::EncodeMethodNotFound { file: file.clone() })?
            .to_string();

        let decode_method = generate_decode_method(&fields)?;
        let header = header_comment(&file, &options.attribution)?;

        Ok(Self {
            source_path: source_path.to_path_buf(),
            header,
            imports,
            class_name,
            fields,
            encode_method,
            decode_method,
        })
    }

    /// Render the complete replacement source file.
    pub fn render(&self) -> ConvertResult<String> {
        let declarations = self
            .fields
            .iter()
            .map(|field| {
                templates::FIELD_DECLARATION.render(
                    &Bindings::new()
                        .with("name", field.name.as_str())
                        .with("declared_type", field.declared_type.as_str()),
                )
            })
            .collect::<ConvertResult<Vec<_>>>()?;

        let bindings = Bindings::new()
            .with("header", self.header.as_str())
            .with("imports", self.imports.join("\n"))
            .with("class_name", self.class_name.as_str())
            .with("declarations", declarations.join("\n"))
            .with("decode_method", self.decode_method.as_str())
            .with("encode_method", self.encode_method.as_str());

        templates::MODEL_CLASS.render(&bindings)
    }
}

/// The `//` comment block opening every generated file.
pub fn header_comment(file_name: &str, attribution: &str) -> ConvertResult<String> {
    templates::HEADER.render(
        &Bindings::new()
            .with("file_name", file_name)
            .with("attribution", attribution),
    )
}

/// Generate the serializable class from source text already in memory.
pub fn generate_from_source(
    source_path: &Path,
    source: &str,
    options: &GeneratorOptions,
) -> ConvertResult<String> {
    ModelFile::from_source(source_path, source, options)?.render()
}

/// Read a model file and generate its serializable replacement.
pub fn generate_serializable_class(
    source_path: &Path,
    options: &GeneratorOptions,
) -> ConvertResult<String> {
    let source = std::fs::read_to_string(source_path).map_err(|source| ConvertError::Io {
        path: source_path.to_path_buf(),
        source,
    })?;

    generate_from_source(source_path, &source, options)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
