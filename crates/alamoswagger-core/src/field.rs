//! Field model and type classification.
//!
//! A [`Field`] is one public property of a generated model, paired with the
//! JSON key its `encodeToJSON` method writes it under. Classification is purely
//! syntactic: the declared type token is compared against a closed set of
//! primitive names after the list brackets are removed.

/// Types that decode directly with a cast and need no nested construction.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "String",
    "Int",
    "Double",
    "Bool",
    "UInt",
    "Float",
    "Character",
];

/// How a field's value is read out of the untyped representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// Cast straight to the declared type (`Int`, `[String]`, ...)
    Primitive,
    /// Read as `AnyObject` and construct the custom type from it
    Custom,
    /// Read as `[AnyObject]` and construct the element type from each entry
    CustomList,
}

/// A single model property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Property name in the model, e.g. `anInt`.
    pub name: String,

    /// Declared type with optional markers removed, e.g. `Int` or `[CustomType]`.
    pub declared_type: String,

    /// Key used in the JSON representation, e.g. `an_int`.
    pub json_key: String,
}

impl Field {
    /// Create a field, stripping every `?` from the declared type.
    pub fn new(
        name: impl Into<String>,
        declared_type: impl AsRef<str>,
        json_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.as_ref().replace('?', ""),
            json_key: json_key.into(),
        }
    }

    /// The declared type without list brackets.
    pub fn element_type(&self) -> String {
        self.declared_type.replace(['[', ']'], "")
    }

    /// True unless the bracket-stripped type is one of [`PRIMITIVE_TYPES`].
    pub fn is_custom_type(&self) -> bool {
        let element = self.element_type();
        !PRIMITIVE_TYPES.contains(&element.as_str())
    }

    /// True if the declared type is written as `[T]`.
    pub fn is_list_type(&self) -> bool {
        self.declared_type.contains('[') && self.declared_type.contains(']')
    }

    pub fn decode_strategy(&self) -> DecodeStrategy {
        match (self.is_custom_type(), self.is_list_type()) {
            (false, _) => DecodeStrategy::Primitive,
            (true, false) => DecodeStrategy::Custom,
            (true, true) => DecodeStrategy::CustomList,
        }
    }
}
