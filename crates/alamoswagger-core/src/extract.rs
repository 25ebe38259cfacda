//! Line-oriented extraction rules for swagger-codegen Swift models.
//!
//! The input is always the output of one generator, so each piece of structure
//! is recovered by its own anchored pattern instead of a Swift parser:
//!
//! | Rule                  | Matches                                             |
//! |-----------------------|-----------------------------------------------------|
//! | [`declared_fields`]   | `public var anInt: Int?`                            |
//! | [`json_key_mappings`] | `nillableDictionary["an_int"] = self.anInt`         |
//! | [`class_name`]        | `public class ExampleClass: JSONEncodable {`        |
//! | [`import_lines`]      | `import Foundation`                                 |
//! | [`encode_method`]     | `func encodeToJSON() ... return dictionary\n    }`  |

use crate::error::{ConvertError, ConvertResult};
use crate::field::Field;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Safe: patterns are literals covered by tests
fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("extraction pattern should compile")
}

static FIELD_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"(?m)^[ \t]*public[ \t]+var[ \t]+(\w+)[ \t]*:[ \t]*([^=/\r\n]*[^=/\s])[ \t]*(?:(?:=|//)[^\r\n]*)?\r?$",
    )
});

static JSON_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r#"(?m)^[ \t]*\w+\[[ \t]*"([^"]*)"[ \t]*\][ \t]*=[ \t]*self\.(\w+)(?:\??\.encodeToJSON\(\))?[ \t]*\r?$"#,
    )
});

static CLASS_DECLARATION: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?m)^[ \t]*public[ \t]+(?:final[ \t]+)?class[ \t]+(\w+)[ \t]*:"));

static IMPORT: Lazy<Regex> = Lazy::new(|| pattern(r"(?m)^import[ \t][^\r\n]*"));

static ENCODE_METHOD: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?s)func encodeToJSON\b.*?\n[ \t]*return\b[^\n]*\n\s*\}"));

/// Every `(name, declared type)` pair from `public var` lines, in source order.
///
/// The type is returned as written, optional marker included.
pub fn declared_fields(source: &str) -> Vec<(String, String)> {
    FIELD_DECLARATION
        .captures_iter(source)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Every `(name, json key)` pair assigned into the encoding dictionary, in source order.
pub fn json_key_mappings(source: &str) -> Vec<(String, String)> {
    JSON_ASSIGNMENT
        .captures_iter(source)
        .map(|caps| (caps[2].to_string(), caps[1].to_string()))
        .collect()
}

/// Merge declarations and JSON mappings into fields.
///
/// Fields come back in JSON-mapping order. Fails when a name appears on only
/// one side.
pub fn extract_fields(source: &str) -> ConvertResult<Vec<Field>> {
    let types: IndexMap<String, String> = declared_fields(source).into_iter().collect();
    let keys: IndexMap<String, String> = json_key_mappings(source).into_iter().collect();

    let mut undeclared: Vec<String> = keys
        .keys()
        .filter(|name| !types.contains_key(*name))
        .cloned()
        .collect();
    let mut unmapped: Vec<String> = types
        .keys()
        .filter(|name| !keys.contains_key(*name))
        .cloned()
        .collect();

    if !undeclared.is_empty() || !unmapped.is_empty() {
        undeclared.sort();
        unmapped.sort();
        return Err(ConvertError::InconsistentFields {
            undeclared,
            unmapped,
        });
    }

    Ok(keys
        .into_iter()
        .map(|(name, key)| {
            let declared = &types[&name];
            Field::new(name, declared, key)
        })
        .collect())
}

/// Name of the first public class declared with a conformance list.
pub fn class_name(source: &str) -> Option<&str> {
    CLASS_DECLARATION
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Top-level `import` lines, verbatim.
pub fn import_lines(source: &str) -> Vec<&str> {
    IMPORT.find_iter(source).map(|m| m.as_str()).collect()
}

/// The `encodeToJSON` method from its signature to the brace closing it.
pub fn encode_method(source: &str) -> Option<&str> {
    ENCODE_METHOD.find(source).map(|m| m.as_str())
}
