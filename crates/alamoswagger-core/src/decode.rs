//! Generation of the `ResponseObjectSerializable` decode initializer.
//!
//! Each field becomes one `if let` guard. A key that is absent or holds a value
//! of the wrong type fails its guard and the property stays `nil`; nothing else
//! in the initializer depends on it.

use crate::error::{ConvertError, ConvertResult};
use crate::field::{DecodeStrategy, Field};
use crate::template::{Bindings, templates};

/// Sort fields by declared type name.
///
/// The sort is stable, so fields sharing a type keep their relative order.
pub fn sort_by_declared_type(fields: &mut [Field]) {
    fields.sort_by(|a, b| a.declared_type.cmp(&b.declared_type));
}

/// The Swift type the raw value is cast to before assignment.
pub fn read_type(field: &Field) -> String {
    match field.decode_strategy() {
        DecodeStrategy::Primitive => field.declared_type.clone(),
        DecodeStrategy::Custom => "AnyObject".to_string(),
        DecodeStrategy::CustomList => "[AnyObject]".to_string(),
    }
}

/// The expression assigned to the property once the guard succeeds.
pub fn assigned_value(field: &Field) -> String {
    let raw = format!("{}Val", field.name);
    match field.decode_strategy() {
        DecodeStrategy::Primitive => raw,
        DecodeStrategy::Custom => {
            format!("{}(response, representation: {raw})", field.declared_type)
        }
        DecodeStrategy::CustomList => format!(
            "{raw}.map({{ {}(response, representation: $0) }})",
            field.element_type()
        ),
    }
}

/// Render the guarded assignment for one field.
pub fn decode_guard(field: &Field) -> ConvertResult<String> {
    let bindings = Bindings::new()
        .with("name", field.name.as_str())
        .with("json_key", field.json_key.as_str())
        .with("read_type", read_type(field))
        .with("value", assigned_value(field));

    templates::DECODE_GUARD.render(&bindings)
}

/// Render the full `init?(response:representation:)` initializer.
///
/// Guards are ordered by declared type name. Fails if `fields` is empty.
pub fn generate_decode_method(fields: &[Field]) -> ConvertResult<String> {
    if fields.is_empty() {
        return Err(ConvertError::NothingToDecode);
    }

    let mut sorted = fields.to_vec();
    sort_by_declared_type(&mut sorted);

    let guards = sorted
        .iter()
        .map(decode_guard)
        .collect::<ConvertResult<Vec<_>>>()?;

    templates::DECODE_METHOD.render(&Bindings::new().with("guards", guards.join("\n")))
}
