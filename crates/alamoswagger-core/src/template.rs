//! Minimal placeholder templating.
//!
//! Templates are embedded Swift text with `{{ name }}` placeholders. Rendering
//! is a single pass: bound values are inserted verbatim and never re-scanned,
//! so Swift braces inside a value are safe. Every placeholder must be bound and
//! every binding must be used.

use crate::error::{ConvertError, ConvertResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

#[allow(clippy::expect_used)] // Safe: literal pattern
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern should compile"));

/// Embedded output templates.
pub mod templates {
    use super::Template;

    pub const MODEL_CLASS: Template = Template::document(
        "model_class.swift",
        include_str!("../templates/model_class.swift.tmpl"),
    );
    pub const HEADER: Template = Template::fragment(
        "header.swift",
        include_str!("../templates/header.swift.tmpl"),
    );
    pub const FIELD_DECLARATION: Template = Template::fragment(
        "field_declaration.swift",
        include_str!("../templates/field_declaration.swift.tmpl"),
    );
    pub const DECODE_METHOD: Template = Template::fragment(
        "decode_method.swift",
        include_str!("../templates/decode_method.swift.tmpl"),
    );
    pub const DECODE_GUARD: Template = Template::fragment(
        "decode_guard.swift",
        include_str!("../templates/decode_guard.swift.tmpl"),
    );
}

/// A named template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    text: &'static str,
    /// Fragments drop the trailing newline so they can be spliced mid-line
    fragment: bool,
}

impl Template {
    /// A template whose output keeps its final newline, e.g. a whole file.
    pub const fn document(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            text,
            fragment: false,
        }
    }

    /// A template rendered into another one.
    pub const fn fragment(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            text,
            fragment: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn body(&self) -> &'static str {
        if self.fragment {
            self.text
                .strip_suffix("\r\n")
                .or_else(|| self.text.strip_suffix('\n'))
                .unwrap_or(self.text)
        } else {
            self.text
        }
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        PLACEHOLDER
            .captures_iter(self.body())
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Render this template. See [`render`].
    pub fn render(&self, bindings: &Bindings) -> ConvertResult<String> {
        render(self, bindings)
    }
}

/// Values for a template's placeholders.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: IndexMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Substitute every placeholder of `template` with its bound value.
///
/// Fails on a placeholder with no binding or on a binding the template never
/// uses.
pub fn render(template: &Template, bindings: &Bindings) -> ConvertResult<String> {
    let body = template.body();
    let mut output = String::with_capacity(body.len());
    let mut used = HashSet::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(body) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = bindings.get(name.as_str()).ok_or_else(|| {
            ConvertError::render(
                template.name(),
                format!("no binding for `{}`", name.as_str()),
            )
        })?;

        output.push_str(&body[last..whole.start()]);
        output.push_str(value);
        used.insert(name.as_str());
        last = whole.end();
    }
    output.push_str(&body[last..]);

    if let Some(unused) = bindings.values.keys().find(|k| !used.contains(k.as_str())) {
        return Err(ConvertError::render(
            template.name(),
            format!("binding `{unused}` is not used by the template"),
        ));
    }

    Ok(output)
}
