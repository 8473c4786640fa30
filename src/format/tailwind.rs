//! Tailwind theme fragment rendering.
//!
//! The fragment is a CommonJS module. Keys that are plain identifiers or
//! canonical integers (e.g. `50`, `DEFAULT`) are written bare; everything
//! else is single-quoted.

use std::fmt::Write;

use crate::registry::ThemeRegistry;

const INDENT: &str = "  ";

/// A JavaScript object literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Object(ObjectLiteral),
}

/// Ordered key/value pairs of a JavaScript object literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLiteral {
    entries: Vec<(String, Value)>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push((key.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render with two-space indentation, the opening brace at the current
    /// position and nested lines indented by `depth` levels.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, depth);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        if self.entries.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push_str("{\n");
        let inner = INDENT.repeat(depth + 1);
        for (i, (key, value)) in self.entries.iter().enumerate() {
            out.push_str(&inner);
            out.push_str(&render_key(key));
            out.push_str(": ");
            match value {
                Value::Str(s) => out.push_str(&quote(s)),
                Value::Object(obj) => obj.write_to(out, depth + 1),
            }
            if i + 1 < self.entries.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(&INDENT.repeat(depth));
        out.push('}');
    }
}

impl From<&ThemeRegistry> for ObjectLiteral {
    fn from(registry: &ThemeRegistry) -> Self {
        let mut colors = ObjectLiteral::new();
        for (name, set) in registry.iter() {
            let shades = set
                .iter()
                .fold(ObjectLiteral::new(), |obj, (key, expr)| {
                    obj.with(key.clone(), Value::Str(expr.clone()))
                });
            colors.push(name.clone(), Value::Object(shades));
        }
        colors
    }
}

/// Render the full `module.exports` fragment extending the theme colors.
pub fn render_tailwind_config(registry: &ThemeRegistry) -> String {
    let root = ObjectLiteral::new().with(
        "theme",
        Value::Object(ObjectLiteral::new().with(
            "extend",
            Value::Object(
                ObjectLiteral::new().with("colors", Value::Object(ObjectLiteral::from(registry))),
            ),
        )),
    );

    format!("module.exports = {};\n", root.render(0))
}

fn render_key(key: &str) -> String {
    if is_identifier(key) || is_canonical_integer(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// `050` is not the same property as `50`, so leading zeros stay quoted.
fn is_canonical_integer(key: &str) -> bool {
    !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'))
}

/// Single-quoted JavaScript string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
