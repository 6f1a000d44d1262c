//! Typed flake argument values and their Nix literal rendering
//!
//! The supported value lattice is closed and flat: strings, bools, integers,
//! floats, and lists of those. Lists never nest and mappings are rejected
//! outright; that keeps [`ArgValue::render`] total and escaping simple.

use serde_yaml::Value;

/// A typed flake argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<ArgValue>),
}

/// Why a raw YAML value could not be converted into an [`ArgValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The value itself is outside the supported lattice (mapping, null, ...)
    Unsupported,
    /// A list element at the given index is not a supported scalar
    UnsupportedElement(usize),
}

impl ArgValue {
    /// Convert a deserialized YAML value into a typed argument value
    ///
    /// This is the only place raw YAML shapes are inspected; everything
    /// downstream works on the closed tagged union.
    pub fn from_yaml(value: &Value) -> Result<Self, ShapeError> {
        if let Some(scalar) = Self::scalar_from_yaml(value) {
            return Ok(scalar);
        }

        match value {
            Value::Sequence(elems) => {
                let mut items = Vec::with_capacity(elems.len());
                for (index, elem) in elems.iter().enumerate() {
                    match Self::scalar_from_yaml(elem) {
                        Some(item) => items.push(item),
                        None => return Err(ShapeError::UnsupportedElement(index)),
                    }
                }
                Ok(ArgValue::List(items))
            }
            _ => Err(ShapeError::Unsupported),
        }
    }

    /// Convert a YAML scalar; `None` for anything non-scalar
    fn scalar_from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(ArgValue::String(s.clone())),
            Value::Bool(b) => Some(ArgValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(ArgValue::Int(i))
                } else {
                    n.as_f64().map(ArgValue::Float)
                }
            }
            _ => None,
        }
    }

    /// Render this value as a Nix literal
    ///
    /// Total over the lattice: every constructible value renders. Floats use
    /// Rust's shortest round-tripping formatting, so an exact-integer float
    /// renders without a trailing `.0`.
    pub fn render(&self) -> String {
        match self {
            ArgValue::String(s) => quote(s),
            ArgValue::Bool(b) => b.to_string(),
            ArgValue::Int(i) => i.to_string(),
            ArgValue::Float(f) => f.to_string(),
            ArgValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(ArgValue::render).collect();
                format!("[ {} ]", rendered.join(" "))
            }
        }
    }
}

/// Render a string as a double-quoted Nix literal with escaping
///
/// Backslash is escaped first so already-escaped quotes and newlines are not
/// double-escaped.
pub fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}
