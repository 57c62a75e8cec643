//! Literal values carried in story content and pushed on the evaluation
//! stack.

use std::fmt;

use tale_path::Path;

/// A first-class story value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(StringValue),
    /// Path used as a value, e.g. the target of an indirect divert.
    DivertTarget(Path),
    VariablePointer(VariablePointerValue),
}

impl Value {
    /// Builds a numeric value, preferring `Int` when the number is integral
    /// and fits. Used for numbers spelled as strings, where the text does not
    /// say which kind was meant.
    pub fn from_number(n: f64) -> Value {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Value::Int(n as i64)
        } else {
            Value::Float(n)
        }
    }

    pub fn string(text: impl Into<String>) -> Value {
        Value::Str(StringValue::new(text))
    }

    pub fn newline() -> Value {
        Value::string("\n")
    }

    pub fn divert_target(path: Path) -> Value {
        Value::DivertTarget(path)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&s.text),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::DivertTarget(_) => "divert target",
            Value::VariablePointer(_) => "variable pointer",
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(&s.text),
            Value::DivertTarget(path) => write!(f, "-> {path}"),
            Value::VariablePointer(ptr) => write!(f, "ref {}", ptr.name),
        }
    }
}

/// Literal story text.
///
/// On the wire every non-newline string is written with a leading `^` so it
/// can never be confused with a mnemonic or other bare-string token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringValue {
    pub text: String,
}

impl StringValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_newline(&self) -> bool {
        self.text == "\n"
    }

    pub fn is_inline_whitespace(&self) -> bool {
        self.text.chars().all(|c| c == ' ' || c == '\t')
    }

    pub fn is_non_whitespace(&self) -> bool {
        !self.is_newline() && !self.is_inline_whitespace()
    }
}

/// Reference to a named variable, passed by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariablePointerValue {
    pub name: String,
    /// How many scopes outward the name resolves; `None` until resolved.
    pub context_index: Option<i32>,
}

impl VariablePointerValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context_index: None,
        }
    }

    pub fn with_context_index(mut self, index: i32) -> Self {
        self.context_index = Some(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_number_prefers_int() {
        assert_eq!(Value::from_number(5.0), Value::Int(5));
        assert_eq!(Value::from_number(-3.0), Value::Int(-3));
        assert_eq!(Value::from_number(2.5), Value::Float(2.5));
        assert_eq!(Value::from_number(1e12), Value::Int(1_000_000_000_000));
        assert_eq!(Value::from_number(1e19), Value::Float(1e19));
        assert_eq!(Value::from_number(f64::NAN).type_name(), "float");
    }

    #[test]
    fn string_markers() {
        assert!(StringValue::new("\n").is_newline());
        assert!(StringValue::new(" \t").is_inline_whitespace());
        assert!(StringValue::new("hi").is_non_whitespace());
        assert!(!StringValue::new("\n").is_non_whitespace());
    }
}
