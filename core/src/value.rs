//! Boundary values exchanged with the script engine.

use pacward_common::datetime::RangeArg;

/// A loosely typed script value crossing the PAC function boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PacValue {
    String(String),
    Number(f64),
    Bool(bool),
    Undefined,
}

impl PacValue {
    /// Strict string reading. Non-strings have none; the calling entry
    /// point falls back to its sentinel.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PacValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// The temporal-argument reading: integral numbers and words count,
    /// booleans and `Undefined` are ignored when determining arity.
    pub(crate) fn as_range_arg(&self) -> Option<RangeArg> {
        match self {
            PacValue::Number(value) if value.fract() == 0.0 => Some(RangeArg::Int(*value as i64)),
            PacValue::String(value) => Some(RangeArg::Word(value.clone())),
            _ => None,
        }
    }

    /// `String(...)`-style rendering, for the side-channel only.
    pub(crate) fn coerced_string(&self) -> String {
        match self {
            PacValue::String(value) => value.clone(),
            PacValue::Number(value) => value.to_string(),
            PacValue::Bool(value) => value.to_string(),
            PacValue::Undefined => "undefined".to_string(),
        }
    }
}

impl From<bool> for PacValue {
    fn from(value: bool) -> Self {
        PacValue::Bool(value)
    }
}

impl From<u32> for PacValue {
    fn from(value: u32) -> Self {
        PacValue::Number(f64::from(value))
    }
}

impl From<String> for PacValue {
    fn from(value: String) -> Self {
        PacValue::String(value)
    }
}

impl From<&str> for PacValue {
    fn from(value: &str) -> Self {
        PacValue::String(value.to_string())
    }
}
