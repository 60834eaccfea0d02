use crate::types::Rect;
use serde::Serialize;
use std::fmt;

/// Short description of an element referenced by a property value
/// (e.g. `SelectionContainer`, `ContainingGrid`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ElementSummary {
    pub control_type: String,
    pub name: String,
    pub automation_id: String,
}

impl ElementSummary {
    pub fn new(control_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self { control_type: control_type.into(), name: name.into(), automation_id: String::new() }
    }

    pub fn with_automation_id(mut self, automation_id: impl Into<String>) -> Self {
        self.automation_id = automation_id.into();
        self
    }
}

impl fmt::Display for ElementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.control_type)?;
        if !self.name.is_empty() {
            write!(f, " \"{}\"", self.name)?;
        }
        if !self.automation_id.is_empty() {
            write!(f, " [{}]", self.automation_id)?;
        }
        Ok(())
    }
}

/// Dynamically typed value as delivered by a platform backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UiValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    Rect(Rect),
    Array(Vec<UiValue>),
    Element(ElementSummary),
}

impl UiValue {
    /// Name of the runtime shape, used in conversion diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            UiValue::Null => "null",
            UiValue::Bool(_) => "bool",
            UiValue::Integer(_) => "integer",
            UiValue::Number(_) => "number",
            UiValue::String(_) => "string",
            UiValue::Rect(_) => "rect",
            UiValue::Array(_) => "array",
            UiValue::Element(_) => "element",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            UiValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            UiValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            UiValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for UiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiValue::Null => f.write_str("null"),
            UiValue::Bool(value) => write!(f, "{value}"),
            UiValue::Integer(value) => write!(f, "{value}"),
            UiValue::Number(value) => write!(f, "{value}"),
            UiValue::String(value) => f.write_str(value),
            UiValue::Rect(rect) => write!(f, "{rect}"),
            UiValue::Array(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            UiValue::Element(summary) => write!(f, "{summary}"),
        }
    }
}

impl From<bool> for UiValue {
    fn from(value: bool) -> Self {
        UiValue::Bool(value)
    }
}

impl From<i32> for UiValue {
    fn from(value: i32) -> Self {
        UiValue::Integer(i64::from(value))
    }
}

impl From<i64> for UiValue {
    fn from(value: i64) -> Self {
        UiValue::Integer(value)
    }
}

impl From<f64> for UiValue {
    fn from(value: f64) -> Self {
        UiValue::Number(value)
    }
}

impl From<&str> for UiValue {
    fn from(value: &str) -> Self {
        UiValue::String(value.to_owned())
    }
}

impl From<String> for UiValue {
    fn from(value: String) -> Self {
        UiValue::String(value)
    }
}

impl From<Rect> for UiValue {
    fn from(value: Rect) -> Self {
        UiValue::Rect(value)
    }
}

impl From<ElementSummary> for UiValue {
    fn from(value: ElementSummary) -> Self {
        UiValue::Element(value)
    }
}

impl From<Vec<UiValue>> for UiValue {
    fn from(value: Vec<UiValue>) -> Self {
        UiValue::Array(value)
    }
}

/// Result of a single attribute read.
///
/// Element properties are either `Value` or `NotSupported`; text-range
/// attributes may additionally vary across the queried range (`Mixed`).
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Value(UiValue),
    Mixed,
    NotSupported,
}

impl AttrValue {
    pub fn value(&self) -> Option<&UiValue> {
        match self {
            AttrValue::Value(value) => Some(value),
            AttrValue::Mixed | AttrValue::NotSupported => None,
        }
    }

    pub fn into_value(self) -> Option<UiValue> {
        match self {
            AttrValue::Value(value) => Some(value),
            AttrValue::Mixed | AttrValue::NotSupported => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, AttrValue::NotSupported)
    }
}

impl From<UiValue> for AttrValue {
    fn from(value: UiValue) -> Self {
        AttrValue::Value(value)
    }
}
