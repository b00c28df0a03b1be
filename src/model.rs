use std::fmt;

use indexmap::IndexMap;

use crate::attributes;
use crate::error::{Result, TemplateError};

/// Reserved record key holding the element (prototype) name.
pub const NAME_KEY: &str = "name";

/// Ordered attribute set emitted inside a tag, in insertion order.
pub type Attributes = IndexMap<String, String>;

/// One element to emit: the `name` entry plus any number of attributes.
pub type AttributeRecord = IndexMap<String, String>;

// ────────────────────────────────────────────────────────────────────────────
// Template
// ────────────────────────────────────────────────────────────────────────────

/// A single scene template element, e.g. `<Player x="1" y="2" />`.
///
/// Values are stored as text. Anything passed to the builder methods is
/// converted once through its [`Display`](fmt::Display) implementation.
/// `attributes` never holds [`NAME_KEY`]; setting it renames the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    attributes: Attributes,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Template {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Set `key` to `value`, keeping the key's original position if it was
    /// already present. `name` replaces the element name instead.
    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        let key = key.into();
        if key == NAME_KEY {
            self.name = value.to_string();
        } else {
            self.attributes.insert(key, value.to_string());
        }
        self
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set(key, value);
        self
    }

    /// Number of objects the consumer should create from this element.
    pub fn count(self, count: u32) -> Self {
        self.with(attributes::COUNT, count)
    }

    pub fn at(self, x: impl fmt::Display, y: impl fmt::Display, z: impl fmt::Display) -> Self {
        self.with(attributes::X, x)
            .with(attributes::Y, y)
            .with(attributes::Z, z)
    }

    /// Random offset magnitudes for each axis.
    pub fn jitter(self, xr: impl fmt::Display, yr: impl fmt::Display, zr: impl fmt::Display) -> Self {
        self.with(attributes::XR, xr)
            .with(attributes::YR, yr)
            .with(attributes::ZR, zr)
    }

    /// Set `Component.field` on the created object.
    pub fn component(self, component: &str, field: &str, value: impl fmt::Display) -> Self {
        self.with(attributes::component_key(component, field), value)
    }

    /// Set `Component.field.sub` on the created object.
    pub fn component_sub(
        self,
        component: &str,
        field: &str,
        sub: &str,
        value: impl fmt::Display,
    ) -> Self {
        self.with(attributes::component_sub_key(component, field, sub), value)
    }

    /// Split a record into its name and the remaining attributes.
    ///
    /// The record is only borrowed; it is left untouched.
    pub fn from_record(record: &AttributeRecord) -> Result<Self> {
        let name = record
            .get(NAME_KEY)
            .ok_or(TemplateError::MissingName { index: None })?;
        let attributes = record
            .iter()
            .filter(|(k, _)| k.as_str() != NAME_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Template {
            name: name.clone(),
            attributes,
        })
    }

    /// Inverse of [`Template::from_record`]: `name` first, then attributes.
    pub fn to_record(&self) -> AttributeRecord {
        let mut record = AttributeRecord::with_capacity(self.attributes.len() + 1);
        record.insert(NAME_KEY.to_string(), self.name.clone());
        record.extend(self.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));
        record
    }

    pub fn render(&self) -> String {
        crate::generator::template::create_template(&self.name, &self.attributes)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RecordValue – JSON input values
// ────────────────────────────────────────────────────────────────────────────

/// A scalar attribute value as it appears in JSON input.
///
/// Strings are used verbatim, numbers keep their JSON spelling and bools
/// become `true` / `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Text(s) => f.write_str(s),
            RecordValue::Number(n) => write!(f, "{}", n),
            RecordValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl TryFrom<serde_json::Value> for RecordValue {
    type Error = &'static str;

    /// Returns the JSON kind name on rejection.
    fn try_from(value: serde_json::Value) -> std::result::Result<Self, Self::Error> {
        use serde_json::Value;
        match value {
            Value::String(s) => Ok(RecordValue::Text(s)),
            Value::Number(n) => Ok(RecordValue::Number(n)),
            Value::Bool(b) => Ok(RecordValue::Bool(b)),
            Value::Null => Err("null"),
            Value::Array(_) => Err("array"),
            Value::Object(_) => Err("object"),
        }
    }
}
