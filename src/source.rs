//! Load attribute records from JSON.
//!
//! Input is an array of objects; each object is one record, e.g.
//! `[{"name": "Tree", "x": 1, "y": 2}]`. Key order is kept as written.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Result, TemplateError};
use crate::model::{AttributeRecord, RecordValue};

/// Parse records from a JSON string.
///
/// A record without `name` is accepted here; it only fails once formatted.
pub fn parse_records(json: &str) -> Result<Vec<AttributeRecord>> {
    let raw: Vec<IndexMap<String, serde_json::Value>> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|object| {
            object
                .into_iter()
                .map(|(key, value)| match RecordValue::try_from(value) {
                    Ok(v) => Ok((key, v.to_string())),
                    Err(kind) => Err(TemplateError::InvalidValue { key, kind }),
                })
                .collect::<Result<AttributeRecord>>()
        })
        .collect()
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<AttributeRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| TemplateError::io(path, e))?;
    parse_records(&text)
}
