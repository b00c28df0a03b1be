//! Format attribute records as scene template lines and write them to disk.
//!
//! The output format is a flat list of self-closing tags, one per line:
//!
//! ```text
//! <Player x="1" y="2" />
//! <Tree  />
//! ```
//!
//! Values are inserted verbatim between double quotes. Nothing is escaped, so
//! a value containing `"`, `<` or `>` yields a malformed line; the reader of
//! these files is expected to cope with that. An element without attributes
//! keeps the two spaces between name and `/>` that the format has always had.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, TemplateError};
use crate::model::{AttributeRecord, Attributes, Template};

/// Build `<name k1="v1" k2="v2" />` with attributes in iteration order.
pub fn create_template(name: &str, attributes: &Attributes) -> String {
    let attrs = attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<{} {} />", name, attrs)
}

/// Format a record holding a `name` entry plus attributes.
///
/// The record is borrowed and left unchanged.
pub fn record_to_template(record: &AttributeRecord) -> Result<String> {
    Template::from_record(record).map(|t| t.render())
}

/// Write one template line per record to `writer`, in order.
///
/// Stops at the first record without a `name`; lines before it have already
/// been handed to the writer. Returns the number of lines written.
pub fn write_templates<'a, W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a AttributeRecord>,
{
    let mut written = 0;
    for (index, record) in records.into_iter().enumerate() {
        let line = record_to_template(record).map_err(|err| match err {
            TemplateError::MissingName { .. } => TemplateError::MissingName {
                index: Some(index),
            },
            other => other,
        })?;
        trace!(index, %line, "template");
        writeln!(writer, "{}", line)?;
        written += 1;
    }
    Ok(written)
}

/// Create (or truncate) `path` and write one template line per record.
///
/// If a record lacks `name`, writing stops there. Lines produced before the
/// failing record are flushed and stay in the file.
pub fn create_template_file<'a, I>(records: I, path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a AttributeRecord>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TemplateError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let result = write_templates(&mut writer, records);
    let flushed = writer.flush().map_err(|e| TemplateError::io(path, e));

    let written = result.map_err(|err| match err {
        TemplateError::Write(e) => TemplateError::io(path, e),
        other => other,
    })?;
    flushed?;
    debug!(path = %path.display(), templates = written, "wrote template file");
    Ok(written)
}
