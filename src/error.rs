//! Error type shared by the formatter, the file writer and the record loader.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// A record has no `name` entry. `index` is set when the record came
    /// from a sequence.
    #[error("attribute record{} has no `name` entry", record_label(.index))]
    MissingName { index: Option<usize> },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write template")]
    Write(#[from] std::io::Error),

    #[error("invalid record JSON")]
    Json(#[from] serde_json::Error),

    #[error("attribute `{key}` has a {kind} value; expected a string, number or bool")]
    InvalidValue { key: String, kind: &'static str },
}

impl TemplateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}

fn record_label(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" #{}", i),
        None => String::new(),
    }
}

pub type Result<T, E = TemplateError> = std::result::Result<T, E>;
