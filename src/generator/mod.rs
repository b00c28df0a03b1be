//! Template text generation.
//!
//! This module provides:
//! - [`template`] – Format records as self-closing tags and write template files.

pub mod template;

pub use template::{create_template, create_template_file, record_to_template, write_templates};
