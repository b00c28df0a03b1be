//! Scene template generator.
//!
//! Builds the flat, XML-like template files a scene loader reads to spawn
//! game objects from named prototypes. Each line is one self-closing tag:
//! the tag name picks the prototype, the attributes set position, count,
//! random offsets or `Component.field` values on the created object.
//!
//! This crate only writes the text. It does not parse, validate or escape.
//!
//! The binary `scenetemplate` turns a JSON array of records into a template file.

pub mod attributes;
pub mod error;
pub mod generator;
pub mod model;
pub mod source;

pub use error::TemplateError;
pub use generator::{create_template, create_template_file, record_to_template, write_templates};
pub use model::{AttributeRecord, Attributes, NAME_KEY, RecordValue, Template};
pub use source::{load_records, parse_records};
