//! Dump formatting
//!
//! Every included file is written as a fixed sequence: file-start marker,
//! content-start marker, raw content, content-end marker, file-end marker and
//! a blank separator line.
//!
//! # Module Structure
//!
//! - `config` - The four marker templates and their defaults
//! - `template` - Marker template compilation and rendering
//! - `dumper` - The `DumpOutput` sink and its stream-backed implementation

mod config;
mod dumper;
mod template;

pub use config::{
    DEFAULT_CONTENT_END, DEFAULT_CONTENT_START, DEFAULT_FILE_END, DEFAULT_FILE_START, MarkerTexts,
    OutputConfig,
};
pub use dumper::{DumpOutput, FileDumper};
pub use template::{Template, TemplateData};
