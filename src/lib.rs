//! Dump - print files and directory trees wrapped in configurable markers

pub mod config;
pub mod error;
pub mod file_utils;
pub mod output;
pub mod pattern;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod walker;

pub use config::{FileConfig, default_config_paths, resolve_output_config};
pub use error::{ConfigError, DumpError, TemplateError};
pub use output::{DumpOutput, FileDumper, OutputConfig};
pub use pattern::{IgnorePatterns, contains_glob_pattern, parse_ignore_patterns, should_ignore};
pub use walker::{DumpWalker, Visit, WalkStats, WalkerConfig, expand_input};
