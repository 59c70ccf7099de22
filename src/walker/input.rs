//! Expansion of command-line arguments into input paths

use std::path::PathBuf;

use crate::error::DumpError;
use crate::pattern::contains_glob_pattern;

/// Turn one argument into the paths to process.
///
/// Arguments without wildcards are passed through untouched, even if they
/// do not exist; the walker reports those. Wildcard arguments are expanded
/// against the filesystem in sorted order. Matches that cannot be read are
/// returned as errors next to the good ones, so one bad match does not hide
/// the rest.
pub fn expand_input(arg: &str) -> (Vec<PathBuf>, Vec<DumpError>) {
    if !contains_glob_pattern(arg) {
        return (vec![PathBuf::from(arg)], Vec::new());
    }

    let entries = match glob::glob(arg) {
        Ok(entries) => entries,
        Err(source) => {
            return (
                Vec::new(),
                vec![DumpError::Glob {
                    pattern: arg.to_string(),
                    source,
                }],
            );
        }
    };

    let mut paths = Vec::new();
    let mut errors = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(source) => errors.push(DumpError::GlobEntry {
                pattern: arg.to_string(),
                source,
            }),
        }
    }

    if paths.is_empty() && errors.is_empty() {
        errors.push(DumpError::NoMatches {
            pattern: arg.to_string(),
        });
    }
    tracing::debug!(pattern = arg, matches = paths.len(), "expanded input pattern");
    (paths, errors)
}
