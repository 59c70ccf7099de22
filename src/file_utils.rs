//! Shared file reading utilities for the dumper
//!
//! Content is read as raw bytes so files that are not valid UTF-8 are still
//! dumped unchanged.

use std::path::Path;

use crate::error::DumpError;

/// Read a file's full content.
pub fn read_file(path: &Path) -> Result<Vec<u8>, DumpError> {
    std::fs::read(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// The base name of a path as text, or an empty string for `.`, `..` and `/`.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The part of the base name after its last `.`, without the dot.
///
/// Unlike [`Path::extension`], a dotfile's whole suffix counts:
/// `.bashrc` gives `bashrc`. No dot, or a trailing dot, gives an empty string.
pub fn file_extension(path: &Path) -> String {
    file_name(path)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}
