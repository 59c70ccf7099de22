//! Configuration file support
//!
//! Marker templates can be overridden from a TOML file:
//!
//! ```toml
//! file_start = "== FILE: {{.FilePath}} =="
//! file_end = "== END FILE =="
//! code_start = "<< {{.FileExt}} >>"
//! code_end = "<< END >>"
//! ```
//!
//! Any key left out keeps its default. The first existing file among
//! [`default_config_paths`] is used; having none is not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::output::{MarkerTexts, OutputConfig};

/// Name of the per-project config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".dump.toml";

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub file_start: Option<String>,
    pub file_end: Option<String>,
    #[serde(alias = "content_start")]
    pub code_start: Option<String>,
    #[serde(alias = "content_end")]
    pub code_end: Option<String>,
}

impl FileConfig {
    /// Load a config file. Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load the first config file that exists among `paths`.
    ///
    /// Stops at the first file that exists, even if it fails to load.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        for path in paths {
            if let Some(config) = Self::load(path)? {
                return Ok(Some((path.clone(), config)));
            }
            tracing::trace!(path = %path.display(), "no config file");
        }
        Ok(None)
    }

    pub fn marker_texts(&self) -> MarkerTexts {
        MarkerTexts {
            file_start: self.file_start.clone(),
            file_end: self.file_end.clone(),
            content_start: self.code_start.clone(),
            content_end: self.code_end.clone(),
        }
    }
}

/// Fixed config locations, most specific first:
/// `./.dump.toml`, `<config dir>/dump/config.toml`, `~/.dump.toml`.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("dump").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(LOCAL_CONFIG_FILE));
    }
    paths
}

/// Resolve the output markers for a run.
///
/// An explicit path replaces the default search list. Every problem is
/// returned as a warning; the markers fall back to defaults field by field.
pub fn resolve_output_config(explicit: Option<&Path>) -> (OutputConfig, Vec<ConfigError>) {
    let paths = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => default_config_paths(),
    };

    let mut warnings = Vec::new();
    let file_config = match FileConfig::load_from_paths(&paths) {
        Ok(Some((path, config))) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            config
        }
        Ok(None) => {
            if let Some(path) = explicit {
                warnings.push(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            FileConfig::default()
        }
        Err(e) => {
            warnings.push(e);
            FileConfig::default()
        }
    };

    let (config, template_errors) = OutputConfig::from_texts(&file_config.marker_texts());
    warnings.extend(template_errors);
    (config, warnings)
}
