//! Output configuration types

use crate::error::ConfigError;

use super::template::Template;

pub const DEFAULT_FILE_START: &str = "--- FILE-START: {{.FilePath}} ---";
pub const DEFAULT_FILE_END: &str = "--- FILE-END ---";
pub const DEFAULT_CONTENT_START: &str = "``` {{.FileExt}}";
pub const DEFAULT_CONTENT_END: &str = "```";

/// The four marker templates wrapped around every dumped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub file_start: Template,
    pub file_end: Template,
    pub content_start: Template,
    pub content_end: Template,
}

/// Raw marker texts, any of which may be left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTexts {
    pub file_start: Option<String>,
    pub file_end: Option<String>,
    pub content_start: Option<String>,
    pub content_end: Option<String>,
}

impl OutputConfig {
    /// Build markers from raw texts, falling back to the default for any
    /// field that is unset or fails to compile. Compile failures are returned
    /// alongside so the caller can warn about them.
    pub fn from_texts(texts: &MarkerTexts) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let mut compile = |field: &'static str, text: &Option<String>, default: &str| {
            match text.as_deref().map(Template::parse) {
                Some(Ok(template)) => template,
                Some(Err(source)) => {
                    errors.push(ConfigError::Template { field, source });
                    default_template(default)
                }
                None => default_template(default),
            }
        };

        let config = Self {
            file_start: compile("file_start", &texts.file_start, DEFAULT_FILE_START),
            file_end: compile("file_end", &texts.file_end, DEFAULT_FILE_END),
            content_start: compile("code_start", &texts.content_start, DEFAULT_CONTENT_START),
            content_end: compile("code_end", &texts.content_end, DEFAULT_CONTENT_END),
        };
        (config, errors)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_texts(&MarkerTexts::default()).0
    }
}

fn default_template(source: &str) -> Template {
    Template::parse(source).unwrap_or_else(|_| Template::literal(source))
}
