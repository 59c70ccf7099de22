//! Parsing of the comma-separated ignore list into typed patterns

use std::fmt;

use super::wildcard::{Wildcard, contains_glob_pattern};

/// Separator that lets `logs/*/*.log` stand for any number of directories.
const CROSS_DIR_SEPARATOR: &str = "*/";

/// What kind of pattern a piece of ignore text is, decided once at parse time.
#[derive(Debug, Clone)]
pub enum PatternKind {
    /// No metacharacters, no trailing slash: compared verbatim.
    Literal,
    /// Ends with `/`: only applies to directories as a whole subtree.
    /// The stem is the pattern without its trailing slash.
    DirectorySuffix { stem: Wildcard },
    /// Contains `*`, `?` or `[`.
    Glob,
}

/// A `prefix*/rest` split used to match the rest at every depth below the prefix.
#[derive(Debug, Clone)]
pub struct CrossDirPattern {
    pub prefix: String,
    pub rest: Wildcard,
}

/// A single parsed ignore pattern.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    kind: PatternKind,
    is_glob: bool,
    whole: Wildcard,
    cross_dir: Option<CrossDirPattern>,
}

impl IgnorePattern {
    /// Parse one pattern. Host separators are turned into `/` and a leading
    /// `./` is dropped.
    pub fn new(text: &str) -> Self {
        let raw = normalize_path_text(text);
        let is_glob = contains_glob_pattern(&raw);

        let kind = if let Some(stem) = raw.strip_suffix('/') {
            PatternKind::DirectorySuffix {
                stem: Wildcard::new(stem),
            }
        } else if is_glob {
            PatternKind::Glob
        } else {
            PatternKind::Literal
        };

        let cross_dir = if is_glob {
            raw.split_once(CROSS_DIR_SEPARATOR)
                .map(|(prefix, rest)| CrossDirPattern {
                    prefix: prefix.to_string(),
                    rest: Wildcard::new(rest),
                })
        } else {
            None
        };

        Self {
            whole: Wildcard::new(&raw),
            raw,
            kind,
            is_glob,
            cross_dir,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn is_directory_pattern(&self) -> bool {
        matches!(self.kind, PatternKind::DirectorySuffix { .. })
    }

    pub fn is_glob_pattern(&self) -> bool {
        self.is_glob
    }

    /// `.` or `./`, which only ever match the current directory itself.
    pub fn is_current_dir(&self) -> bool {
        self.raw == "." || self.raw == "./"
    }

    pub(crate) fn whole(&self) -> &Wildcard {
        &self.whole
    }

    pub(crate) fn cross_dir(&self) -> Option<&CrossDirPattern> {
        self.cross_dir.as_ref()
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The immutable set of patterns for one invocation.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns(Vec<IgnorePattern>);

impl IgnorePatterns {
    pub fn new(patterns: Vec<IgnorePattern>) -> Self {
        Self(patterns)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IgnorePattern> {
        self.0.iter()
    }

    /// Raw pattern texts in their original order.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(IgnorePattern::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a IgnorePatterns {
    type Item = &'a IgnorePattern;
    type IntoIter = std::slice::Iter<'a, IgnorePattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnorePatterns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|text| IgnorePattern::new(text.as_ref()))
                .collect(),
        )
    }
}

/// Parse a comma-separated ignore list such as `"*.log, temp/, config.ini"`.
///
/// Items are trimmed and kept in order. Empty input, and empty items left
/// by stray commas, produce no patterns.
pub fn parse_ignore_patterns(input: &str) -> IgnorePatterns {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Convert host separators to `/` and drop leading `./` segments.
///
/// `.` and `./` themselves are kept so the current-directory rule still sees them.
pub(crate) fn normalize_path_text(text: &str) -> String {
    let slashed = if std::path::MAIN_SEPARATOR == '/' {
        text.to_string()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    };

    let mut trimmed = slashed.as_str();
    while trimmed.len() > 2 {
        match trimmed.strip_prefix("./") {
            Some(rest) => trimmed = rest,
            None => break,
        }
    }
    trimmed.to_string()
}
