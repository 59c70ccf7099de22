//! Shell-style wildcard matching on slash-separated paths

use glob::{MatchOptions, Pattern};

/// `*`, `?` and `[...]` never cross a `/`, matching is case-sensitive, and a
/// leading dot needs no literal match.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Characters that turn a piece of text into a wildcard pattern.
const GLOB_CHARS: &[char] = &['*', '?', '['];

/// Check if a string contains any wildcard metacharacter.
pub fn contains_glob_pattern(text: &str) -> bool {
    text.contains(GLOB_CHARS)
}

/// A pattern compiled once and matched many times.
#[derive(Debug, Clone)]
pub enum Wildcard {
    /// No metacharacters: plain string equality.
    Exact(String),
    Glob(Pattern),
    /// The text failed to compile; it never matches anything.
    Invalid,
}

impl Wildcard {
    pub fn new(text: &str) -> Self {
        if !contains_glob_pattern(text) {
            return Wildcard::Exact(text.to_string());
        }
        match Pattern::new(&collapse_stars(text)) {
            Ok(pattern) => Wildcard::Glob(pattern),
            Err(e) => {
                tracing::debug!(pattern = text, error = %e, "invalid glob pattern never matches");
                Wildcard::Invalid
            }
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Wildcard::Exact(text) => text == candidate,
            Wildcard::Glob(pattern) => pattern.matches_with(candidate, MATCH_OPTIONS),
            Wildcard::Invalid => false,
        }
    }
}

/// Reduce every run of `*` to a single `*`, except a `**` standing alone as
/// a path part, which spans directories. `foo**` then behaves like `foo*`.
fn collapse_stars(text: &str) -> String {
    text.split('/')
        .map(|part| {
            if part == "**" {
                return part.to_string();
            }
            let mut collapsed = String::with_capacity(part.len());
            for c in part.chars() {
                if !(c == '*' && collapsed.ends_with('*')) {
                    collapsed.push(c);
                }
            }
            collapsed
        })
        .collect::<Vec<_>>()
        .join("/")
}
