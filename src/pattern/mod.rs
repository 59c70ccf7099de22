//! Ignore-pattern parsing and matching
//!
//! Patterns come from a comma-separated list (`"*.log, temp/, logs/*/*.log"`)
//! and are parsed once into [`IgnorePatterns`]. [`should_ignore`] is the pure
//! predicate the walker consults for every entry it meets.

mod matcher;
mod parse;
mod wildcard;

pub use matcher::{MatchContext, is_hidden_name, pattern_matches, should_ignore};
pub use parse::{CrossDirPattern, IgnorePattern, IgnorePatterns, PatternKind, parse_ignore_patterns};
pub use wildcard::{Wildcard, contains_glob_pattern};
