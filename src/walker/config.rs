//! Configuration types for the path walker

use crate::pattern::{IgnorePatterns, parse_ignore_patterns};

/// Options fixed for the whole run and borrowed by every walk.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub patterns: IgnorePatterns,
    /// Include dotfiles and dot-directories.
    pub include_hidden: bool,
}

impl WalkerConfig {
    pub fn new(patterns: IgnorePatterns, include_hidden: bool) -> Self {
        Self {
            patterns,
            include_hidden,
        }
    }

    /// Build from a raw comma-separated ignore list.
    pub fn from_ignore_list(ignore: &str, include_hidden: bool) -> Self {
        Self::new(parse_ignore_patterns(ignore), include_hidden)
    }
}
