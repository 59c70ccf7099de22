//! The ignore predicate consulted for every entry of a walk

use std::path::{Component, Path};

use super::parse::{IgnorePattern, IgnorePatterns, PatternKind, normalize_path_text};

/// Per-call view of a candidate path, normalized for pattern comparison.
#[derive(Debug)]
pub struct MatchContext {
    /// The path with `/` separators and no leading `./`.
    pub path: String,
    /// `path` with a trailing `/` when the candidate is a directory.
    pub dir_path: String,
    /// Last normal component, if any (`.` and `..` have none).
    pub base_name: Option<String>,
    pub is_dir: bool,
}

impl MatchContext {
    pub fn new(path: &Path, is_dir: bool) -> Self {
        let path_str = normalize_path_text(&path.to_string_lossy());
        let dir_path = if is_dir && !path_str.ends_with('/') {
            format!("{}/", path_str)
        } else {
            path_str.clone()
        };
        Self {
            base_name: base_name(path),
            path: path_str,
            dir_path,
            is_dir,
        }
    }

    fn is_current_dir(&self) -> bool {
        self.path == "." || self.path == "./"
    }

    /// The path without the trailing slash added for directories.
    fn trimmed_path(&self) -> &str {
        self.dir_path.strip_suffix('/').unwrap_or(&self.dir_path)
    }
}

/// The final normal component of a path.
fn base_name(path: &Path) -> Option<String> {
    match path.components().next_back()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Whether a base name marks a hidden entry.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Decide whether `path` is excluded.
///
/// For a directory `true` means the whole subtree is pruned; for a file it
/// means just that file is skipped. The first matching rule wins.
pub fn should_ignore(
    path: &Path,
    is_dir: bool,
    patterns: &IgnorePatterns,
    include_hidden: bool,
) -> bool {
    if !include_hidden && base_name(path).is_some_and(|name| is_hidden_name(&name)) {
        return true;
    }

    if patterns.is_empty() {
        return false;
    }

    let ctx = MatchContext::new(path, is_dir);
    patterns.iter().any(|pattern| pattern_matches(pattern, &ctx))
}

/// Evaluate one pattern against a prepared candidate.
pub fn pattern_matches(pattern: &IgnorePattern, ctx: &MatchContext) -> bool {
    if pattern.is_current_dir() && ctx.is_current_dir() {
        return true;
    }

    if ctx.is_dir && matches_directory_rule(pattern, ctx) {
        return true;
    }

    if !ctx.is_dir {
        if let Some(name) = &ctx.base_name {
            if pattern.whole().matches(name) {
                return true;
            }
        }
    }

    if pattern.whole().matches(&ctx.path) {
        return true;
    }

    pattern.is_glob_pattern() && matches_across_directories(pattern, ctx)
}

/// `temp/`-style patterns against a directory.
fn matches_directory_rule(pattern: &IgnorePattern, ctx: &MatchContext) -> bool {
    let PatternKind::DirectorySuffix { stem } = pattern.kind() else {
        return false;
    };
    let raw = pattern.as_str();

    if stem.matches(ctx.trimmed_path()) {
        return true;
    }

    // Beneath the ignored directory.
    if ctx.path.starts_with(raw) {
        return true;
    }

    // On the way toward a deeper ignored directory. Over-matches ancestors.
    !ctx.is_current_dir() && !ctx.trimmed_path().is_empty() && raw.starts_with(&ctx.dir_path)
}

/// `logs/*/*.log`: match the rest of the pattern at every depth below the prefix.
fn matches_across_directories(pattern: &IgnorePattern, ctx: &MatchContext) -> bool {
    let Some(cross) = pattern.cross_dir() else {
        return false;
    };
    let Some(rest_path) = ctx.path.strip_prefix(cross.prefix.as_str()) else {
        return false;
    };

    let segments: Vec<&str> = rest_path.split('/').collect();
    (0..segments.len()).any(|depth| cross.rest.matches(&segments[depth..].join("/")))
}
