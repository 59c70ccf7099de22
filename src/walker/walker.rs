//! DumpWalker - depth-first traversal that dumps every included file

use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::DumpError;
use crate::file_utils::read_file;
use crate::output::DumpOutput;
use crate::pattern::should_ignore;

use super::config::WalkerConfig;
use super::input::expand_input;

/// What to do with one entry met during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Excluded directory: nothing beneath it is read or tested.
    Prune,
    /// Excluded file.
    Skip,
    Descend,
    Dump,
}

impl Visit {
    pub fn decide(path: &Path, is_dir: bool, config: &WalkerConfig) -> Self {
        let ignored = should_ignore(path, is_dir, &config.patterns, config.include_hidden);
        Self::from_ignored(is_dir, ignored)
    }

    /// Decide for an entry found under `root`. When `root` is absolute the
    /// entry's path relative to it is tested as well, so `temp/` still
    /// prunes `/abs/root/temp`.
    pub fn decide_within(path: &Path, root: &Path, is_dir: bool, config: &WalkerConfig) -> Self {
        let ignored = should_ignore(path, is_dir, &config.patterns, config.include_hidden)
            || relative_to_root(path, root).is_some_and(|relative| {
                should_ignore(relative, is_dir, &config.patterns, config.include_hidden)
            });
        Self::from_ignored(is_dir, ignored)
    }

    fn from_ignored(is_dir: bool, ignored: bool) -> Self {
        match (is_dir, ignored) {
            (true, true) => Visit::Prune,
            (true, false) => Visit::Descend,
            (false, true) => Visit::Skip,
            (false, false) => Visit::Dump,
        }
    }
}

/// Counters for one or more walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_dumped: usize,
    /// Files skipped plus directories pruned.
    pub entries_skipped: usize,
    pub errors: usize,
}

/// Walks input paths and hands every included file to a [`DumpOutput`].
///
/// Per-path problems are reported to the output and never stop the walk;
/// only a failure to write the output itself is returned.
pub struct DumpWalker<'a> {
    config: &'a WalkerConfig,
    stats: WalkStats,
}

impl<'a> DumpWalker<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self {
            config,
            stats: WalkStats::default(),
        }
    }

    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Process one command-line argument, expanding it first if it holds
    /// wildcards. Each match is processed on its own.
    pub fn process_input(&mut self, arg: &str, output: &mut dyn DumpOutput) -> io::Result<()> {
        let (paths, errors) = expand_input(arg);
        for error in errors {
            self.report(output, error);
        }
        for path in &paths {
            self.process_path(path, output)?;
        }
        Ok(())
    }

    /// Process one input path: a file is dumped once, a directory is walked.
    pub fn process_path(&mut self, path: &Path, output: &mut dyn DumpOutput) -> io::Result<()> {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(source) => {
                self.report(
                    output,
                    DumpError::Access {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                return Ok(());
            }
        };

        self.visit(path, path, metadata.is_dir(), output)
    }

    fn visit(
        &mut self,
        path: &Path,
        root: &Path,
        is_dir: bool,
        output: &mut dyn DumpOutput,
    ) -> io::Result<()> {
        match Visit::decide_within(path, root, is_dir, self.config) {
            Visit::Prune => {
                tracing::debug!(path = %path.display(), "pruned directory");
                self.stats.entries_skipped += 1;
                Ok(())
            }
            Visit::Skip => {
                tracing::debug!(path = %path.display(), "skipped file");
                self.stats.entries_skipped += 1;
                Ok(())
            }
            Visit::Descend => self.walk_dir(path, root, output),
            Visit::Dump => self.dump_file(path, output),
        }
    }

    fn walk_dir(&mut self, path: &Path, root: &Path, output: &mut dyn DumpOutput) -> io::Result<()> {
        let entries = match self.read_entries(path, output) {
            Some(entries) => entries,
            None => return Ok(()),
        };

        for entry in entries {
            let entry_path = child_path(path, &entry.file_name());
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(source) => {
                    self.report(
                        output,
                        DumpError::Access {
                            path: entry_path,
                            source,
                        },
                    );
                    continue;
                }
            };

            // Directory links are not followed; a plain walk has no cycle guard.
            if file_type.is_symlink() && entry_path.is_dir() {
                tracing::debug!(path = %entry_path.display(), "not following directory link");
                self.stats.entries_skipped += 1;
                continue;
            }

            self.visit(&entry_path, root, file_type.is_dir(), output)?;
        }

        Ok(())
    }

    /// Read and sort a directory's entries. Unreadable entries are reported
    /// and left out; an unreadable directory yields `None`.
    fn read_entries(&mut self, path: &Path, output: &mut dyn DumpOutput) -> Option<Vec<DirEntry>> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(source) => {
                self.report(
                    output,
                    DumpError::ReadDir {
                        path: path.to_path_buf(),
                        source,
                    },
                );
                return None;
            }
        };

        let mut valid = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => valid.push(entry),
                Err(source) => self.report(
                    output,
                    DumpError::Entry {
                        dir: path.to_path_buf(),
                        source,
                    },
                ),
            }
        }
        valid.sort_by_key(|a| a.file_name());
        Some(valid)
    }

    fn dump_file(&mut self, path: &Path, output: &mut dyn DumpOutput) -> io::Result<()> {
        match read_file(path) {
            Ok(content) => {
                output.dump_file(path, &content)?;
                self.stats.files_dumped += 1;
            }
            Err(e) => self.report(output, e),
        }
        Ok(())
    }

    fn report(&mut self, output: &mut dyn DumpOutput, error: DumpError) {
        tracing::debug!(error = %error, "reported");
        self.stats.errors += 1;
        output.report_error(&error);
    }
}

/// The part of `path` below an absolute walk root, if there is one.
fn relative_to_root<'p>(path: &'p Path, root: &Path) -> Option<&'p Path> {
    if !root.is_absolute() {
        return None;
    }
    path.strip_prefix(root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
}

/// Join a directory entry onto its parent, dropping `.` components so a walk
/// of `.` yields `src/main.rs` rather than `./src/main.rs`.
fn child_path(parent: &Path, name: &OsStr) -> PathBuf {
    let mut path: PathBuf = parent
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    path.push(name);
    path
}
