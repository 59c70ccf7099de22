//! Writing dumped files wrapped in their markers

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::DumpError;
use crate::file_utils::{file_extension, file_name};

use super::config::OutputConfig;
use super::template::TemplateData;

/// Sink the walker hands included files and per-path errors to.
pub trait DumpOutput {
    /// Emit one file with its content. Only failures to write the output
    /// itself are returned.
    fn dump_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Report a non-fatal problem with one input or entry.
    fn report_error(&mut self, error: &DumpError);
}

/// Writes markers and content to `out` and diagnostics to `err`.
pub struct FileDumper<W: Write, E: Write> {
    config: OutputConfig,
    out: W,
    err: E,
}

impl FileDumper<BufWriter<io::Stdout>, io::Stderr> {
    /// A dumper over the process's standard streams.
    pub fn stdio(config: OutputConfig) -> Self {
        Self::new(config, BufWriter::new(io::stdout()), io::stderr())
    }
}

impl<W: Write, E: Write> FileDumper<W, E> {
    pub fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self { config, out, err }
    }

    /// Consume the dumper, returning both streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> DumpOutput for FileDumper<W, E> {
    fn dump_file(&mut self, path: &Path, content: &[u8]) -> io::Result<()> {
        let file_path = path.to_string_lossy();
        let file_ext = file_extension(path);
        let file_name = file_name(path);
        let data = TemplateData {
            file_path: &file_path,
            file_ext: &file_ext,
            file_name: &file_name,
        };

        writeln!(self.out, "{}", self.config.file_start.render(&data))?;
        writeln!(self.out, "{}", self.config.content_start.render(&data))?;
        self.out.write_all(content)?;
        if !content.is_empty() && !content.ends_with(b"\n") {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", self.config.content_end.render(&data))?;
        writeln!(self.out, "{}", self.config.file_end.render(&data))?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn report_error(&mut self, error: &DumpError) {
        let level = if error.is_warning() { "warning: " } else { "" };
        // Nothing sensible is left to do if stderr itself fails.
        let _ = writeln!(self.err, "dump: {}{}", level, error);
    }
}
