//! CLI entry point for dump

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use dump::{DumpOutput, DumpWalker, FileDumper, WalkerConfig, resolve_output_config};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `DUMP_LOG=debug`.
const LOG_ENV: &str = "DUMP_LOG";

const EXAMPLES: &str = "\
Examples:
  dump file.txt                        # Dump a single file
  dump src/                            # Dump all files in a directory recursively
  dump '*.go'                          # Dump all Go files in current directory
  dump --ignore=\"*.log,temp/\" project/ # Ignore .log files and temp directory
  dump -H .                            # Include dotfiles and dot-directories";

#[derive(Parser, Debug)]
#[command(name = "dump")]
#[command(about = "A simple file and directory content dumper")]
#[command(disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
struct Args {
    /// Paths to files or directories. Glob patterns are expanded.
    #[arg(value_name = "PATHS")]
    paths: Vec<String>,

    /// Comma-separated list of patterns to ignore (e.g. "*.log,temp/,config.ini")
    #[arg(long = "ignore", value_name = "PATTERNS")]
    ignore: Option<String>,

    /// Same as --ignore; the two cannot be combined
    #[arg(short = 'i', value_name = "PATTERNS", conflicts_with = "ignore")]
    ignore_short: Option<String>,

    /// Include hidden files and directories (names starting with '.')
    #[arg(short = 'H', long = "hidden")]
    hidden: bool,

    /// Read marker templates from this file instead of the default locations
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Display the version of the dump utility
    #[arg(short = 'V', long = "version")]
    version: bool,
}

/// Set up diagnostics on stderr. Defaults to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help goes to stdout and is not a failure; real errors are.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if args.version {
        println!("dump version: {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.paths.is_empty() {
        eprintln!("dump: no file or directory paths specified");
        eprintln!("{}", Args::command().render_usage());
        eprintln!("For more information, try '--help'.");
        process::exit(1);
    }

    let ignore = args
        .ignore
        .as_deref()
        .or(args.ignore_short.as_deref())
        .unwrap_or_default();
    let walker_config = WalkerConfig::from_ignore_list(ignore, args.hidden);
    tracing::debug!(patterns = ?walker_config.patterns.as_strs(), hidden = args.hidden, "walker configured");

    let (output_config, warnings) = resolve_output_config(args.config.as_deref());
    for warning in &warnings {
        eprintln!("dump: warning: {}", warning);
    }

    let mut dumper = FileDumper::stdio(output_config);
    let mut walker = DumpWalker::new(&walker_config);

    if let Err(e) = run(&args.paths, &mut walker, &mut dumper) {
        eprintln!("dump: error writing output: {}", e);
        process::exit(1);
    }

    let stats = walker.stats();
    tracing::debug!(
        dumped = stats.files_dumped,
        skipped = stats.entries_skipped,
        errors = stats.errors,
        "done"
    );
}

/// Process every argument in order. Only output write failures stop the run.
fn run(paths: &[String], walker: &mut DumpWalker<'_>, output: &mut dyn DumpOutput) -> io::Result<()> {
    for arg in paths {
        walker.process_input(arg, output)?;
    }
    Ok(())
}
