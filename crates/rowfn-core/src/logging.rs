//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! The filter comes from `ROWFN_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`]. A variable holding an unparsable directive is skipped.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,rowfn=debug";

/// Takes precedence over `RUST_LOG`.
pub const FILTER_ENV: &str = "ROWFN_LOG";

/// Where the effective filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterSource {
    Rowfn,
    Rust,
    Default,
}

impl FilterSource {
    fn as_str(self) -> &'static str {
        match self {
            FilterSource::Rowfn => FILTER_ENV,
            FilterSource::Rust => EnvFilter::DEFAULT_ENV,
            FilterSource::Default => "default",
        }
    }
}

/// Picks the first directive string that parses.
fn filter_from(rowfn_log: Option<&str>, rust_log: Option<&str>) -> (EnvFilter, FilterSource) {
    let candidates = [
        (rowfn_log, FilterSource::Rowfn),
        (rust_log, FilterSource::Rust),
    ];
    for (directives, source) in candidates {
        if let Some(filter) = directives.and_then(|d| EnvFilter::try_new(d).ok()) {
            return (filter, source);
        }
    }
    (EnvFilter::new(DEFAULT_FILTER), FilterSource::Default)
}

fn effective_filter() -> (EnvFilter, FilterSource) {
    let rowfn_log = std::env::var(FILTER_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rowfn_log.as_deref(), rust_log.as_deref())
}

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct AppendFile(std::fs::File);

impl<'a> MakeWriter<'a> for AppendFile {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// `$XDG_STATE_HOME/rowfn/rowfn.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rowfn")?;
    Ok(xdg_dirs.place_state_file("rowfn.log")?)
}

/// Initialize structured logging to [`log_file_path`].
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    let (env_filter, source) = effective_filter();
    let directives = env_filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(BoxMakeWriter::new(AppendFile(file)))
        .with_ansi(false)
        .init();

    tracing::info!("rowfn logging initialized at {}", path.display());
    tracing::debug!(filter = %directives, source = source.as_str(), "log filter");

    Ok(())
}

/// Initialize logging to stderr only (no file). Used by the CLI when init_logging() fails.
pub fn init_logging_stderr() {
    let (env_filter, source) = effective_filter();
    let directives = env_filter.to_string();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    tracing::debug!(filter = %directives, source = source.as_str(), "log filter (stderr)");
}
