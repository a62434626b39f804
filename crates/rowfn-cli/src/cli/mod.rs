//! CLI for the rowfn row functions.

mod args;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rowfn_core::config::{self, OutputFormat};
use std::io;

use commands::{run_apply, run_call, run_list};

/// Top-level CLI for the rowfn row functions.
#[derive(Debug, Parser)]
#[command(name = "rowfn")]
#[command(about = "rowfn: URL, HTML and JSON-list row functions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--format` values; mirrors the `output_format` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Tsv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Invoke one function once and print its result.
    Call {
        /// Function name (case-insensitive).
        function: String,

        /// Arguments passed to the function, in order.
        args: Vec<String>,

        /// Pass `null`, integers and floats as typed values instead of text.
        #[arg(long)]
        typed: bool,

        /// Output format (defaults to the configured one).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Invoke a function on each non-empty line of standard input.
    Apply {
        /// Function name (case-insensitive).
        function: String,

        /// Output format (defaults to the configured one).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List registered functions with their kind and argument count.
    List,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = rowfn_core::builtin_registry();
        let mut stdout = io::stdout().lock();

        match cli.command {
            CliCommand::Call {
                function,
                args,
                typed,
                format,
            } => {
                let typed = typed || cfg.typed_args;
                run_call(
                    &registry,
                    &cfg,
                    &function,
                    &args,
                    typed,
                    format.map(Into::into),
                    &mut stdout,
                )?;
            }
            CliCommand::Apply { function, format } => {
                run_apply(
                    &registry,
                    &cfg,
                    &function,
                    io::stdin().lock(),
                    format.map(Into::into),
                    &mut stdout,
                )?;
            }
            CliCommand::List => run_list(&registry, &mut stdout)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
