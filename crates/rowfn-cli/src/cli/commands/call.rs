//! `rowfn call` – invoke one function once.

use anyhow::{Context, Result};
use rowfn_core::config::{OutputFormat, RowfnConfig};
use rowfn_core::{FunctionRegistry, Value};
use std::io::Write;

use crate::cli::args::parse_arg;
use crate::cli::render::{Block, Renderer};

pub fn run_call<W: Write>(
    registry: &FunctionRegistry,
    cfg: &RowfnConfig,
    function: &str,
    raw_args: &[String],
    typed: bool,
    format: Option<OutputFormat>,
    out: &mut W,
) -> Result<()> {
    let args: Vec<Value> = raw_args.iter().map(|a| parse_arg(a, typed)).collect();
    tracing::debug!(function, args = args.len(), typed, "call");

    let output = registry.call(function, &args)?;
    let block = Block::from_output(function, output);
    Renderer::new(cfg, format)
        .write_blocks(out, &[block])
        .context("writing output")?;
    Ok(())
}
