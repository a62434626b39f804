//! `rowfn apply` – invoke a function on every line of input.

use anyhow::{Context, Result};
use rowfn_core::config::{OutputFormat, RowfnConfig};
use rowfn_core::FunctionRegistry;
use std::io::{BufRead, Write};

use crate::cli::args::parse_arg;
use crate::cli::render::{push_block, Block, Renderer};

/// Each non-empty line is one single-argument row. Results are buffered so a
/// failing row prints nothing.
pub fn run_apply<R: BufRead, W: Write>(
    registry: &FunctionRegistry,
    cfg: &RowfnConfig,
    function: &str,
    input: R,
    format: Option<OutputFormat>,
    out: &mut W,
) -> Result<()> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut rows = 0usize;

    for (lineno, line) in input.lines().enumerate() {
        let line = line.context("reading input")?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let arg = parse_arg(line, cfg.typed_args);
        let output = registry
            .call(function, std::slice::from_ref(&arg))
            .with_context(|| format!("line {}", lineno + 1))?;
        push_block(&mut blocks, Block::from_output(function, output));
        rows += 1;
    }

    tracing::debug!(function, rows, blocks = blocks.len(), "apply finished");
    Renderer::new(cfg, format)
        .write_blocks(out, &blocks)
        .context("writing output")?;
    Ok(())
}
