//! `rowfn list` – show registered functions.

use anyhow::Result;
use rowfn_core::FunctionRegistry;
use std::io::Write;

pub fn run_list<W: Write>(registry: &FunctionRegistry, out: &mut W) -> Result<()> {
    writeln!(out, "{:<16} {:<9} {}", "NAME", "KIND", "ARGS")?;
    for name in registry.names() {
        if let Some(f) = registry.find(&name) {
            writeln!(
                out,
                "{:<16} {:<9} {}",
                f.name(),
                f.kind().to_string(),
                f.arity()
            )?;
        }
    }
    Ok(())
}
