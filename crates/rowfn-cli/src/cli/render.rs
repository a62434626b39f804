//! Result rendering: aligned table, tab-separated, or JSON rows.

use std::io::{self, Write};

use rowfn_core::config::{OutputFormat, RowfnConfig, TableConfig};
use rowfn_core::{Output, Value};

/// A run of rows sharing one header.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Block {
    /// A scalar becomes one row under a column named after `function`; a
    /// multiset keeps its own header.
    pub fn from_output(function: &str, output: Output) -> Self {
        match output {
            Output::Scalar(v) => Self {
                header: vec![function.to_ascii_lowercase()],
                rows: vec![vec![v]],
            },
            Output::Multiset(m) => Self {
                header: m.columns,
                rows: m.rows,
            },
        }
    }
}

/// Appends `block` to `blocks`, merging it into the last one when the
/// headers match.
pub fn push_block(blocks: &mut Vec<Block>, block: Block) {
    match blocks.last_mut() {
        Some(last) if last.header == block.header => last.rows.extend(block.rows),
        _ => blocks.push(block),
    }
}

pub struct Renderer {
    format: OutputFormat,
    null_display: String,
    table: TableConfig,
}

impl Renderer {
    /// Renderer for `cfg`, with `format` overriding the configured format.
    pub fn new(cfg: &RowfnConfig, format: Option<OutputFormat>) -> Self {
        Self {
            format: format.unwrap_or(cfg.output_format),
            null_display: cfg.null_display.clone(),
            table: cfg.table_or_default(),
        }
    }

    fn cell(&self, v: &Value) -> String {
        match v {
            Value::Null => self.null_display.clone(),
            other => other.to_text(),
        }
    }

    /// Writes every block; table and tsv blocks are separated by a blank line.
    pub fn write_blocks<W: Write>(&self, out: &mut W, blocks: &[Block]) -> io::Result<()> {
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 && self.format != OutputFormat::Json {
                writeln!(out)?;
            }
            match self.format {
                OutputFormat::Table => self.write_table(out, block)?,
                OutputFormat::Tsv => self.write_tsv(out, block)?,
                OutputFormat::Json => write_json(out, block)?,
            }
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W, block: &Block) -> io::Result<()> {
        let rows: Vec<Vec<String>> = block
            .rows
            .iter()
            .map(|row| row.iter().map(|v| self.cell(v)).collect())
            .collect();

        let mut widths: Vec<usize> = block.header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
                .collect();
            padded.join(&self.table.separator).trim_end().to_string()
        };

        writeln!(out, "{}", line(&block.header))?;
        if self.table.header_rule {
            let dashes: Vec<String> = widths
                .iter()
                .take(block.header.len())
                .map(|w| "-".repeat(*w))
                .collect();
            writeln!(out, "{}", line(&dashes))?;
        }
        for row in &rows {
            writeln!(out, "{}", line(row))?;
        }
        Ok(())
    }

    fn write_tsv<W: Write>(&self, out: &mut W, block: &Block) -> io::Result<()> {
        writeln!(out, "{}", block.header.join("\t"))?;
        for row in &block.rows {
            let cells: Vec<String> = row.iter().map(|v| self.cell(v)).collect();
            writeln!(out, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

fn write_json<W: Write>(out: &mut W, block: &Block) -> io::Result<()> {
    writeln!(out, "{}", serde_json::json!(block.header))?;
    for row in &block.rows {
        let cells: Vec<serde_json::Value> = row.iter().map(serde_json::Value::from).collect();
        writeln!(out, "{}", serde_json::Value::Array(cells))?;
    }
    Ok(())
}
