use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints function results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns with an optional rule under the header.
    #[default]
    Table,
    /// Tab-separated cells, no alignment.
    Tsv,
    /// One compact JSON array per row.
    Json,
}

/// Table layout (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Text placed between columns.
    pub separator: String,
    /// Draw a dashed line under the header row.
    pub header_rule: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            separator: " | ".to_string(),
            header_rule: true,
        }
    }
}

/// Global configuration loaded from `~/.config/rowfn/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowfnConfig {
    /// Default output format: "table", "tsv" or "json".
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Text shown for null cells in table and tsv output.
    pub null_display: String,
    /// Optional table layout; if missing, built-in defaults are used.
    #[serde(default)]
    pub table: Option<TableConfig>,
    /// Pass `null`, integers and floats on the command line as typed values.
    #[serde(default)]
    pub typed_args: bool,
}

impl Default for RowfnConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            null_display: "None".to_string(),
            table: None,
            typed_args: false,
        }
    }
}

impl RowfnConfig {
    /// Table layout, falling back to defaults when the section is absent.
    pub fn table_or_default(&self) -> TableConfig {
        self.table.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rowfn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RowfnConfig> {
    load_from(&config_path()?)
}

/// Load configuration from `path`, writing defaults there if it is missing.
pub fn load_from(path: &Path) -> Result<RowfnConfig> {
    if !path.exists() {
        let default_cfg = RowfnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: RowfnConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RowfnConfig::default();
        assert_eq!(cfg.output_format, OutputFormat::Table);
        assert_eq!(cfg.null_display, "None");
        assert!(cfg.table.is_none());
        assert!(!cfg.typed_args);
        assert_eq!(cfg.table_or_default().separator, " | ");
        assert!(cfg.table_or_default().header_rule);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RowfnConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RowfnConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output_format = "json"
            null_display = "NULL"
            typed_args = true

            [table]
            separator = "\t"
            header_rule = false
        "#;
        let cfg: RowfnConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Json);
        assert_eq!(cfg.null_display, "NULL");
        assert!(cfg.typed_args);
        let table = cfg.table.as_ref().unwrap();
        assert_eq!(table.separator, "\t");
        assert!(!table.header_rule);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: RowfnConfig = toml::from_str(r#"null_display = """#).unwrap();
        assert_eq!(cfg.output_format, OutputFormat::Table);
        assert_eq!(cfg.null_display, "");
        assert!(cfg.table.is_none());
    }

    #[test]
    fn config_rejects_unknown_format() {
        let res: std::result::Result<RowfnConfig, _> =
            toml::from_str("output_format = \"xml\"\nnull_display = \"None\"");
        assert!(res.is_err());
    }

    #[test]
    fn load_from_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_from(&path).unwrap();
        assert_eq!(created, RowfnConfig::default());
        assert!(path.exists());

        fs::write(&path, "output_format = \"tsv\"\nnull_display = \"-\"\n").unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Tsv);
        assert_eq!(loaded.null_display, "-");
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output_format = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
