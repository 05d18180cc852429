use anyhow::Context;
use clap::Args;
use sqlutils::{ColumnSpec, GeneratorConfig};
use std::path::PathBuf;
use tracing::debug;

use crate::Cli;

pub mod clean;
pub mod generate;

#[derive(Args, Clone)]
pub struct ColumnsArgs {
    /// Column spec file: JSON array of ["NAME", "TYPE"] pairs
    #[arg(long)]
    pub columns: PathBuf,
}

impl ColumnsArgs {
    pub fn load(&self) -> anyhow::Result<ColumnSpec> {
        ColumnSpec::from_json_file(&self.columns)
            .with_context(|| format!("reading column spec {}", self.columns.display()))
    }
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    pub table: String,
    #[command(flatten)]
    pub columns: ColumnsArgs,
}

#[derive(Args, Clone)]
pub struct InsertArgs {
    pub table: String,
    #[command(flatten)]
    pub columns: ColumnsArgs,
    /// Date format for DATE columns (overrides the config)
    #[arg(long)]
    pub date_format: Option<String>,
    /// Bind plain columns as-is instead of NVL(.., null)
    #[arg(long)]
    pub no_deal_null: bool,
}

#[derive(Args, Clone)]
pub struct MergeArgs {
    /// Source table (alias s)
    pub src: String,
    /// Destination table (alias d)
    pub dest: String,
    #[command(flatten)]
    pub columns: ColumnsArgs,
    /// Join condition, e.g. d.ID=s.ID (repeatable)
    #[arg(long = "on", required = true)]
    pub conditions: Vec<String>,
    /// Column left out of the UPDATE clause (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,
    /// Select distinct source rows
    #[arg(long)]
    pub distinct: bool,
}

#[derive(Args, Clone)]
pub struct DateTplArgs {
    /// Separator between date parts (overrides the config)
    #[arg(long)]
    pub sep: Option<String>,
    /// Drop the seconds part
    #[arg(long)]
    pub no_second: bool,
}

pub fn load_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            debug!("No config file given, using defaults");
            Ok(GeneratorConfig::default())
        }
    }
}
