use crate::{Cli, OutputFormat};
use colored::*;
use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

pub trait OutputDisplay {
    fn display(&self, cli: &Cli) -> anyhow::Result<()>;
}

impl<T> OutputDisplay for Vec<T>
where
    T: Tabled + Serialize,
{
    fn display(&self, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Text => {
                if self.is_empty() {
                    println!("{}", "No columns matched".yellow());
                } else {
                    println!("{}", Table::new(self));
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(self)?);
            }
        }
        Ok(())
    }
}

/// Print a generated statement: raw text, or `{"sql": ...}` as JSON.
pub fn print_sql(sql: &str, cli: &Cli) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", sql),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json!({ "sql": sql }))?),
    }
    Ok(())
}

pub fn display_single<T: Serialize>(item: &T, cli: &Cli) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Text => println!("{}", serde_json::to_string(item)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
    }
    Ok(())
}

pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn heading(message: &str) {
    println!("{}", format!("-- {}", message).blue());
}
