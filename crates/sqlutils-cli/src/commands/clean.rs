//! Data cleaning helpers: per-column fill values and elapsed time.

use serde::Serialize;
use serde_json::json;
use sqlutils::{calc_time, trans_cols, trans_date_cols, SqlValue};
use tabled::Tabled;

use super::ColumnsArgs;
use crate::output::{display_single, OutputDisplay};
use crate::{Cli, OutputFormat};

#[derive(Tabled, Serialize)]
struct FillRow {
    column: String,
    kind: &'static str,
    #[tabled(display_with = "display_fill")]
    fill: SqlValue,
}

fn display_fill(v: &SqlValue) -> String {
    v.to_string()
}

pub fn fill_values(args: &ColumnsArgs, cli: &Cli) -> anyhow::Result<()> {
    let cols = args.load()?;
    let fills = trans_cols(&cols);
    let dates = trans_date_cols(&cols);

    match cli.format {
        OutputFormat::Json => display_single(&json!({ "fill": fills, "date": dates }), cli),
        OutputFormat::Text => {
            let mut rows = Vec::new();
            for col in &cols {
                if let Some(v) = fills.get(&col.name) {
                    rows.push(FillRow {
                        column: col.name.clone(),
                        kind: "fill",
                        fill: v.clone(),
                    });
                }
                if let Some(v) = dates.get(&col.name) {
                    rows.push(FillRow {
                        column: col.name.clone(),
                        kind: "date",
                        fill: v.clone(),
                    });
                }
            }
            rows.display(cli)
        }
    }
}

pub fn elapsed(start: f64, end: Option<f64>, cli: &Cli) -> anyhow::Result<()> {
    let hours = calc_time(start, end);
    match cli.format {
        OutputFormat::Text => println!("{}", hours),
        OutputFormat::Json => display_single(&json!({ "hours": hours }), cli)?,
    }
    Ok(())
}
