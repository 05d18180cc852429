//! Statement generation commands.
//!
//! Usage:
//!   sqlutils create STUDENTS --columns students.json
//!   sqlutils insert STUDENTS --columns students.json --date-format 'YYYY-MM-DD'
//!   sqlutils merge STUDENTS_T STUDENTS --columns students.json --on d.ID=s.ID --exclude ID

use sqlutils::{
    gen_create_sql, gen_date_tpl, gen_insert_sql, gen_merge_update_insert_sql, gen_truncate_sql,
    ColumnSpec, GeneratorConfig, MergeOptions,
};

use super::{CreateArgs, DateTplArgs, InsertArgs, MergeArgs};
use crate::output::{heading, print_sql};
use crate::{Cli, OutputFormat};

pub fn create(args: &CreateArgs, cli: &Cli) -> anyhow::Result<()> {
    let cols = args.columns.load()?;
    print_sql(&gen_create_sql(&args.table, &cols), cli)
}

pub fn insert(args: &InsertArgs, config: &GeneratorConfig, cli: &Cli) -> anyhow::Result<()> {
    let cols = args.columns.load()?;
    let mut opts = config.insert_options();
    if let Some(fmt) = &args.date_format {
        opts = opts.with_date_format(fmt.clone());
    }
    if args.no_deal_null {
        opts = opts.deal_null(false);
    }
    print_sql(&gen_insert_sql(&args.table, &cols, &opts), cli)
}

pub fn merge(args: &MergeArgs, config: &GeneratorConfig, cli: &Cli) -> anyhow::Result<()> {
    let cols = args.columns.load()?;
    let opts = MergeOptions::new(args.conditions.iter().cloned())
        .exclude(args.exclude.iter().cloned())
        .distinct(args.distinct || config.distinct);
    print_sql(
        &gen_merge_update_insert_sql(&args.src, &args.dest, &cols, &opts),
        cli,
    )
}

pub fn truncate(table: &str, cli: &Cli) -> anyhow::Result<()> {
    print_sql(&gen_truncate_sql(table), cli)
}

pub fn date_tpl(args: &DateTplArgs, config: &GeneratorConfig, cli: &Cli) -> anyhow::Result<()> {
    let sep = args.sep.as_deref().unwrap_or(&config.date_sep);
    let has_second = config.has_second && !args.no_second;
    let tpl = gen_date_tpl(has_second, sep);
    match cli.format {
        OutputFormat::Text => println!("{}", tpl),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "template": tpl }))?)
        }
    }
    Ok(())
}

pub fn demo(cli: &Cli) -> anyhow::Result<()> {
    let cols: ColumnSpec = [
        ("ID", "NUMBER"),
        ("NAME", "NVARCHAR2(64)"),
        ("GENDER", "NVARCHAR2(4)"),
    ]
    .into_iter()
    .collect();
    let opts = MergeOptions::new(["d.ID=s.ID"]).exclude(["ID"]);

    let statements = [
        ("create", gen_create_sql("STUDENTS", &cols)),
        (
            "insert",
            gen_insert_sql("STUDENTS", &cols, &Default::default()),
        ),
        (
            "merge",
            gen_merge_update_insert_sql("STUDENTS_T", "STUDENTS", &cols, &opts),
        ),
    ];

    match cli.format {
        OutputFormat::Text => {
            for (name, sql) in &statements {
                heading(name);
                println!("{}\n", sql);
            }
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = statements
                .iter()
                .map(|(name, sql)| (name.to_string(), serde_json::Value::from(sql.as_str())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
    }
    Ok(())
}
