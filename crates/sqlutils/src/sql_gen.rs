//! Statement text generators.
//!
//! Identifiers and type declarations are emitted verbatim. Bind placeholders
//! follow the Oracle positional convention (`:1`, `:2`, ...).

use crate::columns::{col_names, ColumnSpec};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Positional bind placeholder at 1-based index.
pub fn placeholder_at(idx: usize) -> String {
    format!(":{}", idx)
}

/// `create table <name>(<col> <type>,\n...)`
pub fn gen_create_sql(table_name: &str, cols: &ColumnSpec) -> String {
    if cols.is_empty() {
        warn!(table = table_name, "create statement with no columns");
    }
    let defs = cols
        .iter()
        .map(|c| format!("{} {}", c.name, c.ty))
        .collect::<Vec<_>>()
        .join(",\n");
    let sql = format!("create table {}({})", table_name, defs);
    debug!(table = table_name, columns = cols.len(), "generated create statement");
    sql
}

/// Oracle date format template, e.g. `YYYY-MM-DD HH24:MI:SS`.
/// Without seconds the trailing `:SS` is dropped.
pub fn gen_date_tpl(has_second: bool, sep: &str) -> String {
    let tpl = format!("YYYY{0}MM{0}DD HH24:MI:SS", sep);
    if has_second {
        tpl
    } else {
        tpl[..tpl.len() - 3].to_string()
    }
}

/// Optional inputs of [`gen_insert_sql`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOptions {
    /// Wrap `DATE` columns in `TO_DATE(.., '<format>')`. Empty counts as absent.
    pub date_format: Option<String>,
    /// Wrap plain columns in `NVL(.., null)`.
    pub deal_null: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            date_format: None,
            deal_null: true,
        }
    }
}

impl InsertOptions {
    pub fn with_date_format(mut self, fmt: impl Into<String>) -> Self {
        self.date_format = Some(fmt.into());
        self
    }

    pub fn deal_null(mut self, deal_null: bool) -> Self {
        self.deal_null = deal_null;
        self
    }
}

/// `insert into <table>(<c1>,...) values(<v1>,...)` with one positional bind
/// per column. The DATE check runs before the NUMBER check.
pub fn gen_insert_sql(table_name: &str, cols: &ColumnSpec, opts: &InsertOptions) -> String {
    let date_format = opts.date_format.as_deref().filter(|f| !f.is_empty());

    let mut names = Vec::with_capacity(cols.len());
    let mut values = Vec::with_capacity(cols.len());
    for (i, col) in cols.iter().enumerate() {
        let bind = placeholder_at(i + 1);
        names.push(col.name.as_str());

        let value = match date_format {
            Some(fmt) if col.is_date() => format!("TO_DATE({}, '{}')", bind, fmt),
            _ if col.is_number() => format!("TO_NUMBER({})", bind),
            _ if opts.deal_null => format!("NVL({}, null)", bind),
            _ => bind,
        };
        values.push(value);
    }

    if cols.is_empty() {
        warn!(table = table_name, "insert statement with no columns");
    }
    let sql = format!(
        "insert into {}({}) values({})",
        table_name,
        names.join(","),
        values.join(",")
    );
    debug!(
        table = table_name,
        columns = cols.len(),
        date_format = ?date_format,
        deal_null = opts.deal_null,
        "generated insert statement"
    );
    sql
}

/// Inputs of [`gen_merge_update_insert_sql`] besides the table names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Fully qualified join conditions over aliases `d` and `s`, AND-ed together.
    pub conditions: Vec<String>,
    /// Columns left out of the UPDATE clause, compared case-insensitively.
    pub update_del_columns: Vec<String>,
    /// Select distinct rows from the source table.
    pub distinct: bool,
}

impl MergeOptions {
    pub fn new<I, S>(conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conditions: conditions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn exclude<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update_del_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }
}

/// Upper-cased column names to update, in spec order, without excluded or
/// repeated names.
pub fn update_columns(cols: &ColumnSpec, update_del_columns: &[String]) -> Vec<String> {
    let excluded: HashSet<String> = update_del_columns.iter().map(|c| c.to_uppercase()).collect();
    let mut seen = HashSet::new();
    col_names(cols)
        .into_iter()
        .map(|name| name.to_uppercase())
        .filter(|name| !excluded.contains(name) && seen.insert(name.clone()))
        .collect()
}

/// Oracle `MERGE` upsert from `src_table` (alias `s`) into `dest_table`
/// (alias `d`).
pub fn gen_merge_update_insert_sql(
    src_table: &str,
    dest_table: &str,
    cols: &ColumnSpec,
    opts: &MergeOptions,
) -> String {
    let on_content = opts.conditions.join(" AND ");
    let columns = col_names(cols);

    let updates = update_columns(cols, &opts.update_del_columns);
    if updates.is_empty() {
        warn!(
            dest = dest_table,
            "merge statement has nothing left to update"
        );
    }
    let update_content = updates
        .iter()
        .map(|j| format!("d.{0}=s.{0}", j))
        .collect::<Vec<_>>()
        .join(",\n");

    let insert_content_1 = columns.join(",\n");
    let insert_content_2 = columns
        .iter()
        .map(|x| format!("s.{}", x))
        .collect::<Vec<_>>()
        .join(",\n");

    let distinct = if opts.distinct { "distinct" } else { "" };

    let sql = format!(
        "merge into {dest} d\n\
         USING(select {distinct} * from {src}) s\n\
         ON ({on})\n\
         WHEN MATCHED THEN\n\
         UPDATE SET\n\
         {update}\n\
         WHEN NOT MATCHED THEN\n\
         INSERT({ins1})VALUES ({ins2})",
        dest = dest_table,
        distinct = distinct,
        src = src_table,
        on = on_content,
        update = update_content,
        ins1 = insert_content_1,
        ins2 = insert_content_2,
    );
    debug!(
        src = src_table,
        dest = dest_table,
        columns = columns.len(),
        updated = updates.len(),
        distinct = opts.distinct,
        "generated merge statement"
    );
    sql
}

/// `truncate table <name>`
pub fn gen_truncate_sql(table_name: &str) -> String {
    let sql = format!("truncate table {}", table_name);
    debug!(table = table_name, "generated truncate statement");
    sql
}
