//! Column specs and the per-column helpers built on them.
//!
//! A column spec is an ordered list of `(name, type)` pairs. Type strings are
//! free-form SQL declarations (`NUMBER`, `NVARCHAR2(64)`, `DATE`, ...) and are
//! classified by case-insensitive substring search.

use crate::error::{Result, SqlGenError};
use crate::types::SqlValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub const NUMBER_MARKER: &str = "NUMBER";
pub const DATE_MARKER: &str = "DATE";
pub const VARCHAR_MARKER: &str = "VARCHAR";

/// A single `(name, type)` entry. Serialized as a `["NAME", "TYPE"]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String)", try_from = "Vec<String>")]
pub struct Column {
    pub name: String,
    pub ty: String,
}

impl From<Column> for (String, String) {
    fn from(col: Column) -> Self {
        (col.name, col.ty)
    }
}

impl TryFrom<Vec<String>> for Column {
    type Error = SqlGenError;

    fn try_from(pair: Vec<String>) -> Result<Self> {
        match <[String; 2]>::try_from(pair) {
            Ok([name, ty]) => Ok(Self { name, ty }),
            Err(other) => Err(SqlGenError::InvalidArgument(format!(
                "column spec entry must be a (name, type) pair, got {} element(s)",
                other.len()
            ))),
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Case-insensitive substring check against the column type.
    pub fn type_contains(&self, marker: &str) -> bool {
        self.ty.to_uppercase().contains(marker)
    }

    pub fn is_number(&self) -> bool {
        self.type_contains(NUMBER_MARKER)
    }

    pub fn is_date(&self) -> bool {
        self.type_contains(DATE_MARKER)
    }

    pub fn is_varchar(&self) -> bool {
        self.type_contains(VARCHAR_MARKER)
    }
}

/// Ordered column specification. Order defines output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec {
    columns: Vec<Column>,
}

impl ColumnSpec {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Build a spec from untyped rows, each of which must hold exactly a name
    /// and a type.
    pub fn try_from_rows<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut columns = Vec::new();
        for (idx, row) in rows.into_iter().enumerate() {
            match row.as_ref() {
                [name, ty] => columns.push(Column::new(name.as_ref(), ty.as_ref())),
                other => {
                    return Err(SqlGenError::InvalidArgument(format!(
                        "column spec entry {} must be a (name, type) pair, got {} element(s)",
                        idx,
                        other.len()
                    )))
                }
            }
        }
        Ok(Self { columns })
    }

    /// Parse a JSON array of `["NAME", "TYPE"]` arrays.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        let entries = value.as_array().ok_or_else(|| {
            SqlGenError::InvalidArgument("column spec must be a JSON array".to_string())
        })?;

        let mut rows = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let pair = entry
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|v| v.as_str().map(str::to_owned))
                        .collect::<Option<Vec<String>>>()
                })
                .ok_or_else(|| {
                    SqlGenError::InvalidArgument(format!(
                        "column spec entry {} must be an array of strings, got {}",
                        idx, entry
                    ))
                })?;
            rows.push(pair);
        }
        Self::try_from_rows(rows)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

impl<S: Into<String>> FromIterator<(S, S)> for ColumnSpec {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, ty)| Column::new(name, ty))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ColumnSpec {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Column names in spec order.
pub fn col_names(cols: &ColumnSpec) -> Vec<String> {
    cols.iter().map(|c| c.name.clone()).collect()
}

/// Names of `NUMBER` columns in spec order.
pub fn number_cols(cols: &ColumnSpec) -> Vec<String> {
    cols.iter()
        .filter(|c| c.is_number())
        .map(|c| c.name.clone())
        .collect()
}

/// Fill values for missing data, keyed by column name.
///
/// Markers are tried in order: `NUMBER` maps to `0.0`, then `VARCHAR` maps to
/// an empty string. The first match wins; other columns are left out.
pub fn trans_cols(cols: &ColumnSpec) -> BTreeMap<String, SqlValue> {
    let markers: [(fn(&Column) -> bool, SqlValue); 2] = [
        (Column::is_number, SqlValue::Float(0.0)),
        (Column::is_varchar, SqlValue::Text(String::new())),
    ];

    let mut result = BTreeMap::new();
    for col in cols {
        if let Some((_, fill)) = markers.iter().find(|(is_kind, _)| is_kind(col)) {
            result.insert(col.name.clone(), fill.clone());
        }
    }
    result
}

/// `0` for every `DATE` column, keyed by column name.
pub fn trans_date_cols(cols: &ColumnSpec) -> BTreeMap<String, SqlValue> {
    cols.iter()
        .filter(|c| c.is_date())
        .map(|c| (c.name.clone(), SqlValue::Int(0)))
        .collect()
}
