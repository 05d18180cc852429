pub mod columns;
pub mod config;
pub mod error;
pub mod sql_gen;
pub mod timing;
pub mod types;

pub use columns::{col_names, number_cols, trans_cols, trans_date_cols, Column, ColumnSpec};
pub use config::GeneratorConfig;
pub use error::{Result, SqlGenError};
pub use sql_gen::{
    gen_create_sql, gen_date_tpl, gen_insert_sql, gen_merge_update_insert_sql, gen_truncate_sql,
    InsertOptions, MergeOptions,
};
pub use timing::calc_time;
pub use types::SqlValue;
