use crate::error::{Result, SqlGenError};
use crate::sql_gen::{gen_date_tpl, InsertOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Defaults applied when generating statements.
///
/// Loaded from a JSON file by the command line front-end; every field is
/// optional in the file and falls back to [`GeneratorConfig::default`].
///
/// # Example
///
/// ```rust
/// use sqlutils::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert!(config.deal_null);
/// assert_eq!(config.insert_options().date_format, None);
///
/// let dates = GeneratorConfig::oracle_dates();
/// assert_eq!(
///     dates.insert_options().date_format.as_deref(),
///     Some("YYYY-MM-DD HH24:MI:SS")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Separator between year, month and day in the date template.
    ///
    /// Default: `-`
    pub date_sep: String,

    /// Keep the `:SS` part of the date template.
    ///
    /// Default: true
    pub has_second: bool,

    /// Convert `DATE` columns with `TO_DATE` on insert.
    ///
    /// Default: false (values are bound as given)
    pub use_date_format: bool,

    /// Wrap plain insert binds in `NVL(.., null)`.
    ///
    /// Default: true
    pub deal_null: bool,

    /// Select distinct source rows in merge statements.
    ///
    /// Default: false
    pub distinct: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            date_sep: "-".to_string(),
            has_second: true,
            use_date_format: false,
            deal_null: true,
            distinct: false,
        }
    }
}

impl GeneratorConfig {
    /// Insert with `TO_DATE(.., 'YYYY-MM-DD HH24:MI:SS')` on date columns.
    pub fn oracle_dates() -> Self {
        Self {
            use_date_format: true,
            ..Self::default()
        }
    }

    pub fn date_template(&self) -> String {
        gen_date_tpl(self.has_second, &self.date_sep)
    }

    pub fn insert_options(&self) -> InsertOptions {
        InsertOptions {
            date_format: self.use_date_format.then(|| self.date_template()),
            deal_null: self.deal_null,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.use_date_format && self.date_sep.chars().any(|c| c == '\'') {
            return Err(SqlGenError::Config(
                "date_sep must not contain a single quote".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading generator config from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_matches_insert_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.insert_options(), InsertOptions::default());
        assert_eq!(config.date_template(), "YYYY-MM-DD HH24:MI:SS");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config =
            GeneratorConfig::from_json_str(r#"{"use_date_format": true, "has_second": false}"#)
                .unwrap();
        assert!(config.deal_null);
        assert_eq!(
            config.insert_options().date_format.as_deref(),
            Some("YYYY-MM-DD HH24:MI")
        );
    }

    #[test]
    fn rejects_quote_in_separator() {
        let err = GeneratorConfig::from_json_str(r#"{"use_date_format": true, "date_sep": "'"}"#)
            .unwrap_err();
        assert!(matches!(err, SqlGenError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"date_sep": "/", "deal_null": false}}"#).unwrap();

        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.date_template(), "YYYY/MM/DD HH24:MI:SS");
        assert!(!config.insert_options().deal_null);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SqlGenError::Io(_)));
    }
}
