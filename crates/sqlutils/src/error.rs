use thiserror::Error;

/// Errors raised while building column specs or loading generator configuration.
///
/// Statement generation itself never fails: degenerate input produces
/// degenerate SQL.
#[derive(Error, Debug)]
pub enum SqlGenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SqlGenError>;
