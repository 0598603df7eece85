use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaqError {
    #[error("Cannot parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' not found in input header")]
    MissingColumnError { column: String },
}

impl TaqError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        TaqError::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 是否為可在單筆記錄層級吸收的錯誤
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TaqError::ParseError { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaqError>;
