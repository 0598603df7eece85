use crate::domain::model::TimeOfDay;
use crate::utils::error::{Result, TaqError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// CSV 分隔符必須是單一 ASCII 字元
pub fn validate_delimiter(field_name: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
            Ok(*byte)
        }
        _ => Err(TaqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Delimiter must be a single ASCII character other than quote or newline"
                .to_string(),
        }),
    }
}

pub fn validate_market_window(field_name: &str, open: TimeOfDay, close: TimeOfDay) -> Result<()> {
    if open > close {
        return Err(TaqError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Market open {} is later than market close {}", open, close),
        });
    }
    Ok(())
}
