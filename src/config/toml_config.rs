use crate::core::market::{MarketHours, DEFAULT_MARKET_CLOSE, DEFAULT_MARKET_OPEN};
use crate::domain::model::{TimeOfDay, TimestampFormat};
use crate::utils::error::{Result, TaqError};
use crate::utils::validation::{
    validate_delimiter, validate_market_window, validate_non_empty_string, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub market: MarketConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            open: DEFAULT_MARKET_OPEN,
            close: DEFAULT_MARKET_CLOSE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub time_column: String,
    pub format: TimestampFormat,
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            time_column: "time".to_string(),
            format: TimestampFormat::default(),
            delimiter: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub market_hours_only: bool,
}

impl PrepConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TaqError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TaqError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MARKET_OPEN})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("input.time_column", &self.input.time_column)?;
        validate_delimiter("input.delimiter", &self.input.delimiter)?;
        validate_market_window("market", self.market.open, self.market.close)?;
        Ok(())
    }

    /// 取得交易時段
    pub fn market_hours(&self) -> Result<MarketHours> {
        MarketHours::new(self.market.open, self.market.close)
    }

    /// 取得 CSV 分隔符
    pub fn delimiter_byte(&self) -> Result<u8> {
        validate_delimiter("input.delimiter", &self.input.delimiter)
    }
}

impl Validate for PrepConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PrepConfig::from_toml_str("").unwrap();

        assert_eq!(config.market.open, DEFAULT_MARKET_OPEN);
        assert_eq!(config.market.close, DEFAULT_MARKET_CLOSE);
        assert_eq!(config.input.time_column, "time");
        assert_eq!(config.input.format, TimestampFormat::Text);
        assert!(!config.output.market_hours_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[market]
open = "04:00:00"
close = "20:00:00"

[input]
time_column = "TIME_M"
format = "millis"
delimiter = "|"

[output]
market_hours_only = true
"#;

        let config = PrepConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.market.open, TimeOfDay::from_hms(4, 0, 0).unwrap());
        assert_eq!(config.input.time_column, "TIME_M");
        assert_eq!(config.input.format, TimestampFormat::Millis);
        assert_eq!(config.delimiter_byte().unwrap(), b'|');
        assert!(config.output.market_hours_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_time_is_a_parse_error() {
        let toml_content = r#"
[market]
open = "9:30"
"#;
        assert!(matches!(
            PrepConfig::from_toml_str(toml_content),
            Err(TaqError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TAQ_TIME_TEST_COLUMN", "TIME_M");

        let toml_content = r#"
[input]
time_column = "${TAQ_TIME_TEST_COLUMN}"
"#;

        let config = PrepConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.time_column, "TIME_M");

        std::env::remove_var("TAQ_TIME_TEST_COLUMN");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[market]
open = "16:00:00"
close = "09:30:00"
"#;

        let config = PrepConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.market_hours().is_err());

        let mut config = PrepConfig::default();
        config.input.delimiter = "::".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
format = "seconds"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = PrepConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.format, TimestampFormat::Seconds);
    }
}
