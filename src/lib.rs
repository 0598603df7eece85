pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::PrepConfig;

pub use crate::core::arith::{add_seconds, seconds_between, wrapping_seconds_between};
pub use crate::core::convert::{
    coerce_float_to_int, parse_millis_of_day, parse_seconds_of_day, parse_time_string,
    try_coerce_float_to_int, try_parse_millis_of_day, try_parse_seconds_of_day,
    try_parse_time_string,
};
pub use crate::core::market::{
    is_within_market_hours, MarketHours, DEFAULT_MARKET_CLOSE, DEFAULT_MARKET_OPEN,
};
pub use crate::core::preprocess::{PreprocessStats, TaqPreprocessor};
pub use domain::model::{TimeOfDay, TimestampFormat};
pub use domain::ports::RawNumber;
pub use utils::error::{Result, TaqError};
