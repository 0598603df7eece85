pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::PrepConfig;
    use crate::domain::model::{TimeOfDay, TimestampFormat};
    use crate::utils::error::Result;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "taq-time")]
    #[command(about = "Normalize TAQ timestamps and filter by market hours")]
    pub struct CliConfig {
        /// Input CSV file (stdin when omitted)
        #[arg(short, long)]
        pub input: Option<PathBuf>,

        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        pub output: Option<PathBuf>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        #[arg(long, help = "Name of the timestamp column")]
        pub time_column: Option<String>,

        #[arg(long, value_enum, help = "Encoding of the timestamp column")]
        pub format: Option<TimestampFormat>,

        #[arg(long, help = "Single-character field delimiter")]
        pub delimiter: Option<String>,

        #[arg(long, help = "Drop rows outside market hours")]
        pub market_hours_only: bool,

        #[arg(long, help = "Market open, HH:MM:SS")]
        pub open: Option<TimeOfDay>,

        #[arg(long, help = "Market close, HH:MM:SS")]
        pub close: Option<TimeOfDay>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 載入設定檔 (若有) 並套用命令列覆蓋設定
        pub fn resolve(&self) -> Result<PrepConfig> {
            let mut config = match &self.config {
                Some(path) => PrepConfig::from_file(path)?,
                None => PrepConfig::default(),
            };
            self.apply_overrides(&mut config);
            Ok(config)
        }

        pub fn apply_overrides(&self, config: &mut PrepConfig) {
            if let Some(column) = &self.time_column {
                config.input.time_column = column.clone();
            }
            if let Some(format) = self.format {
                config.input.format = format;
            }
            if let Some(delimiter) = &self.delimiter {
                config.input.delimiter = delimiter.clone();
            }
            if self.market_hours_only {
                config.output.market_hours_only = true;
            }
            if let Some(open) = self.open {
                config.market.open = open;
            }
            if let Some(close) = self.close {
                config.market.close = close;
            }
        }
    }

}
