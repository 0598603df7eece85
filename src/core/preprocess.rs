use crate::config::toml_config::PrepConfig;
use crate::core::market::MarketHours;
use crate::domain::model::TimestampFormat;
use crate::utils::error::{Result, TaqError};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreprocessStats {
    pub total: usize,
    pub written: usize,
    pub rejected: usize,
    pub outside_hours: usize,
}

/// Normalizes the time column of a delimited TAQ export to `HH:MM:SS`,
/// optionally dropping rows outside the trading session.
#[derive(Debug, Clone)]
pub struct TaqPreprocessor {
    time_column: String,
    format: TimestampFormat,
    delimiter: u8,
    market_hours: Option<MarketHours>,
}

impl TaqPreprocessor {
    pub fn new(time_column: impl Into<String>, format: TimestampFormat) -> Self {
        Self {
            time_column: time_column.into(),
            format,
            delimiter: b',',
            market_hours: None,
        }
    }

    pub fn from_config(config: &PrepConfig) -> Result<Self> {
        let mut preprocessor = Self::new(config.input.time_column.clone(), config.input.format)
            .with_delimiter(config.delimiter_byte()?);

        if config.output.market_hours_only {
            preprocessor = preprocessor.with_market_filter(config.market_hours()?);
        }

        Ok(preprocessor)
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_market_filter(mut self, hours: MarketHours) -> Self {
        self.market_hours = Some(hours);
        self
    }

    pub fn process<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<PreprocessStats> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(writer);

        let headers = reader.headers()?.clone();
        let column = headers
            .iter()
            .position(|h| h.trim() == self.time_column)
            .ok_or_else(|| TaqError::MissingColumnError {
                column: self.time_column.clone(),
            })?;
        writer.write_record(&headers)?;

        tracing::debug!(
            "Normalizing column '{}' (#{}) as {}",
            self.time_column,
            column,
            self.format
        );

        let mut stats = PreprocessStats::default();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            stats.total += 1;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let raw = match record.get(column) {
                Some(raw) => raw,
                None => {
                    tracing::warn!("Line {}: missing column '{}'", line, self.time_column);
                    stats.rejected += 1;
                    continue;
                }
            };

            let time = match self.format.parse(raw) {
                Ok(time) => time,
                Err(e) if !e.is_recoverable() => return Err(e),
                Err(e) => {
                    tracing::warn!("Line {}: {}", line, e);
                    stats.rejected += 1;
                    continue;
                }
            };

            if let Some(hours) = &self.market_hours {
                if !hours.contains(time) {
                    tracing::debug!("Line {}: {} outside market hours", line, time);
                    stats.outside_hours += 1;
                    continue;
                }
            }

            let canonical = time.to_string();
            let normalized: StringRecord = record
                .iter()
                .enumerate()
                .map(|(i, field)| if i == column { canonical.as_str() } else { field })
                .collect();
            writer.write_record(&normalized)?;
            stats.written += 1;
        }

        writer.flush()?;

        tracing::info!(
            "Processed {} rows: {} written, {} rejected, {} outside market hours",
            stats.total,
            stats.written,
            stats.rejected,
            stats.outside_hours
        );

        Ok(stats)
    }
}
