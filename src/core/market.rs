use crate::domain::model::TimeOfDay;
use crate::utils::error::Result;
use crate::utils::validation::validate_market_window;

pub const DEFAULT_MARKET_OPEN: TimeOfDay = match TimeOfDay::from_hms(9, 30, 0) {
    Some(time) => time,
    None => panic!("invalid market open"),
};

pub const DEFAULT_MARKET_CLOSE: TimeOfDay = match TimeOfDay::from_hms(16, 0, 0) {
    Some(time) => time,
    None => panic!("invalid market close"),
};

/// Trading session window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketHours {
    open: TimeOfDay,
    close: TimeOfDay,
}

impl MarketHours {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self> {
        validate_market_window("market", open, close)?;
        Ok(Self { open, close })
    }

    pub fn open(&self) -> TimeOfDay {
        self.open
    }

    pub fn close(&self) -> TimeOfDay {
        self.close
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.open <= time && time <= self.close
    }
}

impl Default for MarketHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_MARKET_OPEN,
            close: DEFAULT_MARKET_CLOSE,
        }
    }
}

/// Whether `time` falls in the default 09:30:00-16:00:00 session.
/// An absent time is never within market hours.
pub fn is_within_market_hours(time: impl Into<Option<TimeOfDay>>) -> bool {
    let time: Option<TimeOfDay> = time.into();
    time.is_some_and(|time| MarketHours::default().contains(time))
}
