use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_check_in, format_timestamp, parse_time, parse_timestamp};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Time of day a student checked in, kept at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckInTime(NaiveTime);

impl CheckInTime {
    pub fn new(time: NaiveTime) -> Self {
        // seconds are never shown nor persisted
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn now() -> Self {
        Self::new(Local::now().time())
    }

    /// Parse operator input (see [`parse_time`] for the accepted forms).
    pub fn parse(input: &str) -> AppResult<Self> {
        parse_time(input)
            .map(Self::new)
            .ok_or_else(|| AppError::InvalidTime(input.trim().to_string()))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for CheckInTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_check_in(self.0))
    }
}

impl FromStr for CheckInTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// When an entry was created or last edited, kept at second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordedAt(NaiveDateTime);

impl RecordedAt {
    pub fn new(ts: NaiveDateTime) -> Self {
        Self(ts.with_nanosecond(0).unwrap_or(ts))
    }

    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Strict `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(input: &str) -> AppResult<Self> {
        parse_timestamp(input)
            .map(Self::new)
            .ok_or_else(|| AppError::InvalidTimestamp(input.trim().to_string()))
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Time-of-day part, used as the default check-in.
    pub fn check_in(&self) -> CheckInTime {
        CheckInTime::new(self.0.time())
    }
}

impl fmt::Display for RecordedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(self.0))
    }
}

impl FromStr for RecordedAt {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
