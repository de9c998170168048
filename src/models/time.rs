//! Clock time and weekday primitives.
//!
//! Timetables operate on wall-clock minutes within a single school day,
//! not absolute timestamps. `ClockTime` is a minute-of-day value parsed
//! from and rendered as `HH:MM` (24-hour); `Weekday` names the days an
//! administrator can enable for scheduling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing an `HH:MM` clock time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Input was not of the form `HH:MM`.
    #[error("invalid time format '{0}', expected HH:MM")]
    Format(String),
    /// Hour or minute was out of range.
    #[error("time '{0}' out of range (hour 0-23, minute 0-59)")]
    Range(String),
}

/// A time of day, stored as minutes since midnight.
///
/// Half-open semantics everywhere: a slot `[start, end)` includes its
/// start and excludes its end.
///
/// # Example
///
/// ```
/// use classtime::models::ClockTime;
///
/// let t: ClockTime = "08:30".parse().unwrap();
/// assert_eq!(t.hour(), 8);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.plus(45).to_string(), "09:15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from hour and minute.
    ///
    /// Values are taken modulo their range (hour % 24, minute % 60).
    pub fn new(hour: u16, minute: u16) -> Self {
        Self((hour % 24) * 60 + minute % 60)
    }

    /// Creates a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23, wrapping past midnight).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60 % 24
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// This time advanced by `minutes`.
    #[inline]
    pub fn plus(&self, minutes: u16) -> Self {
        Self(self.0 + minutes)
    }

    /// Minutes from this time to `later` (0 if `later` is earlier).
    #[inline]
    pub fn minutes_until(&self, later: ClockTime) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour: u16 = h
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u16 = m
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(TimeParseError::Range(s.to_string()));
        }
        Ok(Self(hour * 60 + minute))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| TimeParseError::Format(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: ClockTime = "08:05".parse().unwrap();
        assert_eq!(t.minutes(), 485);
        assert_eq!(t.to_string(), "08:05");

        let midnight: ClockTime = "00:00".parse().unwrap();
        assert_eq!(midnight.minutes(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("8am".parse::<ClockTime>().is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("12:61".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let t = ClockTime::new(8, 0);
        assert_eq!(t.plus(45), ClockTime::new(8, 45));
        assert_eq!(t.minutes_until(ClockTime::new(15, 0)), 420);
        // Earlier target clamps to zero
        assert_eq!(ClockTime::new(15, 0).minutes_until(t), 0);
    }

    #[test]
    fn test_ordering() {
        assert!(ClockTime::new(8, 0) < ClockTime::new(8, 45));
        assert!(ClockTime::new(12, 30) > ClockTime::new(9, 15));
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Fredag".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let t = ClockTime::new(9, 30);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"09:30\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
