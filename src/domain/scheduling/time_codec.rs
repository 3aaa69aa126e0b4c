//! 12-hour clock codec.
//!
//! Stored availability and booking times are human-readable 12-hour strings
//! ("1:30 PM"). This module is the single gateway between those strings and
//! canonical minute-of-day integers. Comparing or sorting the raw strings
//! lexicographically is incorrect ("10:00 AM" < "9:00 AM") and must never
//! happen outside this codec.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)$").expect("valid time pattern"));

/// Minutes in a full day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day as minutes since midnight, 0-1439.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::out_of_range(
                "minutes",
                0,
                (MINUTES_PER_DAY - 1) as i32,
                minutes as i32,
            ));
        }
        Ok(Self(minutes))
    }

    /// Returns minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Adds whole minutes, returning `None` past end of day.
    pub fn plus_minutes(&self, minutes: u16) -> Option<Self> {
        let total = self.0.checked_add(minutes)?;
        (total < MINUTES_PER_DAY).then_some(Self(total))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_minutes(self.0 as u32))
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Parses a 12-hour time string (`H:MM AM|PM`, case-insensitive).
    ///
    /// Hour 12 AM maps to minute-hour 0; hour 12 PM stays 12; hours 1-11
    /// gain 12 for PM. Hours outside 1-12 and minutes above 59 are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = TIME_PATTERN.captures(s.trim()).ok_or_else(|| {
            ValidationError::invalid_format("time", format!("'{}' is not H:MM AM/PM", s))
        })?;

        // Capture groups are \d{1,2} and \d{2}; both fit in u16.
        let hour: u16 = captures[1].parse().map_err(|_| {
            ValidationError::invalid_format("time", format!("unreadable hour in '{}'", s))
        })?;
        let minute: u16 = captures[2].parse().map_err(|_| {
            ValidationError::invalid_format("time", format!("unreadable minute in '{}'", s))
        })?;

        if !(1..=12).contains(&hour) {
            return Err(ValidationError::out_of_range("hour", 1, 12, hour as i32));
        }
        if minute > 59 {
            return Err(ValidationError::out_of_range("minute", 0, 59, minute as i32));
        }

        let is_pm = captures[3].eq_ignore_ascii_case("PM");
        let hour24 = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        Ok(Self(hour24 * 60 + minute))
    }
}

/// Formats minutes since midnight as a 12-hour string.
///
/// Minutes are taken mod 1440, so a slot end of 1440 renders as midnight.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY as u32;
    let hour24 = minutes / 60;
    let minute = minutes % 60;
    let hour12 = (hour24 + 11) % 12 + 1;
    let meridiem = if hour24 >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(s: &str) -> Result<TimeOfDay, ValidationError> {
        s.parse()
    }

    #[test]
    fn parses_morning_times() {
        assert_eq!(parse("9:00 AM").unwrap().minutes(), 540);
        assert_eq!(parse("11:59 AM").unwrap().minutes(), 719);
    }

    #[test]
    fn parses_afternoon_times() {
        assert_eq!(parse("1:30 PM").unwrap().minutes(), 810);
        assert_eq!(parse("11:30 PM").unwrap().minutes(), 1410);
    }

    #[test]
    fn twelve_am_is_midnight_and_twelve_pm_is_noon() {
        assert_eq!(parse("12:00 AM").unwrap().minutes(), 0);
        assert_eq!(parse("12:00 PM").unwrap().minutes(), 720);
        assert_eq!(parse("12:30 AM").unwrap().minutes(), 30);
        assert_eq!(parse("12:30 PM").unwrap().minutes(), 750);
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(parse("9:00 am").unwrap().minutes(), 540);
        assert_eq!(parse("  9:00AM  ").unwrap().minutes(), 540);
        assert_eq!(parse("9:00pm").unwrap().minutes(), 1260);
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(parse("0:30 AM").is_err());
        assert!(parse("13:00 PM").is_err());
        assert!(parse("9:60 AM").is_err());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(parse("9 AM").is_err());
        assert!(parse("9:00").is_err());
        assert!(parse("nine o'clock").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn formats_with_zero_padded_minutes() {
        assert_eq!(format_minutes(540), "9:00 AM");
        assert_eq!(format_minutes(545), "9:05 AM");
        assert_eq!(format_minutes(0), "12:00 AM");
        assert_eq!(format_minutes(720), "12:00 PM");
        assert_eq!(format_minutes(1439), "11:59 PM");
    }

    #[test]
    fn format_wraps_past_midnight() {
        assert_eq!(format_minutes(1440), "12:00 AM");
    }

    #[test]
    fn from_minutes_rejects_day_overflow() {
        assert!(TimeOfDay::from_minutes(1439).is_ok());
        assert!(TimeOfDay::from_minutes(1440).is_err());
    }

    #[test]
    fn plus_minutes_stops_at_end_of_day() {
        let t = TimeOfDay::from_minutes(1410).unwrap();
        assert!(t.plus_minutes(29).is_some());
        assert!(t.plus_minutes(30).is_none());
    }

    proptest! {
        #[test]
        fn parse_format_roundtrip(m in 0u16..1440) {
            let rendered = format_minutes(m as u32);
            let parsed: TimeOfDay = rendered.parse().unwrap();
            prop_assert_eq!(parsed.minutes(), m);
        }

        #[test]
        fn format_parse_roundtrip(h in 1u16..=12, min in 0u16..=59, pm in any::<bool>()) {
            let rendered = format!("{}:{:02} {}", h, min, if pm { "PM" } else { "AM" });
            let parsed: TimeOfDay = rendered.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), rendered);
        }
    }
}
