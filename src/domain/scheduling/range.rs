//! Contiguous time interval `[start, end)` within one day.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::time_codec::TimeOfDay;

/// A half-open time interval `[start, end)` in minutes of day.
///
/// # Invariants
///
/// - `start < end` strictly; zero-length and inverted ranges cannot be
///   constructed.
/// - Immutable once built; edits replace rather than mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    /// Creates a range, rejecting `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::inverted_range(
                start.to_string(),
                end.to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Normalizes a raw endpoint pair from user input.
    ///
    /// Unparseable endpoints are an error (the single entry is rejected,
    /// never the whole batch). An inverted or zero-length pair yields
    /// `Ok(None)`: ranges arrive one add-operation at a time from a UI
    /// control, and product policy is to drop them silently rather than
    /// fail the save.
    pub fn normalize(raw_start: &str, raw_end: &str) -> Result<Option<Self>, ValidationError> {
        let start: TimeOfDay = raw_start.parse()?;
        let end: TimeOfDay = raw_end.parse()?;
        if start >= end {
            return Ok(None);
        }
        Ok(Some(Self { start, end }))
    }

    /// Parses a stored range string (`"H:MM AM - H:MM PM"`, dash spacing
    /// optional).
    ///
    /// Returns `None` for anything malformed: stored rows are parsed
    /// defensively, and one corrupt row must not blank out a whole day.
    pub fn parse_stored(text: &str) -> Option<Self> {
        let (raw_start, raw_end) = text.split_once('-')?;
        let start: TimeOfDay = raw_start.parse().ok()?;
        let end: TimeOfDay = raw_end.parse().ok()?;
        Self::new(start, end).ok()
    }

    /// Start of the interval (inclusive).
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End of the interval (exclusive).
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Half-open interval overlap test: true iff the intervals share any
    /// minute. Touching ranges (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn new_rejects_inverted_range() {
        assert!(TimeRange::new(t("2:00 PM"), t("1:00 PM")).is_err());
    }

    #[test]
    fn new_rejects_zero_length_range() {
        assert!(TimeRange::new(t("9:00 AM"), t("9:00 AM")).is_err());
    }

    #[test]
    fn normalize_drops_inverted_silently() {
        assert_eq!(TimeRange::normalize("2:00 PM", "1:00 PM").unwrap(), None);
        assert_eq!(TimeRange::normalize("9:00 AM", "9:00 AM").unwrap(), None);
    }

    #[test]
    fn normalize_errors_on_unparseable_endpoint() {
        assert!(TimeRange::normalize("9:00", "10:00 AM").is_err());
        assert!(TimeRange::normalize("9:00 AM", "25:00 PM").is_err());
    }

    #[test]
    fn normalize_accepts_valid_pair() {
        let range = TimeRange::normalize("9:00 AM", "10:30 AM").unwrap().unwrap();
        assert_eq!(range.start().minutes(), 540);
        assert_eq!(range.end().minutes(), 630);
        assert_eq!(range.duration_minutes(), 90);
    }

    #[test]
    fn parse_stored_handles_both_dash_spacings() {
        let spaced = TimeRange::parse_stored("9:00 AM - 10:00 AM").unwrap();
        let tight = TimeRange::parse_stored("9:00 AM-10:00 AM").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn parse_stored_returns_none_for_corrupt_rows() {
        assert!(TimeRange::parse_stored("9:00 AM").is_none());
        assert!(TimeRange::parse_stored("garbage - 10:00 AM").is_none());
        assert!(TimeRange::parse_stored("10:00 AM - 9:00 AM").is_none());
        assert!(TimeRange::parse_stored("").is_none());
    }

    #[test]
    fn display_matches_stored_format() {
        let range = TimeRange::parse_stored("9:00 AM-10:00 AM").unwrap();
        assert_eq!(range.to_string(), "9:00 AM - 10:00 AM");
    }

    #[test]
    fn overlap_is_half_open() {
        let morning = TimeRange::new(t("9:00 AM"), t("10:00 AM")).unwrap();
        let touching = TimeRange::new(t("10:00 AM"), t("11:00 AM")).unwrap();
        let crossing = TimeRange::new(t("9:30 AM"), t("10:30 AM")).unwrap();

        assert!(!morning.overlaps(&touching));
        assert!(morning.overlaps(&crossing));
        assert!(crossing.overlaps(&morning));
    }
}
