//! Inclusive date ranges and the temperature aggregate computed over them.

use serde::{Deserialize, Serialize};

use crate::error::SurfsUpError;
use crate::time::ObservationDate;

/// A date window, inclusive on both bounds. A missing `end` leaves the
/// window open towards the latest observation.
///
/// An `end` before `start` is kept as given and matches no observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: ObservationDate,
    end: Option<ObservationDate>,
}

impl DateRange {
    /// A window starting at `start` with no upper bound.
    #[must_use]
    pub fn starting_at(start: ObservationDate) -> Self {
        Self { start, end: None }
    }

    /// A closed window `[start, end]`.
    #[must_use]
    pub fn between(start: ObservationDate, end: ObservationDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parse `YYYY-MM-DD` bounds into a range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] for a malformed bound.
    ///
    /// [`ValidationError::InvalidDate`]: crate::error::ValidationError::InvalidDate
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, SurfsUpError> {
        let start: ObservationDate = start.parse()?;
        match end {
            Some(end) => Ok(Self::between(start, end.parse()?)),
            None => Ok(Self::starting_at(start)),
        }
    }

    #[must_use]
    pub fn start(&self) -> ObservationDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<ObservationDate> {
        self.end
    }
}

/// Minimum, maximum and average temperature over a [`DateRange`].
///
/// Every field is `None` when no observation falls inside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub tavg: Option<f64>,
}

impl TemperatureSummary {
    /// Aggregate a sequence of observed temperatures.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut summary = Self::default();
        let mut sum = 0.0;
        let mut count = 0_u32;
        for value in values {
            summary.tmin = Some(summary.tmin.map_or(value, |m| m.min(value)));
            summary.tmax = Some(summary.tmax.map_or(value, |m| m.max(value)));
            sum += value;
            count += 1;
        }
        if count > 0 {
            summary.tavg = Some(sum / f64::from(count));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> ObservationDate {
        s.parse().unwrap()
    }

    #[test]
    fn should_keep_both_bounds() {
        let range = DateRange::between(date("2017-01-01"), date("2017-01-07"));
        assert_eq!(range.start(), date("2017-01-01"));
        assert_eq!(range.end(), Some(date("2017-01-07")));
    }

    #[test]
    fn should_accept_single_day_range() {
        let range = DateRange::between(date("2017-01-01"), date("2017-01-01"));
        assert_eq!(range.start(), range.end().unwrap());
    }

    #[test]
    fn should_keep_inverted_range_as_given() {
        let range = DateRange::parse("2017-01-07", Some("2017-01-01")).unwrap();
        assert_eq!(range.start(), date("2017-01-07"));
        assert_eq!(range.end(), Some(date("2017-01-01")));
    }

    #[test]
    fn should_reject_malformed_bounds_when_parsing() {
        use crate::error::ValidationError;

        let result = DateRange::parse("2017-01-01", Some("January"));
        assert!(matches!(
            result,
            Err(SurfsUpError::Validation(ValidationError::InvalidDate(ref raw))) if raw == "January"
        ));
    }

    #[test]
    fn should_parse_open_range() {
        let range = DateRange::parse("2016-08-23", None).unwrap();
        assert_eq!(range.start(), date("2016-08-23"));
        assert!(range.end().is_none());
    }

    #[test]
    fn should_summarize_values() {
        let summary = TemperatureSummary::from_values([62.0, 70.0, 74.0]);
        assert_eq!(summary.tmin, Some(62.0));
        assert_eq!(summary.tmax, Some(74.0));
        assert_eq!(summary.tavg, Some(68.666_666_666_666_67));
    }

    #[test]
    fn should_return_empty_summary_without_values() {
        let summary = TemperatureSummary::from_values(std::iter::empty());
        assert_eq!(summary, TemperatureSummary::default());
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tmin": null, "tmax": null, "tavg": null })
        );
    }
}
