//! Calendar-date helpers for observation records.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// The only accepted textual date format, both on the wire and in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar day a measurement was recorded on.
///
/// Always rendered as `YYYY-MM-DD`, so the lexical order of the rendered
/// form matches calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// Wrap an existing calendar date.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner calendar date.
    #[must_use]
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// The same calendar day one year earlier.
    ///
    /// February 29th clamps to February 28th of the previous year.
    #[must_use]
    pub fn one_year_before(self) -> Self {
        // Only fails at the lower bound of `NaiveDate`.
        Self(self.0.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ObservationDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(s.to_owned()))
    }
}

impl Serialize for ObservationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObservationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
