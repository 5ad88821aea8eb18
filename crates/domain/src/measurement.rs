//! Measurement projections — the columns of one station's daily reading that
//! the read queries select.

use serde::{Deserialize, Serialize};

use crate::time::ObservationDate;

/// The `(date, prcp)` columns of a `measurement` row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: ObservationDate,
    /// Precipitation, missing on days the station did not report it.
    pub prcp: Option<f64>,
}

/// The `(date, tobs)` columns of a `measurement` row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: ObservationDate,
    pub tobs: Option<f64>,
}
