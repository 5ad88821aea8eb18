//! Storage port — read-only repository traits over the observation dataset.

use std::future::Future;

use surfsup_domain::error::SurfsUpError;
use surfsup_domain::measurement::{PrecipitationReading, TemperatureObservation};
use surfsup_domain::range::{DateRange, TemperatureSummary};
use surfsup_domain::station::Station;
use surfsup_domain::time::ObservationDate;

/// Read access to the `station` table.
pub trait StationRepository {
    /// Every station code, in storage order.
    fn list_codes(&self) -> impl Future<Output = Result<Vec<String>, SurfsUpError>> + Send;

    /// Every station with its metadata, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Station>, SurfsUpError>> + Send;
}

/// Read access to the `measurement` table.
pub trait MeasurementRepository {
    /// Every `(date, prcp)` pair, in storage order.
    fn precipitation(
        &self,
    ) -> impl Future<Output = Result<Vec<PrecipitationReading>, SurfsUpError>> + Send;

    /// The most recent observation date, or `None` when there is no data.
    fn latest_date(
        &self,
    ) -> impl Future<Output = Result<Option<ObservationDate>, SurfsUpError>> + Send;

    /// Temperature observations on or after `from`, oldest first.
    fn temperature_observations_since(
        &self,
        from: ObservationDate,
    ) -> impl Future<Output = Result<Vec<TemperatureObservation>, SurfsUpError>> + Send;

    /// Minimum, maximum and average temperature inside `range`.
    fn temperature_summary(
        &self,
        range: DateRange,
    ) -> impl Future<Output = Result<TemperatureSummary, SurfsUpError>> + Send;
}
