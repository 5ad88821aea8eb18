//! Climate service — read-only use-cases over stations and measurements.

use std::collections::BTreeMap;

use surfsup_domain::error::SurfsUpError;
use surfsup_domain::measurement::TemperatureObservation;
use surfsup_domain::range::{DateRange, TemperatureSummary};
use surfsup_domain::station::Station;
use surfsup_domain::time::ObservationDate;

use crate::ports::{MeasurementRepository, StationRepository};

/// Application service answering every climate query.
pub struct ClimateService<SR, MR> {
    stations: SR,
    measurements: MR,
}

impl<SR, MR> ClimateService<SR, MR>
where
    SR: StationRepository,
    MR: MeasurementRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(stations: SR, measurements: MR) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    /// Precipitation keyed by date.
    ///
    /// Several stations report on the same day; the reading stored last wins.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn precipitation(
        &self,
    ) -> Result<BTreeMap<ObservationDate, Option<f64>>, SurfsUpError> {
        let readings = self.measurements.precipitation().await?;
        tracing::debug!(rows = readings.len(), "loaded precipitation readings");
        Ok(readings.into_iter().map(|r| (r.date, r.prcp)).collect())
    }

    /// Every station code.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn station_codes(&self) -> Result<Vec<String>, SurfsUpError> {
        self.stations.list_codes().await
    }

    /// Every station with its metadata.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn stations(&self) -> Result<Vec<Station>, SurfsUpError> {
        self.stations.get_all().await
    }

    /// Temperature observations covering the year before the latest
    /// recorded date, oldest first. Empty when the dataset is empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn last_year_temperatures(
        &self,
    ) -> Result<Vec<TemperatureObservation>, SurfsUpError> {
        let Some(latest) = self.measurements.latest_date().await? else {
            tracing::debug!("no measurements recorded");
            return Ok(Vec::new());
        };
        let from = latest.one_year_before();
        tracing::debug!(%latest, %from, "computed one-year lookback");
        self.measurements.temperature_observations_since(from).await
    }

    /// Minimum, maximum and average temperature inside `range`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn temperature_summary(
        &self,
        range: DateRange,
    ) -> Result<TemperatureSummary, SurfsUpError> {
        self.measurements.temperature_summary(range).await
    }
}
