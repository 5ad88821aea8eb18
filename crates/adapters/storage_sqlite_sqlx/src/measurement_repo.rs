//! `SQLite` implementation of [`MeasurementRepository`].
//!
//! Dates are stored as `YYYY-MM-DD` text, so range filters compare strings.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use surfsup_app::ports::MeasurementRepository;
use surfsup_domain::error::SurfsUpError;
use surfsup_domain::measurement::{PrecipitationReading, TemperatureObservation};
use surfsup_domain::range::{DateRange, TemperatureSummary};
use surfsup_domain::time::ObservationDate;

use crate::error::StorageError;

fn decode_date(raw: &str) -> Result<ObservationDate, sqlx::Error> {
    raw.parse().map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

struct PrecipitationWrapper(PrecipitationReading);

impl<'r> FromRow<'r, SqliteRow> for PrecipitationWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: String = row.try_get("date")?;
        Ok(Self(PrecipitationReading {
            date: decode_date(&date)?,
            prcp: row.try_get("prcp")?,
        }))
    }
}

struct TemperatureWrapper(TemperatureObservation);

impl<'r> FromRow<'r, SqliteRow> for TemperatureWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: String = row.try_get("date")?;
        Ok(Self(TemperatureObservation {
            date: decode_date(&date)?,
            tobs: row.try_get("tobs")?,
        }))
    }
}

struct SummaryWrapper(TemperatureSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(TemperatureSummary {
            tmin: row.try_get("tmin")?,
            tmax: row.try_get("tmax")?,
            tavg: row.try_get("tavg")?,
        }))
    }
}

const SELECT_PRECIPITATION: &str = "SELECT date, prcp FROM measurement ORDER BY id";

const SELECT_LATEST_DATE: &str = "SELECT MAX(date) FROM measurement";

const SELECT_TOBS_SINCE: &str = r"
    SELECT date, tobs FROM measurement
    WHERE date >= ?
    ORDER BY date ASC, id ASC
";

const SUMMARY_SINCE: &str = r"
    SELECT CAST(MIN(tobs) AS REAL) AS tmin,
           CAST(MAX(tobs) AS REAL) AS tmax,
           CAST(AVG(tobs) AS REAL) AS tavg
    FROM measurement
    WHERE date >= ?
";

const SUMMARY_BETWEEN: &str = r"
    SELECT CAST(MIN(tobs) AS REAL) AS tmin,
           CAST(MAX(tobs) AS REAL) AS tmax,
           CAST(AVG(tobs) AS REAL) AS tavg
    FROM measurement
    WHERE date >= ? AND date <= ?
";

/// `SQLite`-backed measurement repository.
pub struct SqliteMeasurementRepository {
    pool: SqlitePool,
}

impl SqliteMeasurementRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MeasurementRepository for SqliteMeasurementRepository {
    async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, SurfsUpError> {
        let rows: Vec<PrecipitationWrapper> = sqlx::query_as(SELECT_PRECIPITATION)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn latest_date(&self) -> Result<Option<ObservationDate>, SurfsUpError> {
        let (latest,): (Option<String>,) = sqlx::query_as(SELECT_LATEST_DATE)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let latest = latest
            .as_deref()
            .map(decode_date)
            .transpose()
            .map_err(StorageError::from)?;
        Ok(latest)
    }

    async fn temperature_observations_since(
        &self,
        from: ObservationDate,
    ) -> Result<Vec<TemperatureObservation>, SurfsUpError> {
        let rows: Vec<TemperatureWrapper> = sqlx::query_as(SELECT_TOBS_SINCE)
            .bind(from.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn temperature_summary(
        &self,
        range: DateRange,
    ) -> Result<TemperatureSummary, SurfsUpError> {
        let row: SummaryWrapper = if let Some(end) = range.end() {
            sqlx::query_as(SUMMARY_BETWEEN)
                .bind(range.start().to_string())
                .bind(end.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?
        } else {
            sqlx::query_as(SUMMARY_SINCE)
                .bind(range.start().to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?
        };

        Ok(row.0)
    }
}
