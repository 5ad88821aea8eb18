//! JSON REST handlers for temperature summaries over a date range.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};

use surfsup_app::ports::{MeasurementRepository, StationRepository};
use surfsup_domain::range::{DateRange, TemperatureSummary};

use crate::error::ApiError;
use crate::state::AppState;

/// A summary rendered positionally as `[tmin, tmax, tavg]`.
pub struct SummaryTriple(pub TemperatureSummary);

impl Serialize for SummaryTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.0.tmin, self.0.tmax, self.0.tavg).serialize(serializer)
    }
}

/// Possible responses from the summary endpoints.
pub enum SummaryResponse {
    /// 200 OK with `[tmin, tmax, tavg]`, all `null` when nothing matched.
    Ok(Json<SummaryTriple>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/:start` — summary of every observation on or after `start`.
pub async fn since<SR, MR>(
    State(state): State<AppState<SR, MR>>,
    Path(start): Path<String>,
) -> Result<SummaryResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let range = DateRange::parse(&start, None)?;
    let summary = state.climate_service.temperature_summary(range).await?;
    Ok(SummaryResponse::Ok(Json(SummaryTriple(summary))))
}

/// `GET /api/v1.0/:start/:end` — summary between both dates, inclusive.
///
/// An `end` before `start` matches nothing and yields the all-`null` summary.
pub async fn between<SR, MR>(
    State(state): State<AppState<SR, MR>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<SummaryResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let range = DateRange::parse(&start, Some(&end))?;
    let summary = state.climate_service.temperature_summary(range).await?;
    Ok(SummaryResponse::Ok(Json(SummaryTriple(summary))))
}
