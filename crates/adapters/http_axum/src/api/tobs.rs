//! JSON REST handler for the last year of temperature observations.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use surfsup_app::ports::{MeasurementRepository, StationRepository};
use surfsup_domain::measurement::TemperatureObservation;

use crate::error::ApiError;
use crate::state::AppState;

/// Observations flattened into one array: `[date, tobs, date, tobs, ...]`.
pub struct FlatObservations(pub Vec<TemperatureObservation>);

impl Serialize for FlatObservations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len() * 2))?;
        for obs in &self.0 {
            seq.serialize_element(&obs.date)?;
            seq.serialize_element(&obs.tobs)?;
        }
        seq.end()
    }
}

/// Possible responses from the tobs endpoint.
pub enum ListResponse {
    /// 200 OK with a flat `[date, tobs, ...]` array, oldest first.
    Ok(Json<FlatObservations>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/tobs`
pub async fn list<SR, MR>(
    State(state): State<AppState<SR, MR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let observations = state.climate_service.last_year_temperatures().await?;
    Ok(ListResponse::Ok(Json(FlatObservations(observations))))
}
