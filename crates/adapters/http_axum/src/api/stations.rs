//! JSON REST handlers for stations.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use surfsup_app::ports::{MeasurementRepository, StationRepository};
use surfsup_domain::station::Station;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the station code list endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON array of station codes.
    Ok(Json<Vec<String>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the station details endpoint.
pub enum DetailsResponse {
    /// 200 OK with a JSON array of station objects.
    Ok(Json<Vec<Station>>),
}

impl IntoResponse for DetailsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/stations`
pub async fn list<SR, MR>(
    State(state): State<AppState<SR, MR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let codes = state.climate_service.station_codes().await?;
    Ok(ListResponse::Ok(Json(codes)))
}

/// `GET /api/v1.0/stations/details`
pub async fn details<SR, MR>(
    State(state): State<AppState<SR, MR>>,
) -> Result<DetailsResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let stations = state.climate_service.stations().await?;
    Ok(DetailsResponse::Ok(Json(stations)))
}
