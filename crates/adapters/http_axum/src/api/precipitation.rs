//! JSON REST handler for precipitation by date.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use surfsup_app::ports::{MeasurementRepository, StationRepository};
use surfsup_domain::time::ObservationDate;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the precipitation endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON object mapping each date to its precipitation.
    Ok(Json<BTreeMap<ObservationDate, Option<f64>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1.0/precipitation`
pub async fn list<SR, MR>(
    State(state): State<AppState<SR, MR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let prcp = state.climate_service.precipitation().await?;
    Ok(ListResponse::Ok(Json(prcp)))
}
