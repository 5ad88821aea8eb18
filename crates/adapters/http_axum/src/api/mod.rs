//! JSON REST API handler modules, served under `/api/v1.0`.

#[allow(clippy::missing_errors_doc)]
pub mod precipitation;
#[allow(clippy::missing_errors_doc)]
pub mod stations;
#[allow(clippy::missing_errors_doc)]
pub mod temperature;
#[allow(clippy::missing_errors_doc)]
pub mod tobs;

use axum::Router;
use axum::routing::get;

use surfsup_app::ports::{MeasurementRepository, StationRepository};

use crate::state::AppState;

/// Build the `/api/v1.0` sub-router.
///
/// The fixed paths take priority over the `{start}` date parameter.
pub fn routes<SR, MR>() -> Router<AppState<SR, MR>>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/precipitation", get(precipitation::list::<SR, MR>))
        .route("/stations", get(stations::list::<SR, MR>))
        .route("/stations/details", get(stations::details::<SR, MR>))
        .route("/tobs", get(tobs::list::<SR, MR>))
        .route("/{start}", get(temperature::since::<SR, MR>))
        .route("/{start}/{end}", get(temperature::between::<SR, MR>))
}
