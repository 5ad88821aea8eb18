//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use surfsup_app::ports::{MeasurementRepository, StationRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1.0` and serves the welcome page at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, MR>(state: AppState<SR, MR>) -> Router
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(crate::welcome::index))
        .route("/health", get(health_check))
        .nest("/api/v1.0", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use surfsup_app::services::climate_service::ClimateService;
    use surfsup_domain::error::SurfsUpError;
    use surfsup_domain::measurement::{PrecipitationReading, TemperatureObservation};
    use surfsup_domain::range::{DateRange, TemperatureSummary};
    use surfsup_domain::station::Station;
    use surfsup_domain::time::ObservationDate;
    use tower::ServiceExt;

    struct StubStationRepo;
    struct StubMeasurementRepo;
    struct FailingMeasurementRepo;

    fn date(s: &str) -> ObservationDate {
        s.parse().unwrap()
    }

    impl StationRepository for StubStationRepo {
        async fn list_codes(&self) -> Result<Vec<String>, SurfsUpError> {
            Ok(vec!["USC00519397".to_string()])
        }
        async fn get_all(&self) -> Result<Vec<Station>, SurfsUpError> {
            Ok(vec![Station::builder().id(1).station("USC00519397").build()])
        }
    }

    impl MeasurementRepository for StubMeasurementRepo {
        async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, SurfsUpError> {
            Ok(vec![PrecipitationReading {
                date: date("2017-08-23"),
                prcp: Some(0.45),
            }])
        }
        async fn latest_date(&self) -> Result<Option<ObservationDate>, SurfsUpError> {
            Ok(Some(date("2017-08-23")))
        }
        async fn temperature_observations_since(
            &self,
            from: ObservationDate,
        ) -> Result<Vec<TemperatureObservation>, SurfsUpError> {
            Ok(vec![TemperatureObservation {
                date: from,
                tobs: Some(77.0),
            }])
        }
        async fn temperature_summary(
            &self,
            _range: DateRange,
        ) -> Result<TemperatureSummary, SurfsUpError> {
            Ok(TemperatureSummary::from_values([60.0, 80.0]))
        }
    }

    impl MeasurementRepository for FailingMeasurementRepo {
        async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, SurfsUpError> {
            Err(SurfsUpError::Storage("disk on fire".into()))
        }
        async fn latest_date(&self) -> Result<Option<ObservationDate>, SurfsUpError> {
            Ok(None)
        }
        async fn temperature_observations_since(
            &self,
            _from: ObservationDate,
        ) -> Result<Vec<TemperatureObservation>, SurfsUpError> {
            Ok(vec![])
        }
        async fn temperature_summary(
            &self,
            _range: DateRange,
        ) -> Result<TemperatureSummary, SurfsUpError> {
            Ok(TemperatureSummary::default())
        }
    }

    fn test_app() -> Router {
        build(AppState::new(ClimateService::new(
            StubStationRepo,
            StubMeasurementRepo,
        )))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_routes_on_welcome_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("/api/v1.0/precipitation"));
        assert!(body.contains("/api/v1.0/tobs"));
    }

    #[tokio::test]
    async fn should_serve_precipitation_as_object() {
        let (status, body) = get_json(test_app(), "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "2017-08-23": 0.45 }));
    }

    #[tokio::test]
    async fn should_serve_station_codes() {
        let (status, body) = get_json(test_app(), "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["USC00519397"]));
    }

    #[tokio::test]
    async fn should_serve_station_details() {
        let (status, body) = get_json(test_app(), "/api/v1.0/stations/details").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["station"], "USC00519397");
        assert_eq!(body[0]["name"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn should_serve_tobs_from_one_year_before_latest() {
        let (status, body) = get_json(test_app(), "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["2016-08-23", 77.0]));
    }

    #[tokio::test]
    async fn should_serve_summary_from_start_date() {
        let (status, body) = get_json(test_app(), "/api/v1.0/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([60.0, 80.0, 70.0]));
    }

    #[tokio::test]
    async fn should_serve_summary_between_dates() {
        let (status, body) = get_json(test_app(), "/api/v1.0/2017-01-01/2017-01-07").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[2], 70.0);
    }

    #[tokio::test]
    async fn should_reject_malformed_start_date() {
        let (status, body) = get_json(test_app(), "/api/v1.0/01-01-2017").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "invalid date \"01-01-2017\", expected YYYY-MM-DD"
        );
    }

    #[tokio::test]
    async fn should_serve_null_summary_when_end_precedes_start() {
        let app = build(AppState::new(ClimateService::new(
            StubStationRepo,
            FailingMeasurementRepo,
        )));
        let (status, body) = get_json(app, "/api/v1.0/2017-01-07/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([null, null, null]));
    }

    #[tokio::test]
    async fn should_hide_storage_error_details() {
        let app = build(AppState::new(ClimateService::new(
            StubStationRepo,
            FailingMeasurementRepo,
        )));
        let (status, body) = get_json(app, "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }
}
