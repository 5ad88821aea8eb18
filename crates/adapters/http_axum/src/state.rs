//! Shared application state for axum handlers.

use std::sync::Arc;

use surfsup_app::ports::{MeasurementRepository, StationRepository};
use surfsup_app::services::climate_service::ClimateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR, MR> {
    /// Read-only climate queries.
    pub climate_service: Arc<ClimateService<SR, MR>>,
}

impl<SR, MR> Clone for AppState<SR, MR> {
    fn clone(&self) -> Self {
        Self {
            climate_service: Arc::clone(&self.climate_service),
        }
    }
}

impl<SR, MR> AppState<SR, MR>
where
    SR: StationRepository + Send + Sync + 'static,
    MR: MeasurementRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(climate_service: ClimateService<SR, MR>) -> Self {
        Self {
            climate_service: Arc::new(climate_service),
        }
    }
}
