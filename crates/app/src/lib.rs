//! # surfsup-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StationRepository` — read station metadata
//!   - `MeasurementRepository` — read and aggregate daily measurements
//! - Define the **driving/inbound** use-cases in `ClimateService`:
//!   precipitation by date, station list, last-year temperatures, and
//!   temperature summaries over a date range
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `surfsup-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
