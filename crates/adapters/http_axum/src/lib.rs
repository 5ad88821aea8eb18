//! # surfsup-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API** under `/api/v1.0`
//!   (`/precipitation`, `/stations`, `/tobs`, `/{start}`, `/{start}/{end}`)
//! - Serve a plain HTML welcome page at `/` listing the available routes
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `surfsup-app` (for port traits and services) and `surfsup-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod welcome;
