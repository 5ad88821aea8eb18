//! # surfsup-domain
//!
//! Pure domain model for the surfsup climate API.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, observation dates
//! - Define **Stations** (observation site metadata)
//! - Define **Measurement** projections (the precipitation and temperature
//!   columns of one station's daily reading)
//! - Define inclusive **date ranges** and **temperature summaries**
//! - Contain all invariant enforcement (date parsing, one-year lookback
//!   arithmetic)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod measurement;
pub mod range;
pub mod station;
