//! Deterministic admissions confidence scoring.
//!
//! [`scoring`] holds the pure engine. [`profiles`] and [`import`] feed it profiles from a
//! store, HTTP bodies, or CSV exports. The remaining modules carry configuration, errors, and
//! tracing setup shared with the API service.

pub mod config;
pub mod error;
pub mod import;
pub mod profiles;
pub mod scoring;
pub mod telemetry;
