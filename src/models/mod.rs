//! Response models for the proxy API

pub mod responses;

pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
