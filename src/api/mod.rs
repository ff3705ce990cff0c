//! API Module
//!
//! HTTP handlers and routing for the read-through proxy.
//!
//! # Endpoints
//! - `GET /api/*path` - Upstream resource, served through the cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
