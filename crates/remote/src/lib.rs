//! HTTP client for the agricultural data API.
//!
//! Wraps `reqwest` with typed endpoints for the product catalog, dataset
//! availability, and point-value queries. The client performs no retry or
//! backoff; failures surface to whoever initiated the load.

pub mod client;
pub mod error;
pub mod geojson;
pub mod queue;

pub use client::*;
pub use error::*;
pub use geojson::*;
pub use queue::*;
