//! HTTP API: configuration, data loading, routing, and response mapping.
//!
//! The alert engine itself lives in `stockwatch-alerts`; this crate only
//! feeds it a snapshot and turns its results into JSON.

pub mod app;
pub mod config;
pub mod fixtures;
pub mod middleware;
