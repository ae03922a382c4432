//! `stockwatch-alerts`
//!
//! **Responsibility:** low-stock replenishment alerts.
//!
//! This crate is pure computation over an already-loaded [`DataSnapshot`]:
//! - It performs no IO and holds no state between invocations.
//! - It never mutates reference data.
//! - Alerts are produced fresh per call and are never persisted.
//!
//! Pipeline per call: scope resolution → activity & threshold evaluation →
//! alert synthesis. See [`compute_low_stock_alerts`].

pub mod activity;
pub mod alert;
pub mod engine;
pub mod error;
pub mod policy;
pub mod scope;
pub mod snapshot;

pub use activity::{ProductEvaluation, SalesVelocity};
pub use alert::{LowStockAlert, LowStockReport, SupplierContact};
pub use engine::compute_low_stock_alerts;
pub use error::AlertError;
pub use policy::AlertPolicy;
pub use snapshot::DataSnapshot;
