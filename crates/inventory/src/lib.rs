//! Inventory reference data: companies, their warehouses, and per-warehouse
//! stock records.
//!
//! Plain read-only data; nothing here performs IO.

pub mod item;
pub mod warehouse;

pub use item::InventoryRecord;
pub use warehouse::{Company, Warehouse};
