//! `stockwatch-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the entity trait and the domain error model.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, InventoryRecordId, ProductId, SaleId, SupplierId, WarehouseId};
