//! Strongly-typed identifiers used across the domain.
//!
//! Reference data is keyed by positive integer ids assigned by the upstream
//! data source.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a company (the scoping boundary for alerts).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i64);

/// Identifier of a warehouse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseId(i64);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a supplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

/// Identifier of a single (product, warehouse) stock record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryRecordId(i64);

/// Identifier of a sale record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = i64::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(CompanyId, "CompanyId");
impl_int_newtype!(WarehouseId, "WarehouseId");
impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(SupplierId, "SupplierId");
impl_int_newtype!(InventoryRecordId, "InventoryRecordId");
impl_int_newtype!(SaleId, "SaleId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        let id: CompanyId = "42".parse().unwrap();
        assert_eq!(id, CompanyId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "acme".parse::<WarehouseId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("WarehouseId")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 7);
    }
}
