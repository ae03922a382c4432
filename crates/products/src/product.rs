use serde::{Deserialize, Serialize};

use stockwatch_core::error::ensure_not_blank;
use stockwatch_core::{DomainResult, Entity, ProductId, SupplierId};

/// Stock-movement category of a product.
///
/// The three well-known categories have configured thresholds. Any other
/// label is kept verbatim so callers can still configure (or fall back for) it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductCategory {
    FastMoving,
    Normal,
    SlowMoving,
    Other(String),
}

impl ProductCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProductCategory::FastMoving => "fast-moving",
            ProductCategory::Normal => "normal",
            ProductCategory::SlowMoving => "slow-moving",
            ProductCategory::Other(label) => label,
        }
    }
}

impl From<&str> for ProductCategory {
    fn from(value: &str) -> Self {
        match value {
            "fast-moving" => ProductCategory::FastMoving,
            "normal" => ProductCategory::Normal,
            "slow-moving" => ProductCategory::SlowMoving,
            other => ProductCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductCategory {
    fn from(value: String) -> Self {
        match ProductCategory::from(value.as_str()) {
            ProductCategory::Other(_) => ProductCategory::Other(value),
            known => known,
        }
    }
}

impl From<ProductCategory> for String {
    fn from(value: ProductCategory) -> Self {
        match value {
            ProductCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable product supplied by exactly one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub supplier_id: SupplierId,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<ProductCategory>,
        supplier_id: SupplierId,
    ) -> DomainResult<Self> {
        let name = name.into();
        let sku = sku.into();
        ensure_not_blank("product name", &name)?;
        ensure_not_blank("sku", &sku)?;

        Ok(Self {
            id,
            name,
            sku,
            category: category.into(),
            supplier_id,
        })
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
