use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwatch_core::{DomainError, DomainResult, ProductId, SaleId};

/// A historical sale of `quantity` units of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub product_id: ProductId,
    pub quantity: u64,
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(
        id: SaleId,
        product_id: ProductId,
        quantity: u64,
        sold_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("sale quantity must be positive"));
        }
        Ok(Self {
            id,
            product_id,
            quantity,
            sold_at,
        })
    }

    /// True if the sale happened at or after `cutoff`.
    pub fn is_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.sold_at >= cutoff
    }
}
