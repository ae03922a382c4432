use serde::{Deserialize, Serialize};

use stockwatch_core::{InventoryRecordId, ProductId, WarehouseId};

/// Current stock of one product in one warehouse.
///
/// `quantity` is unsigned, so the non-negative stock invariant holds by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryRecordId,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub quantity: u64,
}

impl InventoryRecord {
    pub fn new(
        id: InventoryRecordId,
        product_id: ProductId,
        warehouse_id: WarehouseId,
        quantity: u64,
    ) -> Self {
        Self {
            id,
            product_id,
            warehouse_id,
            quantity,
        }
    }

    /// True when stock is strictly below `threshold`.
    pub fn is_below(&self, threshold: u64) -> bool {
        self.quantity < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: u64) -> InventoryRecord {
        InventoryRecord::new(
            InventoryRecordId::new(1),
            ProductId::new(1),
            WarehouseId::new(1),
            quantity,
        )
    }

    #[test]
    fn below_threshold_is_strict() {
        assert!(record(19).is_below(20));
        assert!(!record(20).is_below(20));
        assert!(!record(21).is_below(20));
    }

    #[test]
    fn zero_stock_is_below_any_positive_threshold() {
        assert!(record(0).is_below(1));
        assert!(!record(0).is_below(0));
    }

    #[test]
    fn negative_quantity_is_rejected_on_deserialize() {
        let res: Result<InventoryRecord, _> = serde_json::from_str(
            r#"{"id": 1, "product_id": 1, "warehouse_id": 1, "quantity": -3}"#,
        );
        assert!(res.is_err());
    }
}
