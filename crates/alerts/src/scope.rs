//! Stage 1: which warehouses (and which stock records) a company may see.

use std::collections::{HashMap, HashSet};

use stockwatch_core::{CompanyId, ProductId, WarehouseId};
use stockwatch_inventory::InventoryRecord;

use crate::error::AlertError;
use crate::snapshot::DataSnapshot;

/// In-scope stock records of one product, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup<'a> {
    pub product_id: ProductId,
    pub records: Vec<&'a InventoryRecord>,
}

/// Resolve the warehouses owned by `company_id`.
///
/// Fails with [`AlertError::CompanyNotFound`] if the company is unknown. A
/// known company without warehouses yields an empty scope.
pub fn resolve_scope(
    company_id: CompanyId,
    snapshot: &DataSnapshot,
) -> Result<HashSet<WarehouseId>, AlertError> {
    if snapshot.company(company_id).is_none() {
        return Err(AlertError::CompanyNotFound(company_id));
    }

    Ok(snapshot
        .warehouses()
        .filter(|w| w.belongs_to(company_id))
        .map(|w| w.id)
        .collect())
}

/// Group in-scope inventory by product.
///
/// Groups are ordered by first appearance of their product in `records`;
/// records within a group keep source order. Out-of-scope records are dropped.
pub fn group_inventory<'a>(
    records: &'a [InventoryRecord],
    scope: &HashSet<WarehouseId>,
) -> Vec<ProductGroup<'a>> {
    let mut groups: Vec<ProductGroup<'a>> = Vec::new();
    let mut index: HashMap<ProductId, usize> = HashMap::new();

    for record in records.iter().filter(|r| scope.contains(&r.warehouse_id)) {
        let slot = *index.entry(record.product_id).or_insert_with(|| {
            groups.push(ProductGroup {
                product_id: record.product_id,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwatch_core::InventoryRecordId;
    use stockwatch_inventory::{Company, Warehouse};

    fn snapshot() -> DataSnapshot {
        DataSnapshot::new()
            .with_companies([
                Company::new(CompanyId::new(1), "Acme Corp").unwrap(),
                Company::new(CompanyId::new(2), "Globex").unwrap(),
                Company::new(CompanyId::new(3), "Empty Co").unwrap(),
            ])
            .with_warehouses([
                Warehouse::new(WarehouseId::new(10), CompanyId::new(1), "Main Warehouse").unwrap(),
                Warehouse::new(WarehouseId::new(11), CompanyId::new(1), "Overflow Warehouse").unwrap(),
                Warehouse::new(WarehouseId::new(20), CompanyId::new(2), "Globex Depot").unwrap(),
            ])
    }

    fn rec(id: i64, product: i64, warehouse: i64) -> InventoryRecord {
        InventoryRecord::new(
            InventoryRecordId::new(id),
            ProductId::new(product),
            WarehouseId::new(warehouse),
            1,
        )
    }

    #[test]
    fn scope_contains_only_company_warehouses() {
        let scope = resolve_scope(CompanyId::new(1), &snapshot()).unwrap();
        assert_eq!(scope, HashSet::from([WarehouseId::new(10), WarehouseId::new(11)]));
    }

    #[test]
    fn unknown_company_is_rejected() {
        let err = resolve_scope(CompanyId::new(99), &snapshot()).unwrap_err();
        assert_eq!(err, AlertError::CompanyNotFound(CompanyId::new(99)));
    }

    #[test]
    fn company_without_warehouses_has_empty_scope() {
        let scope = resolve_scope(CompanyId::new(3), &snapshot()).unwrap();
        assert!(scope.is_empty());
    }

    #[test]
    fn grouping_drops_out_of_scope_records_and_keeps_order() {
        let records = vec![
            rec(1, 7, 11),
            rec(2, 5, 20),
            rec(3, 5, 10),
            rec(4, 7, 10),
            rec(5, 5, 11),
        ];
        let scope = HashSet::from([WarehouseId::new(10), WarehouseId::new(11)]);

        let groups = group_inventory(&records, &scope);

        let shape: Vec<(i64, Vec<i64>)> = groups
            .iter()
            .map(|g| (g.product_id.get(), g.records.iter().map(|r| r.id.get()).collect()))
            .collect();
        assert_eq!(shape, vec![(7, vec![1, 4]), (5, vec![3, 5])]);
    }
}
