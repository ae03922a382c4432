use std::collections::HashMap;

use stockwatch_core::{CompanyId, Entity, ProductId, SupplierId, WarehouseId};
use stockwatch_inventory::{Company, InventoryRecord, Warehouse};
use stockwatch_parties::Supplier;
use stockwatch_products::Product;
use stockwatch_sales::SaleRecord;

/// Consistent, read-only view of the reference data an alert run needs.
///
/// Keyed collections are indexed by entity id (a later insert with the same
/// id replaces the earlier one). Inventory keeps its source order, which
/// determines alert order. Duplicate (product, warehouse) inventory records
/// are kept as independent records.
#[derive(Debug, Clone, Default)]
pub struct DataSnapshot {
    companies: HashMap<CompanyId, Company>,
    warehouses: HashMap<WarehouseId, Warehouse>,
    products: HashMap<ProductId, Product>,
    suppliers: HashMap<SupplierId, Supplier>,
    inventory: Vec<InventoryRecord>,
    sales: Vec<SaleRecord>,
}

impl DataSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(mut self, companies: impl IntoIterator<Item = Company>) -> Self {
        index_into(&mut self.companies, companies);
        self
    }

    pub fn with_warehouses(mut self, warehouses: impl IntoIterator<Item = Warehouse>) -> Self {
        index_into(&mut self.warehouses, warehouses);
        self
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        index_into(&mut self.products, products);
        self
    }

    pub fn with_suppliers(mut self, suppliers: impl IntoIterator<Item = Supplier>) -> Self {
        index_into(&mut self.suppliers, suppliers);
        self
    }

    pub fn with_inventory(mut self, records: impl IntoIterator<Item = InventoryRecord>) -> Self {
        self.inventory.extend(records);
        self
    }

    pub fn with_sales(mut self, sales: impl IntoIterator<Item = SaleRecord>) -> Self {
        self.sales.extend(sales);
        self
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(&id)
    }

    pub fn warehouse(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.get(&id)
    }

    pub fn warehouses(&self) -> impl Iterator<Item = &Warehouse> {
        self.warehouses.values()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.get(&id)
    }

    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }
}

fn index_into<E: Entity>(map: &mut HashMap<E::Id, E>, items: impl IntoIterator<Item = E>) {
    map.extend(items.into_iter().map(|e| (e.id(), e)));
}
