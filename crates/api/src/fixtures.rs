//! Reference data loading: JSON fixture files and the built-in sample data set.
//!
//! Data is read once at startup into an immutable [`DataSnapshot`]; nothing is
//! ever written back.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use stockwatch_alerts::DataSnapshot;
use stockwatch_core::{
    CompanyId, DomainResult, InventoryRecordId, ProductId, SaleId, SupplierId, WarehouseId,
};
use stockwatch_inventory::{Company, InventoryRecord, Warehouse};
use stockwatch_parties::Supplier;
use stockwatch_products::{Product, ProductCategory};
use stockwatch_sales::SaleRecord;

/// On-disk shape of a data fixture. Every collection is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotFixture {
    pub companies: Vec<Company>,
    pub warehouses: Vec<Warehouse>,
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryRecord>,
    pub sales: Vec<SaleRecord>,
}

impl SnapshotFixture {
    /// Rejects records that break the data model (zero-quantity sales, blank
    /// names, malformed supplier emails) before they reach the engine.
    pub fn into_snapshot(self) -> DomainResult<DataSnapshot> {
        for sale in &self.sales {
            SaleRecord::new(sale.id, sale.product_id, sale.quantity, sale.sold_at)?;
        }
        for company in &self.companies {
            Company::new(company.id, company.name.as_str())?;
        }
        for warehouse in &self.warehouses {
            Warehouse::new(warehouse.id, warehouse.company_id, warehouse.name.as_str())?;
        }
        for product in &self.products {
            Product::new(
                product.id,
                product.name.as_str(),
                product.sku.as_str(),
                product.category.clone(),
                product.supplier_id,
            )?;
        }
        for supplier in &self.suppliers {
            supplier.validate()?;
        }

        Ok(DataSnapshot::new()
            .with_companies(self.companies)
            .with_warehouses(self.warehouses)
            .with_suppliers(self.suppliers)
            .with_products(self.products)
            .with_inventory(self.inventory)
            .with_sales(self.sales))
    }
}

pub fn parse_snapshot(raw: &str) -> anyhow::Result<DataSnapshot> {
    let fixture: SnapshotFixture = serde_json::from_str(raw).context("invalid data fixture")?;
    Ok(fixture.into_snapshot()?)
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<DataSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    let snapshot = parse_snapshot(&raw).with_context(|| format!("in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        inventory = snapshot.inventory().len(),
        sales = snapshot.sales().len(),
        "loaded data fixture"
    );
    Ok(snapshot)
}

/// Small demo data set: one company with two warehouses and two products.
///
/// Widget A sold recently; Gizmo B has an old sale outside the lookback window
/// plus a recent one. Sale times are relative to `now`.
pub fn sample_snapshot(now: DateTime<Utc>) -> DomainResult<DataSnapshot> {
    let acme = CompanyId::new(1);
    let main = WarehouseId::new(1);
    let overflow = WarehouseId::new(2);
    let widget = ProductId::new(1);
    let gizmo = ProductId::new(2);

    let sale = |id: i64, product: ProductId, quantity: u64, days_ago: i64| {
        SaleRecord::new(SaleId::new(id), product, quantity, now - Duration::days(days_ago))
    };
    let stock = |id: i64, product: ProductId, warehouse: WarehouseId, quantity: u64| {
        InventoryRecord::new(InventoryRecordId::new(id), product, warehouse, quantity)
    };

    Ok(DataSnapshot::new()
        .with_companies([Company::new(acme, "Acme Corp")?])
        .with_warehouses([
            Warehouse::new(main, acme, "Main Warehouse")?,
            Warehouse::new(overflow, acme, "Overflow Warehouse")?,
        ])
        .with_suppliers([
            Supplier::new(SupplierId::new(1), "Supplier Corp")?
                .with_contact_email("orders@supplier.com")?,
            Supplier::new(SupplierId::new(2), "Another Supplies")?
                .with_contact_email("hello@another.com")?,
        ])
        .with_products([
            Product::new(widget, "Widget A", "WID-001", ProductCategory::Normal, SupplierId::new(1))?,
            Product::new(gizmo, "Gizmo B", "GIZ-002", ProductCategory::FastMoving, SupplierId::new(2))?,
        ])
        .with_inventory([
            stock(1, widget, main, 5),
            stock(2, widget, overflow, 0),
            stock(3, gizmo, main, 200),
            stock(4, gizmo, overflow, 10),
        ])
        .with_sales([
            sale(1, widget, 10, 5)?,
            sale(2, gizmo, 100, 200)?,
            sale(3, gizmo, 60, 10)?,
        ]))
}
