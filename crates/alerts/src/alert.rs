use chrono::{DateTime, Utc};
use serde::Serialize;

use stockwatch_core::{CompanyId, ProductId, SupplierId, WarehouseId};
use stockwatch_parties::Supplier;

/// Supplier contact details copied into an alert at computation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierContact {
    pub id: SupplierId,
    pub name: String,
    pub contact_email: Option<String>,
}

impl From<&Supplier> for SupplierContact {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name.clone(),
            contact_email: supplier.contact_email.clone(),
        }
    }
}

/// One product running low in one warehouse.
///
/// Derived per request; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_name: Option<String>,
    pub current_stock: u64,
    pub threshold: u64,
    /// Absent when the product sold nothing inside the average window.
    pub days_until_stockout: Option<u64>,
    pub supplier: Option<SupplierContact>,
}

/// All alerts for one company, in synthesis order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockReport {
    pub company_id: CompanyId,
    pub generated_at: DateTime<Utc>,
    pub alerts: Vec<LowStockAlert>,
}

impl LowStockReport {
    pub fn total_alerts(&self) -> usize {
        self.alerts.len()
    }
}
