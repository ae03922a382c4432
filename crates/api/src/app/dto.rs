use serde::Serialize;

use stockwatch_alerts::{LowStockAlert, LowStockReport, SupplierContact};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LowStockAlertsResponse {
    pub alerts: Vec<LowStockAlertDto>,
    pub total_alerts: usize,
}

#[derive(Debug, Serialize)]
pub struct LowStockAlertDto {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: i64,
    pub warehouse_name: Option<String>,
    pub current_stock: u64,
    pub threshold: u64,
    pub days_until_stockout: Option<u64>,
    pub supplier: Option<SupplierDto>,
}

#[derive(Debug, Serialize)]
pub struct SupplierDto {
    pub id: i64,
    pub name: String,
    pub contact_email: Option<String>,
}

// -------------------------
// Mapping helpers
// -------------------------

impl From<LowStockReport> for LowStockAlertsResponse {
    fn from(report: LowStockReport) -> Self {
        let total_alerts = report.total_alerts();
        Self {
            alerts: report.alerts.into_iter().map(LowStockAlertDto::from).collect(),
            total_alerts,
        }
    }
}

impl From<LowStockAlert> for LowStockAlertDto {
    fn from(a: LowStockAlert) -> Self {
        Self {
            product_id: a.product_id.get(),
            product_name: a.product_name,
            sku: a.sku,
            warehouse_id: a.warehouse_id.get(),
            warehouse_name: a.warehouse_name,
            current_stock: a.current_stock,
            threshold: a.threshold,
            days_until_stockout: a.days_until_stockout,
            supplier: a.supplier.map(SupplierDto::from),
        }
    }
}

impl From<SupplierContact> for SupplierDto {
    fn from(s: SupplierContact) -> Self {
        Self {
            id: s.id.get(),
            name: s.name,
            contact_email: s.contact_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockwatch_core::{CompanyId, ProductId, WarehouseId};

    #[test]
    fn absent_fields_serialize_as_null() {
        let report = LowStockReport {
            company_id: CompanyId::new(1),
            generated_at: Utc::now(),
            alerts: vec![LowStockAlert {
                product_id: ProductId::new(1),
                product_name: "Widget A".to_string(),
                sku: "WID-001".to_string(),
                warehouse_id: WarehouseId::new(2),
                warehouse_name: None,
                current_stock: 0,
                threshold: 20,
                days_until_stockout: None,
                supplier: None,
            }],
        };

        let json = serde_json::to_value(LowStockAlertsResponse::from(report)).unwrap();
        assert_eq!(json["total_alerts"], 1);
        let alert = &json["alerts"][0];
        assert_eq!(alert["product_id"], 1);
        assert_eq!(alert["warehouse_id"], 2);
        assert!(alert["warehouse_name"].is_null());
        assert!(alert["days_until_stockout"].is_null());
        assert!(alert["supplier"].is_null());
    }
}
