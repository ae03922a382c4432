//! Stage 3 and the public entry point.

use chrono::{DateTime, Utc};

use stockwatch_core::CompanyId;
use stockwatch_inventory::InventoryRecord;

use crate::activity::{evaluate_product, index_sales, ProductEvaluation};
use crate::alert::{LowStockAlert, LowStockReport, SupplierContact};
use crate::error::AlertError;
use crate::policy::AlertPolicy;
use crate::scope::{group_inventory, resolve_scope};
use crate::snapshot::DataSnapshot;

/// Compute low-stock alerts for every warehouse of `company_id`.
///
/// Rules:
/// - Only warehouses owned by the company are considered.
/// - A product alerts only if it sold at least once inside the lookback window.
/// - A stock record alerts when its quantity is strictly below the threshold
///   of the product's category.
/// - `days_until_stockout` is `floor(quantity / average_daily_sales)`, absent
///   when the average is zero.
///
/// Records pointing at unknown products are skipped; unknown suppliers or
/// warehouses only blank the matching alert field.
///
/// Alerts are ordered by product (first appearance in inventory), then by the
/// product's stock records in source order.
#[tracing::instrument(level = "debug", skip(snapshot, policy), fields(company_id = %company_id))]
pub fn compute_low_stock_alerts(
    company_id: CompanyId,
    snapshot: &DataSnapshot,
    policy: &AlertPolicy,
    now: DateTime<Utc>,
) -> Result<LowStockReport, AlertError> {
    let scope = resolve_scope(company_id, snapshot)?;
    let groups = group_inventory(snapshot.inventory(), &scope);
    let sales_by_product = index_sales(snapshot.sales());

    let mut alerts: Vec<LowStockAlert> = Vec::new();

    for group in &groups {
        let Some(product) = snapshot.product(group.product_id) else {
            tracing::debug!(product_id = %group.product_id, "skipping stock for unknown product");
            continue;
        };

        let sales = sales_by_product
            .get(&group.product_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let Some(evaluation) = evaluate_product(product, sales, policy, now) else {
            continue;
        };

        alerts.extend(
            group
                .records
                .iter()
                .filter_map(|record| synthesize(record, &evaluation, snapshot)),
        );
    }

    tracing::debug!(
        warehouses = scope.len(),
        products = groups.len(),
        alerts = alerts.len(),
        "computed low-stock alerts"
    );

    Ok(LowStockReport {
        company_id,
        generated_at: now,
        alerts,
    })
}

fn synthesize(
    record: &InventoryRecord,
    evaluation: &ProductEvaluation<'_>,
    snapshot: &DataSnapshot,
) -> Option<LowStockAlert> {
    if !record.is_below(evaluation.threshold) {
        return None;
    }

    let product = evaluation.product;
    let supplier = snapshot.supplier(product.supplier_id).map(SupplierContact::from);
    if supplier.is_none() {
        tracing::debug!(
            product_id = %product.id,
            supplier_id = %product.supplier_id,
            "product references unknown supplier"
        );
    }

    Some(LowStockAlert {
        product_id: product.id,
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        warehouse_id: record.warehouse_id,
        warehouse_name: snapshot.warehouse(record.warehouse_id).map(|w| w.name.clone()),
        current_stock: record.quantity,
        threshold: evaluation.threshold,
        days_until_stockout: evaluation.velocity.days_until_stockout(record.quantity),
        supplier,
    })
}
