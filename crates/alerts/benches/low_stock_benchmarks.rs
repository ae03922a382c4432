use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, Utc};
use stockwatch_alerts::{compute_low_stock_alerts, AlertPolicy, DataSnapshot};
use stockwatch_core::{CompanyId, InventoryRecordId, ProductId, SaleId, SupplierId, WarehouseId};
use stockwatch_inventory::{Company, InventoryRecord, Warehouse};
use stockwatch_parties::Supplier;
use stockwatch_products::Product;
use stockwatch_sales::SaleRecord;

const WAREHOUSES: i64 = 8;
const SALES_PER_PRODUCT: i64 = 20;

/// Synthetic catalog: `products` products stocked in every warehouse, half of
/// the warehouses owned by the benchmarked company.
fn snapshot(products: i64) -> DataSnapshot {
    let now = Utc::now();
    let categories = ["fast-moving", "normal", "slow-moving", "seasonal"];

    let mut inventory = Vec::new();
    let mut sales = Vec::new();
    for p in 1..=products {
        for w in 1..=WAREHOUSES {
            inventory.push(InventoryRecord::new(
                InventoryRecordId::new(p * WAREHOUSES + w),
                ProductId::new(p),
                WarehouseId::new(w),
                ((p * 7 + w * 13) % 80) as u64,
            ));
        }
        for s in 0..SALES_PER_PRODUCT {
            let sale = SaleRecord::new(
                SaleId::new(p * SALES_PER_PRODUCT + s),
                ProductId::new(p),
                (s % 9 + 1) as u64,
                now - Duration::days((p + s * 11) % 150),
            )
            .expect("positive quantity");
            sales.push(sale);
        }
    }

    DataSnapshot::new()
        .with_companies([
            Company::new(CompanyId::new(1), "Acme Corp").expect("company"),
            Company::new(CompanyId::new(2), "Globex").expect("company"),
        ])
        .with_warehouses((1..=WAREHOUSES).map(|w| {
            Warehouse::new(WarehouseId::new(w), CompanyId::new(1 + w % 2), format!("Warehouse {w}"))
                .expect("warehouse")
        }))
        .with_suppliers([Supplier::new(SupplierId::new(1), "Supplier Corp").expect("supplier")])
        .with_products((1..=products).map(|p| {
            Product::new(
                ProductId::new(p),
                format!("Product {p}"),
                format!("SKU-{p:05}"),
                categories[(p % 4) as usize],
                SupplierId::new(1),
            )
            .expect("product")
        }))
        .with_inventory(inventory)
        .with_sales(sales)
}

fn bench_compute_low_stock_alerts(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_low_stock_alerts");
    let policy = AlertPolicy::default();

    for products in [100i64, 1_000, 10_000] {
        let data = snapshot(products);
        let now = Utc::now();
        group.throughput(Throughput::Elements(data.inventory().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(products), &data, |b, data| {
            b.iter(|| {
                let report = compute_low_stock_alerts(CompanyId::new(1), black_box(data), &policy, now)
                    .expect("known company");
                black_box(report.total_alerts())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_low_stock_alerts);
criterion_main!(benches);
