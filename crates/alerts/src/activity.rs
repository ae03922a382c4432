//! Stage 2: recent-activity filter, sales velocity, threshold resolution.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use stockwatch_core::ProductId;
use stockwatch_products::Product;
use stockwatch_sales::SaleRecord;

use crate::policy::AlertPolicy;

/// Units sold over a fixed trailing window.
///
/// Days without sales count as zero; the window length never shrinks to the
/// days that actually had sales.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SalesVelocity {
    units_sold: u64,
    window_days: i64,
}

impl SalesVelocity {
    pub fn new(units_sold: u64, window_days: i64) -> Self {
        Self {
            units_sold,
            window_days,
        }
    }

    pub fn units_sold(&self) -> u64 {
        self.units_sold
    }

    /// Average units sold per day. Zero for a non-positive window.
    pub fn average_daily_sales(&self) -> f64 {
        if self.window_days <= 0 {
            return 0.0;
        }
        self.units_sold as f64 / self.window_days as f64
    }

    /// Whole days until `quantity` runs out at the average rate, i.e.
    /// `floor(quantity / average_daily_sales)`.
    ///
    /// `None` when the average is zero. Evaluated as
    /// `floor(quantity * window_days / units_sold)` in integers, so results
    /// like 5 / (10 / 30) land on exactly 15.
    pub fn days_until_stockout(&self, quantity: u64) -> Option<u64> {
        if self.window_days <= 0 || self.units_sold == 0 {
            return None;
        }
        let days = u128::from(quantity) * self.window_days as u128 / u128::from(self.units_sold);
        Some(u64::try_from(days).unwrap_or(u64::MAX))
    }
}

/// Outcome of stage 2 for a product that is still selling.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEvaluation<'a> {
    pub product: &'a Product,
    pub threshold: u64,
    pub velocity: SalesVelocity,
}

/// Index sales by product, preserving source order.
pub fn index_sales(sales: &[SaleRecord]) -> HashMap<ProductId, Vec<&SaleRecord>> {
    let mut by_product: HashMap<ProductId, Vec<&SaleRecord>> = HashMap::new();
    for sale in sales {
        by_product.entry(sale.product_id).or_default().push(sale);
    }
    by_product
}

/// Evaluate one product against the policy.
///
/// Returns `None` if the product has no sale inside the lookback window; such
/// products never alert, whatever their stock.
pub fn evaluate_product<'a>(
    product: &'a Product,
    sales: &[&SaleRecord],
    policy: &AlertPolicy,
    now: DateTime<Utc>,
) -> Option<ProductEvaluation<'a>> {
    let lookback_cutoff = policy.lookback_cutoff(now);
    if !sales.iter().any(|s| s.is_since(lookback_cutoff)) {
        return None;
    }

    let average_cutoff = policy.average_cutoff(now);
    let units_sold = sales
        .iter()
        .filter(|s| s.is_since(average_cutoff))
        .fold(0u64, |acc, s| acc.saturating_add(s.quantity));

    Some(ProductEvaluation {
        product,
        threshold: policy.threshold_for(&product.category),
        velocity: SalesVelocity::new(units_sold, policy.average_window_days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stockwatch_core::{SaleId, SupplierId};
    use stockwatch_products::ProductCategory;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn product(category: &str) -> Product {
        Product::new(ProductId::new(1), "Widget A", "WID-001", category, SupplierId::new(1)).unwrap()
    }

    fn sale(id: i64, quantity: u64, days_ago: i64) -> SaleRecord {
        SaleRecord::new(SaleId::new(id), ProductId::new(1), quantity, now() - Duration::days(days_ago))
            .unwrap()
    }

    #[test]
    fn average_uses_full_window_length() {
        let v = SalesVelocity::new(60, 30);
        assert_eq!(v.average_daily_sales(), 2.0);
        assert_eq!(v.days_until_stockout(10), Some(5));
    }

    #[test]
    fn stockout_projection_floors_exactly() {
        let v = SalesVelocity::new(10, 30);
        assert_eq!(v.days_until_stockout(5), Some(15));
        assert_eq!(v.days_until_stockout(0), Some(0));
        assert_eq!(v.days_until_stockout(1), Some(3));
    }

    #[test]
    fn stockout_projection_does_not_inherit_float_rounding() {
        // 23 / (23 / 30.0) is 29.999999999999996 in f64; the answer is 30.
        assert_eq!(SalesVelocity::new(23, 30).days_until_stockout(23), Some(30));
        assert_eq!(SalesVelocity::new(23, 30).days_until_stockout(46), Some(60));
        assert_eq!(SalesVelocity::new(46, 30).days_until_stockout(23), Some(15));
    }

    #[test]
    fn no_projection_without_sales_or_window() {
        assert_eq!(SalesVelocity::new(0, 30).days_until_stockout(5), None);
        assert_eq!(SalesVelocity::new(10, 0).average_daily_sales(), 0.0);
        assert_eq!(SalesVelocity::new(10, 0).days_until_stockout(5), None);
        assert_eq!(SalesVelocity::new(10, -3).days_until_stockout(5), None);
    }

    #[test]
    fn product_without_recent_sales_is_excluded() {
        let p = product("normal");
        let old = sale(1, 100, 200);
        let sales = vec![&old];
        assert!(evaluate_product(&p, &sales, &AlertPolicy::default(), now()).is_none());
        assert!(evaluate_product(&p, &[], &AlertPolicy::default(), now()).is_none());
    }

    #[test]
    fn lookback_only_sales_pass_activity_with_zero_velocity() {
        let p = product("normal");
        let s = sale(1, 40, 60);
        let eval = evaluate_product(&p, &[&s], &AlertPolicy::default(), now()).unwrap();
        assert_eq!(eval.velocity.units_sold(), 0);
        assert_eq!(eval.velocity.days_until_stockout(3), None);
    }

    #[test]
    fn sales_outside_lookback_do_not_count_toward_average() {
        let p = product("fast-moving");
        let old = sale(1, 100, 200);
        let recent = sale(2, 60, 10);
        let eval = evaluate_product(&p, &[&old, &recent], &AlertPolicy::default(), now()).unwrap();
        assert_eq!(eval.threshold, 50);
        assert_eq!(eval.velocity.average_daily_sales(), 2.0);
    }

    #[test]
    fn sale_exactly_at_cutoff_counts() {
        let p = product("normal");
        let edge = sale(1, 30, 30);
        let eval = evaluate_product(&p, &[&edge], &AlertPolicy::default(), now()).unwrap();
        assert_eq!(eval.velocity.units_sold(), 30);
    }

    #[test]
    fn unknown_category_uses_default_threshold() {
        let p = product("seasonal");
        assert_eq!(p.category, ProductCategory::Other("seasonal".into()));
        let s = sale(1, 1, 1);
        let policy = AlertPolicy::default().with_default_threshold(12);
        let eval = evaluate_product(&p, &[&s], &policy, now()).unwrap();
        assert_eq!(eval.threshold, 12);
    }

    #[test]
    fn index_groups_sales_per_product() {
        let a = sale(1, 1, 1);
        let mut b = sale(2, 2, 2);
        b.product_id = ProductId::new(2);
        let c = sale(3, 3, 3);
        let sales = vec![a, b, c];

        let index = index_sales(&sales);
        let ids: Vec<i64> = index[&ProductId::new(1)].iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(index[&ProductId::new(2)].len(), 1);
    }
}
