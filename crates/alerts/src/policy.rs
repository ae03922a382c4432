use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use stockwatch_products::ProductCategory;

pub const DEFAULT_THRESHOLD: u64 = 10;
pub const DEFAULT_LOOKBACK_WINDOW_DAYS: i64 = 90;
pub const DEFAULT_AVERAGE_WINDOW_DAYS: i64 = 30;

/// Alerting policy: per-category thresholds and the two trailing sales windows.
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertPolicy {
    /// Stock level under which a product is considered low, per category.
    pub thresholds_by_category: HashMap<ProductCategory, u64>,
    /// Threshold used for categories missing from `thresholds_by_category`.
    pub default_threshold: u64,
    /// A product must have sold within this many days to be alerted on.
    pub lookback_window_days: i64,
    /// Average daily sales are computed over this many trailing days.
    pub average_window_days: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        let thresholds_by_category = HashMap::from([
            (ProductCategory::FastMoving, 50),
            (ProductCategory::Normal, 20),
            (ProductCategory::SlowMoving, 5),
        ]);

        Self {
            thresholds_by_category,
            default_threshold: DEFAULT_THRESHOLD,
            lookback_window_days: DEFAULT_LOOKBACK_WINDOW_DAYS,
            average_window_days: DEFAULT_AVERAGE_WINDOW_DAYS,
        }
    }
}

impl AlertPolicy {
    pub fn with_threshold(mut self, category: ProductCategory, threshold: u64) -> Self {
        self.thresholds_by_category.insert(category, threshold);
        self
    }

    pub fn with_default_threshold(mut self, threshold: u64) -> Self {
        self.default_threshold = threshold;
        self
    }

    pub fn with_lookback_window_days(mut self, days: i64) -> Self {
        self.lookback_window_days = days;
        self
    }

    pub fn with_average_window_days(mut self, days: i64) -> Self {
        self.average_window_days = days;
        self
    }

    /// Configured threshold for `category`, if any.
    pub fn configured_threshold(&self, category: &ProductCategory) -> Option<u64> {
        self.thresholds_by_category.get(category).copied()
    }

    /// Threshold for `category`, falling back to `default_threshold`.
    ///
    /// A configured threshold of 0 is honored (it disables alerts for that category).
    pub fn threshold_for(&self, category: &ProductCategory) -> u64 {
        self.configured_threshold(category)
            .unwrap_or(self.default_threshold)
    }

    pub fn lookback_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        cutoff(now, self.lookback_window_days)
    }

    pub fn average_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        cutoff(now, self.average_window_days)
    }
}

/// `now - days`, saturating to the earliest representable instant.
fn cutoff(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|d| now.checked_sub_signed(d))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
