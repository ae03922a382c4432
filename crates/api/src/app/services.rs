use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockwatch_alerts::{compute_low_stock_alerts, AlertError, AlertPolicy, DataSnapshot, LowStockReport};
use stockwatch_core::CompanyId;

/// Read-only state shared by all handlers.
///
/// The snapshot is immutable for the life of the process, so concurrent
/// requests always see one consistent view.
#[derive(Debug, Clone)]
pub struct AppServices {
    snapshot: Arc<DataSnapshot>,
    policy: AlertPolicy,
}

impl AppServices {
    pub fn new(snapshot: DataSnapshot, policy: AlertPolicy) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            policy,
        }
    }

    pub fn low_stock_alerts(&self, company_id: CompanyId) -> Result<LowStockReport, AlertError> {
        self.low_stock_alerts_at(company_id, Utc::now())
    }

    pub fn low_stock_alerts_at(
        &self,
        company_id: CompanyId,
        now: DateTime<Utc>,
    ) -> Result<LowStockReport, AlertError> {
        compute_low_stock_alerts(company_id, &self.snapshot, &self.policy, now)
    }
}
