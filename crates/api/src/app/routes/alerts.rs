use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockwatch_core::CompanyId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `GET /api/companies/:company_id/alerts/low-stock`
pub async fn low_stock_alerts(
    Extension(services): Extension<Arc<AppServices>>,
    Path(company_id): Path<String>,
) -> axum::response::Response {
    let company_id: CompanyId = match company_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id"),
    };

    let report = match services.low_stock_alerts(company_id) {
        Ok(r) => r,
        Err(e) => {
            tracing::info!(%company_id, error = %e, "low-stock alerts rejected");
            return errors::alert_error_to_response(e);
        }
    };

    tracing::info!(%company_id, total_alerts = report.total_alerts(), "low-stock alerts computed");

    (StatusCode::OK, Json(dto::LowStockAlertsResponse::from(report))).into_response()
}
