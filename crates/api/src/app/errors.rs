use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockwatch_alerts::AlertError;

pub fn alert_error_to_response(err: AlertError) -> axum::response::Response {
    match err {
        AlertError::CompanyNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "company_not_found", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
