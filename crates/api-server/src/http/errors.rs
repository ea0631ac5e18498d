use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::jurimetry::{ANALYSIS_FAILED_MESSAGE, AnalysisError};
use shared::models::{ErrorBody, ErrorResponse};
use shared::repos::StoreError;
use tracing::error;

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }),
    )
        .into_response()
}

pub(super) fn bad_request_response(code: &str, message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, code, message)
}

pub(super) fn not_found_response(message: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", message)
}

pub(super) fn service_unavailable_response(code: &str, message: &str) -> Response {
    error_response(StatusCode::SERVICE_UNAVAILABLE, code, message)
}

pub(super) fn analysis_error_response(err: AnalysisError) -> Response {
    match err {
        AnalysisError::AnalysisFailed => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "analysis_failed",
            ANALYSIS_FAILED_MESSAGE,
        ),
    }
}

pub(super) fn store_error_response(err: StoreError) -> Response {
    error!("database operation failed: {err}");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Unexpected server error",
    )
}
