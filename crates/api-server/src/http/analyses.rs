use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::jurimetry::CaseAnalysisRequest;
use shared::models::{
    CreateCaseAnalysisRequest, CreateCaseAnalysisResponse, ListCaseAnalysesResponse,
};
use tracing::info;
use uuid::Uuid;

use super::AppState;
use super::errors::{
    analysis_error_response, bad_request_response, not_found_response, store_error_response,
};

pub(super) async fn create_case_analysis(
    State(state): State<AppState>,
    Json(req): Json<CreateCaseAnalysisRequest>,
) -> Response {
    let analysis_request = match normalize_analysis_request(req.analysis) {
        Ok(request) => request,
        Err(message) => return bad_request_response("invalid_request", message),
    };

    let result = match state.jurimetry.analyze_case(&analysis_request).await {
        Ok(result) => result,
        Err(err) => return analysis_error_response(err),
    };

    let analysis_id = match state
        .store
        .persist_analysis(req.case_id, &analysis_request, &result)
        .await
    {
        Ok(analysis_id) => analysis_id,
        Err(err) => return store_error_response(err),
    };

    info!(
        %analysis_id,
        case_id = ?req.case_id,
        confidence = result.analysis_data.confidence_level.as_str(),
        "case analysis stored"
    );

    (
        StatusCode::CREATED,
        Json(CreateCaseAnalysisResponse {
            analysis_id,
            result,
        }),
    )
        .into_response()
}

pub(super) async fn get_case_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Response {
    match state.store.get_analysis(analysis_id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => not_found_response("Analysis not found"),
        Err(err) => store_error_response(err),
    }
}

pub(super) async fn list_case_analyses(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Response {
    match state.store.list_case_analyses(case_id).await {
        Ok(items) => (StatusCode::OK, Json(ListCaseAnalysesResponse { items })).into_response(),
        Err(err) => store_error_response(err),
    }
}

fn normalize_analysis_request(
    request: CaseAnalysisRequest,
) -> Result<CaseAnalysisRequest, &'static str> {
    let case_type = request.case_type.trim();
    if case_type.is_empty() {
        return Err("caseType must not be empty");
    }

    let legal_thesis = request.legal_thesis.trim();
    if legal_thesis.is_empty() {
        return Err("legalThesis must not be empty");
    }

    Ok(CaseAnalysisRequest {
        case_type: case_type.to_string(),
        legal_thesis: legal_thesis.to_string(),
        court: non_blank(request.court),
        court_section: non_blank(request.court_section),
        judge_id: request.judge_id,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
