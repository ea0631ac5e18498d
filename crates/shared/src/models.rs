use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jurimetry::{CaseAnalysisRequest, CaseAnalysisResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseAnalysisRequest {
    #[serde(default)]
    pub case_id: Option<Uuid>,
    #[serde(flatten)]
    pub analysis: CaseAnalysisRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseAnalysisResponse {
    pub analysis_id: Uuid,
    #[serde(flatten)]
    pub result: CaseAnalysisResult,
}

/// A persisted analysis: the request that produced it plus the computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysisRecord {
    pub id: Uuid,
    pub case_id: Option<Uuid>,
    #[serde(flatten)]
    pub request: CaseAnalysisRequest,
    #[serde(flatten)]
    pub result: CaseAnalysisResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCaseAnalysesResponse {
    pub items: Vec<CaseAnalysisRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
