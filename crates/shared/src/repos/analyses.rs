use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::jurimetry::{
    AnalysisData, CaseAnalysisRequest, CaseAnalysisResult, SettlementSuggestion,
};
use crate::models::CaseAnalysisRecord;

use super::{Store, StoreError};

const ANALYSIS_COLUMNS: &str = "id, case_id, case_type, legal_thesis, court, court_section,
     judge_id, success_rate, average_duration, average_value,
     settlement_suggestion, analysis_data, created_at";

impl Store {
    pub async fn insert_case_analysis(
        &self,
        case_id: Option<Uuid>,
        request: &CaseAnalysisRequest,
        result: &CaseAnalysisResult,
    ) -> Result<Uuid, StoreError> {
        let settlement_suggestion = to_json_column(&result.settlement_suggestion)?;
        let analysis_data = to_json_column(&result.analysis_data)?;

        let analysis_id: Uuid = sqlx::query_scalar(
            "INSERT INTO case_analyses (
                id,
                case_id,
                case_type,
                legal_thesis,
                court,
                court_section,
                judge_id,
                success_rate,
                average_duration,
                average_value,
                settlement_suggestion,
                analysis_data
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(case_id)
        .bind(&request.case_type)
        .bind(&request.legal_thesis)
        .bind(request.court.as_deref())
        .bind(request.court_section.as_deref())
        .bind(request.judge_id)
        .bind(result.success_rate)
        .bind(result.average_duration)
        .bind(result.average_value)
        .bind(settlement_suggestion)
        .bind(analysis_data)
        .fetch_one(&self.pool)
        .await?;

        Ok(analysis_id)
    }

    pub async fn fetch_case_analysis(
        &self,
        analysis_id: Uuid,
    ) -> Result<Option<CaseAnalysisRecord>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {ANALYSIS_COLUMNS} FROM case_analyses WHERE id = $1"
        ))
        .bind(analysis_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_case_analysis).transpose()
    }

    pub async fn fetch_case_analyses(
        &self,
        case_id: Uuid,
    ) -> Result<Vec<CaseAnalysisRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {ANALYSIS_COLUMNS}
             FROM case_analyses
             WHERE case_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(case_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_case_analysis).collect()
    }
}

fn to_json_column<T: serde::Serialize>(value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value)
        .map_err(|err| StoreError::InvalidData(format!("failed to encode analysis column: {err}")))
}

fn row_to_case_analysis(row: &PgRow) -> Result<CaseAnalysisRecord, StoreError> {
    let settlement_suggestion: Value = row.try_get("settlement_suggestion")?;
    let analysis_data: Value = row.try_get("analysis_data")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    let settlement_suggestion: SettlementSuggestion = serde_json::from_value(settlement_suggestion)
        .map_err(|err| {
            StoreError::InvalidData(format!("invalid settlement_suggestion persisted: {err}"))
        })?;
    let analysis_data: AnalysisData = serde_json::from_value(analysis_data)
        .map_err(|err| StoreError::InvalidData(format!("invalid analysis_data persisted: {err}")))?;

    Ok(CaseAnalysisRecord {
        id: row.try_get("id")?,
        case_id: row.try_get("case_id")?,
        request: CaseAnalysisRequest {
            case_type: row.try_get("case_type")?,
            legal_thesis: row.try_get("legal_thesis")?,
            court: row.try_get("court")?,
            court_section: row.try_get("court_section")?,
            judge_id: row.try_get("judge_id")?,
        },
        result: CaseAnalysisResult {
            success_rate: row.try_get("success_rate")?,
            average_duration: row.try_get("average_duration")?,
            average_value: row.try_get("average_value")?,
            settlement_suggestion,
            analysis_data,
        },
        created_at,
    })
}
